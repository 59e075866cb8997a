//! Disney

use super::*;

/// Raw parameters of `as_disney`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisneyParams {
    pub n: Vector3f,
    pub t: Vector3f,
    pub base_color: Spectrum,
    pub subsurface: Float,
    pub metallic: Float,
    pub specular: Float,
    pub specular_tint: Float,
    pub anisotropic: Float,
    pub roughness: Float,
    pub sheen: Float,
    pub sheen_tint: Float,
    pub clearcoat: Float,
    pub clearcoat_gloss: Float,
}

/// The `as_disney` closure: the Disney principled BRDF.
pub struct DisneyClosure;

impl ClosureKind for DisneyClosure {
    type Params = DisneyParams;

    const NAME: &'static str = "as_disney";
    const ID: ClosureId = ClosureId::Disney;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::vector("N"),
        ClosureParam::vector("T"),
        ClosureParam::color("base_color"),
        ClosureParam::float("subsurface"),
        ClosureParam::float("metallic"),
        ClosureParam::float("specular"),
        ClosureParam::float("specular_tint"),
        ClosureParam::float("anisotropic"),
        ClosureParam::float("roughness"),
        ClosureParam::float("sheen"),
        ClosureParam::float("sheen_tint"),
        ClosureParam::float("clearcoat"),
        ClosureParam::float("clearcoat_gloss"),
    ];
    const MODES: ScatteringMode = ScatteringMode::DIFFUSE.union(ScatteringMode::GLOSSY);
    const CONVERT: Option<ConvertFn> = Some(convert_disney as ConvertFn);

    fn into_params(params: DisneyParams) -> ClosureParams {
        ClosureParams::Disney(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&DisneyParams> {
        match params {
            ClosureParams::Disney(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_disney<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<DisneyClosure>(params)?;

    let values = DisneyBrdfInputValues {
        base_color: p.base_color,
        subsurface: saturate(p.subsurface),
        metallic: saturate(p.metallic),
        specular: max(p.specular, 0.0),
        specular_tint: saturate(p.specular_tint),
        anisotropic: clamp(p.anisotropic, -1.0, 1.0),
        roughness: clamp(p.roughness, 0.0001, 1.0),
        sheen: saturate(p.sheen),
        sheen_tint: saturate(p.sheen_tint),
        clearcoat: max(p.clearcoat, 0.0),
        clearcoat_gloss: clamp(p.clearcoat_gloss, 0.0001, 1.0),
    };
    composite.add_closure(DisneyClosure::ID, shading_basis, weight, &p.n, Some(&p.t), values, arena)?;
    Ok(())
}
