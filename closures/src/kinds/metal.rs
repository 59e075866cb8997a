//! Metal

use super::*;

/// Raw parameters of `as_metal`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetalParams {
    /// Microfacet distribution: `ggx`, `beckmann` or `std`.
    pub dist: String,

    /// Normal.
    pub n: Vector3f,

    /// Tangent.
    pub t: Vector3f,

    /// Reflectance at normal incidence.
    pub normal_reflectance: Spectrum,

    /// Reflectance at grazing angles.
    pub edge_tint: Spectrum,

    pub roughness: Float,
    pub highlight_falloff: Float,
    pub anisotropy: Float,

    /// Keyword parameter.
    pub energy_compensation: Float,
}

/// The `as_metal` closure: a rough conductor.
pub struct MetalClosure;

impl ClosureKind for MetalClosure {
    type Params = MetalParams;

    const NAME: &'static str = "as_metal";
    const ID: ClosureId = ClosureId::Metal;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::string("dist"),
        ClosureParam::vector("N"),
        ClosureParam::vector("T"),
        ClosureParam::color("normal_reflectance"),
        ClosureParam::color("edge_tint"),
        ClosureParam::float("roughness"),
        ClosureParam::float("highlight_falloff"),
        ClosureParam::float("anisotropy"),
        ClosureParam::float_keyword("energy_compensation"),
    ];
    const MODES: ScatteringMode = ScatteringMode::GLOSSY.union(ScatteringMode::SPECULAR);
    const VARIANT_IDS: &'static [ClosureId] = &[ClosureId::MetalBeckmann, ClosureId::MetalGgx, ClosureId::MetalStd];
    const PREPARE: Option<PrepareFn> = Some(prepare_metal as PrepareFn);
    const CONVERT: Option<ConvertFn> = Some(convert_metal as ConvertFn);

    fn into_params(params: MetalParams) -> ClosureParams {
        ClosureParams::Metal(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&MetalParams> {
        match params {
            ClosureParams::Metal(p) => Some(p),
            _ => None,
        }
    }
}

fn prepare_metal() -> ClosureParams {
    MetalClosure::into_params(MetalParams {
        energy_compensation: DEFAULT_ENERGY_COMPENSATION,
        ..Default::default()
    })
}

fn convert_metal<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<MetalClosure>(params)?;

    let closure_type = match p.dist.as_str() {
        "ggx" => ClosureId::MetalGgx,
        "beckmann" => ClosureId::MetalBeckmann,
        "std" => ClosureId::MetalStd,
        dist => return Err(ClosureError::InvalidDistribution(dist.to_string())),
    };

    let values = MetalBrdfInputValues {
        normal_reflectance: p.normal_reflectance,
        edge_tint: p.edge_tint,
        reflectance_multiplier: 1.0,
        roughness: max(p.roughness, 0.0),
        highlight_falloff: saturate(p.highlight_falloff),
        anisotropy: clamp(p.anisotropy, -1.0, 1.0),
        energy_compensation: saturate(p.energy_compensation),
    };
    composite.add_closure(closure_type, shading_basis, weight, &p.n, Some(&p.t), values, arena)?;
    Ok(())
}
