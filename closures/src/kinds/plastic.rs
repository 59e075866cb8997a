//! Plastic

use super::*;

/// Raw parameters of `as_plastic`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlasticParams {
    /// Microfacet distribution: `beckmann`, `ggx`, `gtr1` or `std`.
    pub dist: String,

    /// Normal.
    pub n: Vector3f,

    pub specular_reflectance: Spectrum,
    pub specular_reflectance_multiplier: Float,
    pub roughness: Float,
    pub highlight_falloff: Float,
    pub ior: Float,
    pub diffuse_reflectance: Spectrum,
    pub diffuse_reflectance_multiplier: Float,
    pub internal_scattering: Float,
}

/// The `as_plastic` closure: a diffuse substrate under a rough dielectric
/// coating.
pub struct PlasticClosure;

impl ClosureKind for PlasticClosure {
    type Params = PlasticParams;

    const NAME: &'static str = "as_plastic";
    const ID: ClosureId = ClosureId::Plastic;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::string("dist"),
        ClosureParam::vector("N"),
        ClosureParam::color("specular_reflectance"),
        ClosureParam::float("specular_reflectance_multiplier"),
        ClosureParam::float("roughness"),
        ClosureParam::float("highlight_falloff"),
        ClosureParam::float("ior"),
        ClosureParam::color("diffuse_reflectance"),
        ClosureParam::float("diffuse_reflectance_multiplier"),
        ClosureParam::float("internal_scattering"),
    ];
    const MODES: ScatteringMode = ScatteringMode::ALL;
    const VARIANT_IDS: &'static [ClosureId] = &[
        ClosureId::PlasticBeckmann,
        ClosureId::PlasticGgx,
        ClosureId::PlasticGtr1,
        ClosureId::PlasticStd,
    ];
    const CONVERT: Option<ConvertFn> = Some(convert_plastic as ConvertFn);

    fn into_params(params: PlasticParams) -> ClosureParams {
        ClosureParams::Plastic(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&PlasticParams> {
        match params {
            ClosureParams::Plastic(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_plastic<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<PlasticClosure>(params)?;

    let closure_type = match p.dist.as_str() {
        "beckmann" => ClosureId::PlasticBeckmann,
        "ggx" => ClosureId::PlasticGgx,
        "gtr1" => ClosureId::PlasticGtr1,
        "std" => ClosureId::PlasticStd,
        dist => return Err(ClosureError::InvalidDistribution(dist.to_string())),
    };

    let values = PlasticBrdfInputValues {
        specular_reflectance: p.specular_reflectance,
        specular_reflectance_multiplier: max(p.specular_reflectance_multiplier, 0.0),
        roughness: clamp(p.roughness, 0.0001, 1.0),
        highlight_falloff: saturate(p.highlight_falloff),
        ior: max(p.ior, 0.001),
        diffuse_reflectance: p.diffuse_reflectance,
        diffuse_reflectance_multiplier: max(p.diffuse_reflectance_multiplier, 0.0),
        internal_scattering: max(p.internal_scattering, 0.0),
    };
    composite.add_closure(closure_type, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}
