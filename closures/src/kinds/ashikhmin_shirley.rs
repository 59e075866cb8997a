//! Ashikhmin-Shirley

use super::*;

/// Raw parameters of `as_ashikhmin_shirley`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AshikhminShirleyParams {
    /// Normal.
    pub n: Vector3f,

    /// Tangent; orients the exponents.
    pub t: Vector3f,

    /// Diffuse reflectance.
    pub diffuse_reflectance: Spectrum,

    /// Glossy reflectance.
    pub glossy_reflectance: Spectrum,

    /// Exponent along the tangent.
    pub exponent_u: Float,

    /// Exponent along the bitangent.
    pub exponent_v: Float,

    /// Scale of the Fresnel term.
    pub fresnel_multiplier: Float,
}

/// The `as_ashikhmin_shirley` closure: an anisotropic diffuse plus glossy
/// BRDF.
pub struct AshikhminShirleyClosure;

impl ClosureKind for AshikhminShirleyClosure {
    type Params = AshikhminShirleyParams;

    const NAME: &'static str = "as_ashikhmin_shirley";
    const ID: ClosureId = ClosureId::AshikhminShirley;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::vector("N"),
        ClosureParam::vector("T"),
        ClosureParam::color("diffuse_reflectance"),
        ClosureParam::color("glossy_reflectance"),
        ClosureParam::float("exponent_u"),
        ClosureParam::float("exponent_v"),
        ClosureParam::float("fresnel_multiplier"),
    ];
    const MODES: ScatteringMode = ScatteringMode::DIFFUSE.union(ScatteringMode::GLOSSY);
    const CONVERT: Option<ConvertFn> = Some(convert_ashikhmin_shirley as ConvertFn);

    fn into_params(params: AshikhminShirleyParams) -> ClosureParams {
        ClosureParams::AshikhminShirley(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&AshikhminShirleyParams> {
        match params {
            ClosureParams::AshikhminShirley(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_ashikhmin_shirley<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<AshikhminShirleyClosure>(params)?;

    let values = AshikhminBrdfInputValues {
        rd: p.diffuse_reflectance,
        rd_multiplier: 1.0,
        rg: p.glossy_reflectance,
        rg_multiplier: 1.0,
        nu: max(p.exponent_u, 0.01),
        nv: max(p.exponent_v, 0.01),
        fr_multiplier: p.fresnel_multiplier,
    };
    composite.add_closure(
        AshikhminShirleyClosure::ID,
        shading_basis,
        weight,
        &p.n,
        Some(&p.t),
        values,
        arena,
    )?;
    Ok(())
}
