//! Reflection

use super::*;

/// Raw parameters of `reflection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReflectionParams {
    /// Normal.
    pub n: Vector3f,

    /// Index of refraction used for the Fresnel term.
    pub ior: Float,
}

/// The `reflection` closure: a perfect mirror. It is rendered as a glossy
/// Beckmann BRDF with zero roughness.
pub struct ReflectionClosure;

impl ClosureKind for ReflectionClosure {
    type Params = ReflectionParams;

    const NAME: &'static str = "reflection";
    const ID: ClosureId = ClosureId::Reflection;
    const PARAMS: &'static [ClosureParam] = &[ClosureParam::vector("N"), ClosureParam::float("ior")];
    const MODES: ScatteringMode = ScatteringMode::SPECULAR;
    const CONVERT: Option<ConvertFn> = Some(convert_reflection as ConvertFn);

    fn into_params(params: ReflectionParams) -> ClosureParams {
        ClosureParams::Reflection(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&ReflectionParams> {
        match params {
            ClosureParams::Reflection(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_reflection<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<ReflectionClosure>(params)?;

    let values = GlossyBrdfInputValues {
        reflectance: Spectrum::ONE,
        reflectance_multiplier: 1.0,
        roughness: 0.0,
        highlight_falloff: 0.0,
        anisotropy: 0.0,
        ior: max(p.ior, 0.001),
        fresnel_weight: 1.0,
        energy_compensation: 0.0,
    };
    composite.add_closure(ClosureId::GlossyBeckmann, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}
