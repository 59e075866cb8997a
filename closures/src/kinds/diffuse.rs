//! Diffuse

use super::*;

/// Raw parameters of `diffuse`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffuseParams {
    /// Normal.
    pub n: Vector3f,
}

/// The `diffuse` closure. It is rendered as an Oren-Nayar BRDF with zero
/// roughness, which is Lambertian.
pub struct DiffuseClosure;

impl ClosureKind for DiffuseClosure {
    type Params = DiffuseParams;

    const NAME: &'static str = "diffuse";
    const ID: ClosureId = ClosureId::Diffuse;
    const PARAMS: &'static [ClosureParam] = &[ClosureParam::vector("N")];
    const MODES: ScatteringMode = ScatteringMode::DIFFUSE;
    const CONVERT: Option<ConvertFn> = Some(convert_diffuse as ConvertFn);

    fn into_params(params: DiffuseParams) -> ClosureParams {
        ClosureParams::Diffuse(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&DiffuseParams> {
        match params {
            ClosureParams::Diffuse(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_diffuse<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<DiffuseClosure>(params)?;

    let values = OrenNayarBrdfInputValues {
        reflectance: Spectrum::ONE,
        reflectance_multiplier: 1.0,
        roughness: 0.0,
    };
    composite.add_closure(ClosureId::OrenNayar, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}
