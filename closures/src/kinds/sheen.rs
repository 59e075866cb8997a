//! Sheen

use super::*;

/// Raw parameters of `as_sheen`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SheenParams {
    /// Normal.
    pub n: Vector3f,
}

/// The `as_sheen` closure.
pub struct SheenClosure;

impl ClosureKind for SheenClosure {
    type Params = SheenParams;

    const NAME: &'static str = "as_sheen";
    const ID: ClosureId = ClosureId::Sheen;
    const PARAMS: &'static [ClosureParam] = &[ClosureParam::vector("N")];
    const MODES: ScatteringMode = ScatteringMode::DIFFUSE;
    const CONVERT: Option<ConvertFn> = Some(convert_sheen as ConvertFn);

    fn into_params(params: SheenParams) -> ClosureParams {
        ClosureParams::Sheen(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&SheenParams> {
        match params {
            ClosureParams::Sheen(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_sheen<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<SheenClosure>(params)?;

    let values = SheenBrdfInputValues {
        reflectance: Spectrum::ONE,
        reflectance_multiplier: 1.0,
    };
    composite.add_closure(SheenClosure::ID, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}
