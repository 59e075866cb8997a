//! Translucent

use super::*;

/// Raw parameters of `translucent`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TranslucentParams {
    /// Normal.
    pub n: Vector3f,
}

/// The `translucent` closure: diffuse transmission.
pub struct TranslucentClosure;

impl ClosureKind for TranslucentClosure {
    type Params = TranslucentParams;

    const NAME: &'static str = "translucent";
    const ID: ClosureId = ClosureId::Translucent;
    const PARAMS: &'static [ClosureParam] = &[ClosureParam::vector("N")];
    const MODES: ScatteringMode = ScatteringMode::DIFFUSE;
    const CONVERT: Option<ConvertFn> = Some(convert_translucent as ConvertFn);

    fn into_params(params: TranslucentParams) -> ClosureParams {
        ClosureParams::Translucent(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&TranslucentParams> {
        match params {
            ClosureParams::Translucent(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_translucent<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<TranslucentClosure>(params)?;

    let values = DiffuseBtdfInputValues {
        transmittance: Spectrum::ONE,
        transmittance_multiplier: 1.0,
    };
    composite.add_closure(TranslucentClosure::ID, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}
