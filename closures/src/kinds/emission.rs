//! Emission

use super::*;

/// The `emission` closure: diffuse light emission with the closure weight as
/// radiance.
pub struct EmissionClosure;

impl EmissionClosure {
    /// Adds a diffuse EDF to an emission composite. The weight is divided by
    /// its largest component and that component becomes the radiance
    /// multiplier.
    ///
    /// * `composite`            - The composite.
    /// * `weight`               - Accumulated weight of the closure.
    /// * `max_weight_component` - Largest component of `weight`; positive.
    /// * `arena`                - Arena for the parameter block.
    pub fn convert<'a>(
        composite: &mut CompositeEmissionClosure<'a>,
        weight: &Spectrum,
        max_weight_component: Float,
        arena: &'a Bump,
    ) -> Result<()> {
        debug_assert!(max_weight_component > 0.0);

        let values = DiffuseEdfInputValues {
            radiance: *weight / max_weight_component,
            radiance_multiplier: max_weight_component,
            exposure: 0.0,
        };
        composite.add_closure(Self::ID, weight, values, arena)?;
        Ok(())
    }
}

impl ClosureKind for EmissionClosure {
    type Params = ();

    const NAME: &'static str = "emission";
    const ID: ClosureId = ClosureId::Emission;
    const PARAMS: &'static [ClosureParam] = &[];

    fn into_params(_params: ()) -> ClosureParams {
        ClosureParams::Emission
    }

    fn from_params(params: &ClosureParams) -> Option<&()> {
        match params {
            ClosureParams::Emission => Some(&()),
            _ => None,
        }
    }
}
