//! Holdout

use super::*;

/// The `holdout` closure. It carries no parameters and does not scatter;
/// its weight is read back by `process_holdout_tree()`.
pub struct HoldoutClosure;

impl ClosureKind for HoldoutClosure {
    type Params = ();

    const NAME: &'static str = "holdout";
    const ID: ClosureId = ClosureId::Holdout;
    const PARAMS: &'static [ClosureParam] = &[];

    fn into_params(_params: ()) -> ClosureParams {
        ClosureParams::Holdout
    }

    fn from_params(params: &ClosureParams) -> Option<&()> {
        match params {
            ClosureParams::Holdout => Some(&()),
            _ => None,
        }
    }
}
