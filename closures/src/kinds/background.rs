//! Background

use super::*;

/// The `background` closure. It carries no parameters and does not scatter;
/// its weight is read back by `process_background_tree()`.
pub struct BackgroundClosure;

impl ClosureKind for BackgroundClosure {
    type Params = ();

    const NAME: &'static str = "background";
    const ID: ClosureId = ClosureId::Background;
    const PARAMS: &'static [ClosureParam] = &[];

    fn into_params(_params: ()) -> ClosureParams {
        ClosureParams::Background
    }

    fn from_params(params: &ClosureParams) -> Option<&()> {
        match params {
            ClosureParams::Background => Some(&()),
            _ => None,
        }
    }
}
