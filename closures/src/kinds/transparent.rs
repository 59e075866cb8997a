//! Transparent

use super::*;

/// The `transparent` closure. Its weight is read back by
/// `process_transparency_tree()`.
pub struct TransparentClosure;

impl ClosureKind for TransparentClosure {
    type Params = ();

    const NAME: &'static str = "transparent";
    const ID: ClosureId = ClosureId::Transparent;
    const PARAMS: &'static [ClosureParam] = &[];

    fn into_params(_params: ()) -> ClosureParams {
        ClosureParams::Transparent
    }

    fn from_params(params: &ClosureParams) -> Option<&()> {
        match params {
            ClosureParams::Transparent => Some(&()),
            _ => None,
        }
    }
}
