//! Debug

use super::*;

/// Raw parameters of `debug`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DebugParams {
    /// Free-form tag.
    pub tag: String,
}

/// The `debug` closure; it only tags a shading point and never scatters.
pub struct DebugClosure;

impl ClosureKind for DebugClosure {
    type Params = DebugParams;

    const NAME: &'static str = "debug";
    const ID: ClosureId = ClosureId::Debug;
    const PARAMS: &'static [ClosureParam] = &[ClosureParam::string("tag")];

    fn into_params(params: DebugParams) -> ClosureParams {
        ClosureParams::Debug(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&DebugParams> {
        match params {
            ClosureParams::Debug(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn debug_does_not_reach_any_composite() {
        let registry = registry();
        let arena = Bump::new();
        let params = DebugParams { tag: "uv".to_string() };
        let tree = ClosureColor::component(Spectrum::ONE, DebugClosure::into_params(params));

        let surface = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();
        assert!(surface.is_empty());
        assert_eq!(process_background_tree(Some(&tree)), Spectrum::ZERO);
    }
}
