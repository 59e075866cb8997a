//! Blinn

use super::*;

/// Raw parameters of `as_blinn`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlinnParams {
    /// Normal.
    pub n: Vector3f,

    /// Specular exponent.
    pub exponent: Float,

    /// Index of refraction used for the Fresnel term.
    pub ior: Float,
}

/// The `as_blinn` closure.
pub struct BlinnClosure;

impl ClosureKind for BlinnClosure {
    type Params = BlinnParams;

    const NAME: &'static str = "as_blinn";
    const ID: ClosureId = ClosureId::Blinn;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::vector("N"),
        ClosureParam::float("exponent"),
        ClosureParam::float("ior"),
    ];
    const MODES: ScatteringMode = ScatteringMode::GLOSSY;
    const CONVERT: Option<ConvertFn> = Some(convert_blinn as ConvertFn);

    fn into_params(params: BlinnParams) -> ClosureParams {
        ClosureParams::Blinn(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&BlinnParams> {
        match params {
            ClosureParams::Blinn(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_blinn<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<BlinnClosure>(params)?;

    let values = BlinnBrdfInputValues {
        exponent: max(p.exponent, 0.001),
        ior: max(p.ior, 0.001),
    };
    composite.add_closure(BlinnClosure::ID, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn exponent_and_ior_are_floored() {
        let registry = registry();
        let arena = Bump::new();
        let mut composite = CompositeSurfaceClosure::new(&registry);
        let params = BlinnClosure::into_params(BlinnParams {
            n: Vector3f::Z_AXIS,
            exponent: -4.0,
            ior: 0.0,
        });
        convert_blinn(&mut composite, &Basis3f::default(), &params, &Spectrum::ONE, &arena).unwrap();

        match composite.entry(0).map(|e| e.input_values) {
            Some(SurfaceInputs::Blinn(values)) => {
                assert_eq!(values.exponent, 0.001);
                assert_eq!(values.ior, 0.001);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
