//! Oren-Nayar

use super::*;

/// Raw parameters of `oren_nayar`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrenNayarParams {
    /// Normal.
    pub n: Vector3f,

    /// Standard deviation of the microfacet orientation angle.
    pub roughness: Float,
}

/// The `oren_nayar` closure.
pub struct OrenNayarClosure;

impl ClosureKind for OrenNayarClosure {
    type Params = OrenNayarParams;

    const NAME: &'static str = "oren_nayar";
    const ID: ClosureId = ClosureId::OrenNayar;
    const PARAMS: &'static [ClosureParam] = &[ClosureParam::vector("N"), ClosureParam::float("roughness")];
    const MODES: ScatteringMode = ScatteringMode::DIFFUSE;
    const CONVERT: Option<ConvertFn> = Some(convert_oren_nayar as ConvertFn);

    fn into_params(params: OrenNayarParams) -> ClosureParams {
        ClosureParams::OrenNayar(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&OrenNayarParams> {
        match params {
            ClosureParams::OrenNayar(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_oren_nayar<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<OrenNayarClosure>(params)?;

    let values = OrenNayarBrdfInputValues {
        reflectance: Spectrum::ONE,
        reflectance_multiplier: 1.0,
        roughness: max(p.roughness, 0.0),
    };
    composite.add_closure(OrenNayarClosure::ID, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn negative_roughness_is_clamped() {
        let registry = registry();
        let arena = Bump::new();
        let mut composite = CompositeSurfaceClosure::new(&registry);
        let params = OrenNayarClosure::into_params(OrenNayarParams {
            n: Vector3f::Z_AXIS,
            roughness: -0.3,
        });
        convert_oren_nayar(&mut composite, &Basis3f::default(), &params, &Spectrum::ONE, &arena).unwrap();

        match composite.entry(0).map(|e| e.input_values) {
            Some(SurfaceInputs::OrenNayar(values)) => assert_eq!(values.roughness, 0.0),
            other => panic!("unexpected {:?}", other),
        }
    }
}
