//! Phong

use super::*;

/// Raw parameters of `phong`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhongParams {
    /// Normal.
    pub n: Vector3f,

    /// Specular exponent.
    pub exponent: Float,
}

/// The `phong` closure. It is rendered as an isotropic Ashikhmin-Shirley
/// BRDF with white reflectances.
pub struct PhongClosure;

impl ClosureKind for PhongClosure {
    type Params = PhongParams;

    const NAME: &'static str = "phong";
    const ID: ClosureId = ClosureId::Phong;
    const PARAMS: &'static [ClosureParam] = &[ClosureParam::vector("N"), ClosureParam::float("exponent")];
    const MODES: ScatteringMode = ScatteringMode::GLOSSY;
    const CONVERT: Option<ConvertFn> = Some(convert_phong as ConvertFn);

    fn into_params(params: PhongParams) -> ClosureParams {
        ClosureParams::Phong(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&PhongParams> {
        match params {
            ClosureParams::Phong(p) => Some(p),
            _ => None,
        }
    }
}

fn convert_phong<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<PhongClosure>(params)?;

    let exponent = max(p.exponent, 0.01);
    let values = AshikhminBrdfInputValues {
        rd: Spectrum::ONE,
        rd_multiplier: 1.0,
        rg: Spectrum::ONE,
        rg_multiplier: 1.0,
        nu: exponent,
        nv: exponent,
        fr_multiplier: 1.0,
    };
    composite.add_closure(ClosureId::AshikhminShirley, shading_basis, weight, &p.n, None, values, arena)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn phong_becomes_isotropic_ashikhmin_shirley() {
        let registry = registry();
        let arena = Bump::new();
        let params = PhongClosure::into_params(PhongParams {
            n: Vector3f::Z_AXIS,
            exponent: 0.0,
        });
        let tree = ClosureColor::component(Spectrum::ONE, params);
        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();

        let entry = composite.entry(0).unwrap();
        assert_eq!(entry.closure_type, ClosureId::AshikhminShirley);
        match entry.input_values {
            SurfaceInputs::Ashikhmin(values) => {
                assert_eq!(values.nu, 0.01);
                assert_eq!(values.nv, 0.01);
                assert_eq!(values.rd, Spectrum::ONE);
                assert_eq!(values.fr_multiplier, 1.0);
            }
            other => panic!("unexpected {:?}", other),
        }

        // Sampled under the modes of the id it was stored as.
        let mut pdfs = [0.0; MAX_CLOSURE_ENTRIES];
        assert_eq!(composite.compute_pdfs(ScatteringMode::DIFFUSE, &mut pdfs), 1);
    }
}
