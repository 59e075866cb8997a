//! Glossy

use super::*;

/// Raw parameters of `as_glossy`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlossyParams {
    /// Microfacet distribution: `ggx`, `beckmann` or `std`.
    pub dist: String,

    /// Normal.
    pub n: Vector3f,

    /// Tangent.
    pub t: Vector3f,

    pub roughness: Float,
    pub highlight_falloff: Float,
    pub anisotropy: Float,
    pub ior: Float,

    /// Keyword parameter.
    pub energy_compensation: Float,
}

/// The `as_glossy` closure: a rough dielectric coating without
/// transmission.
pub struct GlossyClosure;

impl ClosureKind for GlossyClosure {
    type Params = GlossyParams;

    const NAME: &'static str = "as_glossy";
    const ID: ClosureId = ClosureId::Glossy;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::string("dist"),
        ClosureParam::vector("N"),
        ClosureParam::vector("T"),
        ClosureParam::float("roughness"),
        ClosureParam::float("highlight_falloff"),
        ClosureParam::float("anisotropy"),
        ClosureParam::float("ior"),
        ClosureParam::float_keyword("energy_compensation"),
    ];
    const MODES: ScatteringMode = ScatteringMode::GLOSSY.union(ScatteringMode::SPECULAR);
    const VARIANT_IDS: &'static [ClosureId] = &[ClosureId::GlossyBeckmann, ClosureId::GlossyGgx, ClosureId::GlossyStd];
    const PREPARE: Option<PrepareFn> = Some(prepare_glossy as PrepareFn);
    const CONVERT: Option<ConvertFn> = Some(convert_glossy as ConvertFn);

    fn into_params(params: GlossyParams) -> ClosureParams {
        ClosureParams::Glossy(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&GlossyParams> {
        match params {
            ClosureParams::Glossy(p) => Some(p),
            _ => None,
        }
    }
}

fn prepare_glossy() -> ClosureParams {
    GlossyClosure::into_params(GlossyParams {
        energy_compensation: DEFAULT_ENERGY_COMPENSATION,
        ..Default::default()
    })
}

fn convert_glossy<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<GlossyClosure>(params)?;

    let roughness = saturate(p.roughness);
    let highlight_falloff = saturate(p.highlight_falloff);
    let ior = max(p.ior, 0.001);

    // Scale the sampling weight by the fraction of energy the lobe reflects.
    let favg = average_fresnel_reflectance_dielectric(ior);
    let (closure_type, eavg) = match p.dist.as_str() {
        "ggx" => (ClosureId::GlossyGgx, average_albedo(MicrofacetModel::Ggx, roughness)),
        "beckmann" => (ClosureId::GlossyBeckmann, average_albedo(MicrofacetModel::Beckmann, roughness)),
        "std" => (
            ClosureId::GlossyStd,
            lerp(
                highlight_falloff,
                average_albedo(MicrofacetModel::Ggx, roughness),
                average_albedo(MicrofacetModel::Beckmann, roughness),
            ),
        ),
        dist => return Err(ClosureError::InvalidDistribution(dist.to_string())),
    };

    let values = GlossyBrdfInputValues {
        reflectance: Spectrum::ONE,
        reflectance_multiplier: 1.0,
        roughness,
        highlight_falloff,
        anisotropy: clamp(p.anisotropy, -1.0, 1.0),
        ior,
        fresnel_weight: 1.0,
        energy_compensation: saturate(p.energy_compensation),
    };
    composite.add_closure(closure_type, shading_basis, weight, &p.n, Some(&p.t), values, arena)?;
    composite.override_closure_scalar_weight(luminance(weight) * eavg * favg);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use float_cmp::*;

    fn build<'a>(registry: &'a ClosureRegistry, tree: &ClosureColor, arena: &'a Bump) -> CompositeSurfaceClosure<'a> {
        CompositeSurfaceClosure::build(registry, &Basis3f::default(), Some(tree), arena).unwrap()
    }

    #[test]
    fn scalar_weight_is_scaled_by_reflected_energy() {
        let registry = registry();
        let arena = Bump::new();
        let composite = build(&registry, &glossy("ggx", 2.0), &arena);

        let entry = composite.entry(0).unwrap();
        assert_eq!(entry.closure_type, ClosureId::GlossyGgx);
        let expected = luminance(&Spectrum::new(2.0))
            * average_albedo(MicrofacetModel::Ggx, 0.3)
            * average_fresnel_reflectance_dielectric(1.5);
        assert!(approx_eq!(f32, entry.scalar_weight, expected, epsilon = 1e-6));
        assert!(entry.scalar_weight < luminance(&entry.weight));
    }

    #[test]
    fn std_blends_between_distributions() {
        let registry = registry();
        let arena = Bump::new();
        let ggx = build(&registry, &glossy("ggx", 1.0), &arena);
        let beckmann = build(&registry, &glossy("beckmann", 1.0), &arena);
        let std = build(&registry, &glossy("std", 1.0), &arena);

        let w = |c: &CompositeSurfaceClosure| c.entry(0).map(|e| e.scalar_weight).unwrap_or(0.0);
        let lo = min(w(&ggx), w(&beckmann));
        let hi = max(w(&ggx), w(&beckmann));
        assert_eq!(std.entry(0).map(|e| e.closure_type), Some(ClosureId::GlossyStd));
        assert!(w(&std) >= lo - 1e-6 && w(&std) <= hi + 1e-6);
    }

    #[test]
    fn override_applies_to_the_glossy_entry_only() {
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(glossy("beckmann", 1.0), sheen(1.0));
        let composite = build(&registry, &tree, &arena);

        assert!(composite.entry(0).unwrap().scalar_weight < luminance(&Spectrum::ONE));
        assert_eq!(composite.entry(1).unwrap().scalar_weight, luminance(&Spectrum::ONE));
    }

    #[test]
    fn inputs_are_clamped() {
        let registry = registry();
        let arena = Bump::new();
        let mut composite = CompositeSurfaceClosure::new(&registry);
        let params = GlossyClosure::into_params(GlossyParams {
            dist: "beckmann".to_string(),
            n: Vector3f::Z_AXIS,
            roughness: 1.7,
            highlight_falloff: -1.0,
            anisotropy: -2.0,
            ior: 1.5,
            ..Default::default()
        });
        convert_glossy(&mut composite, &Basis3f::default(), &params, &Spectrum::ONE, &arena).unwrap();

        match composite.entry(0).map(|e| e.input_values) {
            Some(SurfaceInputs::Glossy(values)) => {
                assert_eq!(values.roughness, 1.0);
                assert_eq!(values.highlight_falloff, 0.0);
                assert_eq!(values.anisotropy, -1.0);
                assert_eq!(values.fresnel_weight, 1.0);
                assert_eq!(values.reflectance, Spectrum::ONE);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_distribution_adds_nothing() {
        let registry = registry();
        let arena = Bump::new();
        let result = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&glossy("gtr1", 1.0)), &arena);
        assert_eq!(result.err(), Some(ClosureError::InvalidDistribution("gtr1".to_string())));
    }
}
