//! Glass

use super::*;

/// Raw parameters of `as_glass`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlassParams {
    /// Microfacet distribution: `ggx`, `beckmann` or `std`.
    pub dist: String,

    /// Normal.
    pub n: Vector3f,

    /// Tangent.
    pub t: Vector3f,

    pub surface_transmittance: Spectrum,
    pub reflection_tint: Spectrum,
    pub refraction_tint: Spectrum,
    pub roughness: Float,
    pub highlight_falloff: Float,
    pub anisotropy: Float,
    pub ior: Float,
    pub volume_transmittance: Spectrum,
    pub volume_transmittance_distance: Float,

    /// Keyword parameter.
    pub energy_compensation: Float,
}

/// The `as_glass` closure: a rough dielectric interface.
pub struct GlassClosure;

impl ClosureKind for GlassClosure {
    type Params = GlassParams;

    const NAME: &'static str = "as_glass";
    const ID: ClosureId = ClosureId::Glass;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::string("dist"),
        ClosureParam::vector("N"),
        ClosureParam::vector("T"),
        ClosureParam::color("surface_transmittance"),
        ClosureParam::color("reflection_tint"),
        ClosureParam::color("refraction_tint"),
        ClosureParam::float("roughness"),
        ClosureParam::float("highlight_falloff"),
        ClosureParam::float("anisotropy"),
        ClosureParam::float("ior"),
        ClosureParam::color("volume_transmittance"),
        ClosureParam::float("volume_transmittance_distance"),
        ClosureParam::float_keyword("energy_compensation"),
    ];
    const MODES: ScatteringMode = ScatteringMode::GLOSSY.union(ScatteringMode::SPECULAR);
    const VARIANT_IDS: &'static [ClosureId] = &[ClosureId::GlassBeckmann, ClosureId::GlassGgx, ClosureId::GlassStd];
    const PREPARE: Option<PrepareFn> = Some(prepare_glass as PrepareFn);
    const CONVERT: Option<ConvertFn> = Some(convert_glass as ConvertFn);

    fn into_params(params: GlassParams) -> ClosureParams {
        ClosureParams::Glass(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&GlassParams> {
        match params {
            ClosureParams::Glass(p) => Some(p),
            _ => None,
        }
    }
}

fn prepare_glass() -> ClosureParams {
    GlassClosure::into_params(GlassParams {
        energy_compensation: DEFAULT_ENERGY_COMPENSATION,
        ..Default::default()
    })
}

fn convert_glass<'a>(
    composite: &mut CompositeSurfaceClosure<'a>,
    shading_basis: &Basis3f,
    params: &ClosureParams,
    weight: &Spectrum,
    arena: &'a Bump,
) -> Result<()> {
    let p = params_of::<GlassClosure>(params)?;

    let closure_type = match p.dist.as_str() {
        "ggx" => ClosureId::GlassGgx,
        "beckmann" => ClosureId::GlassBeckmann,
        "std" => ClosureId::GlassStd,
        dist => return Err(ClosureError::InvalidDistribution(dist.to_string())),
    };

    let values = GlassBsdfInputValues {
        surface_transmittance: p.surface_transmittance,
        surface_transmittance_multiplier: 1.0,
        reflection_tint: p.reflection_tint,
        refraction_tint: p.refraction_tint,
        roughness: max(p.roughness, 0.0001),
        highlight_falloff: saturate(p.highlight_falloff),
        anisotropy: clamp(p.anisotropy, -1.0, 1.0),
        ior: max(p.ior, 0.001),
        volume_transmittance: p.volume_transmittance,
        volume_transmittance_distance: p.volume_transmittance_distance,
        energy_compensation: saturate(p.energy_compensation),
    };
    let values = composite.add_closure(closure_type, shading_basis, weight, &p.n, Some(&p.t), values, arena)?;
    composite.add_ior(weight, values.ior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn distributions_map_to_variant_ids() {
        let registry = registry();
        let arena = Bump::new();
        for (dist, id) in [
            ("ggx", ClosureId::GlassGgx),
            ("beckmann", ClosureId::GlassBeckmann),
            ("std", ClosureId::GlassStd),
        ] {
            let tree = ClosureColor::component(Spectrum::ONE, glass_params(dist));
            let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();
            assert_eq!(composite.entry(0).map(|e| e.closure_type), Some(id), "{}", dist);
        }
    }

    #[test]
    fn distribution_names_are_case_sensitive() {
        let registry = registry();
        let arena = Bump::new();
        let mut composite = CompositeSurfaceClosure::new(&registry);
        let result = convert_glass(&mut composite, &Basis3f::default(), &glass_params("GGX"), &Spectrum::ONE, &arena);
        assert_eq!(result, Err(ClosureError::InvalidDistribution("GGX".to_string())));
        assert_eq!(composite.ior_count(), 0);
        assert_eq!(
            result.unwrap_err().to_string(),
            "invalid microfacet distribution function: GGX"
        );
    }

    #[test]
    fn inputs_are_clamped() {
        let registry = registry();
        let arena = Bump::new();
        let mut composite = CompositeSurfaceClosure::new(&registry);
        let params = GlassClosure::into_params(GlassParams {
            dist: "ggx".to_string(),
            n: Vector3f::Z_AXIS,
            roughness: 0.0,
            highlight_falloff: 2.0,
            anisotropy: 5.0,
            ior: -1.0,
            volume_transmittance_distance: 3.0,
            energy_compensation: 1.5,
            ..Default::default()
        });
        convert_glass(&mut composite, &Basis3f::default(), &params, &Spectrum::ONE, &arena).unwrap();

        match composite.entry(0).map(|e| e.input_values) {
            Some(SurfaceInputs::Glass(values)) => {
                assert_eq!(values.roughness, 0.0001);
                assert_eq!(values.highlight_falloff, 1.0);
                assert_eq!(values.anisotropy, 1.0);
                assert_eq!(values.ior, 0.001);
                assert_eq!(values.surface_transmittance_multiplier, 1.0);
                assert_eq!(values.volume_transmittance_distance, 3.0);
                assert_eq!(values.energy_compensation, 1.0);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(composite.ior_count(), 1);
    }
}
