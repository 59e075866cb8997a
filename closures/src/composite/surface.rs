//! Surface Composite

use super::*;
use std::ops::Deref;

/// The BSDF closures found at a shading point, plus the indices of
/// refraction contributed by dielectric closures.
#[derive(Clone)]
pub struct CompositeSurfaceClosure<'a> {
    /// Registry used to look up scattering modes.
    registry: &'a ClosureRegistry,

    /// The entries.
    closures: CompositeClosure<SurfaceInputs<'a>>,

    /// Number of recorded indices of refraction.
    ior_count: usize,

    /// Recorded indices of refraction.
    iors: [Float; MAX_CLOSURE_ENTRIES],

    /// Weights of the indices of refraction; their cumulative distribution
    /// once the composite is built.
    ior_cdf: [Float; MAX_CLOSURE_ENTRIES],
}

impl<'a> CompositeSurfaceClosure<'a> {
    /// Returns a composite with no entries and no recorded index of
    /// refraction.
    ///
    /// * `registry` - The closure registry.
    pub fn new(registry: &'a ClosureRegistry) -> Self {
        Self {
            registry,
            closures: CompositeClosure::new(),
            ior_count: 0,
            iors: [0.0; MAX_CLOSURE_ENTRIES],
            ior_cdf: [0.0; MAX_CLOSURE_ENTRIES],
        }
    }

    /// Returns a built composite with no entries; its index of refraction is
    /// that of vacuum.
    ///
    /// * `registry` - The closure registry.
    pub fn empty(registry: &'a ClosureRegistry) -> Self {
        let mut composite = Self::new(registry);
        composite.finalize_iors();
        composite
    }

    /// Converts the closure tree at a shading point.
    ///
    /// * `registry`               - The closure registry.
    /// * `original_shading_basis` - The shading basis at the shading point.
    /// * `closure`                - Root of the closure tree.
    /// * `arena`                  - Arena for the parameter blocks.
    pub fn build(
        registry: &'a ClosureRegistry,
        original_shading_basis: &Basis3f,
        closure: Option<&ClosureColor>,
        arena: &'a Bump,
    ) -> Result<Self> {
        let mut composite = Self::new(registry);

        if let Some(closure) = closure {
            closure.for_each_component(Spectrum::ONE, &mut |component, weight| {
                if luminance(&weight) > 0.0 {
                    let convert = registry.lookup_convert(component.id);
                    convert(&mut composite, original_shading_basis, &component.params, &weight, arena)?;
                }
                Ok(())
            })?;
        }

        composite.finalize_iors();
        Ok(composite)
    }

    /// Adds an entry and places its parameter block in the arena. Fails
    /// without modifying the composite if it is full.
    ///
    /// * `closure_type`           - Closure id recorded in the entry.
    /// * `original_shading_basis` - The shading basis at the shading point.
    /// * `weight`                 - Color weight; its luminance must be
    ///                              positive.
    /// * `normal`                 - Requested normal.
    /// * `tangent`                - Requested tangent, for anisotropic
    ///                              closures.
    /// * `values`                 - The parameter block.
    /// * `arena`                  - Arena for the parameter block.
    pub fn add_closure<V: IntoSurfaceInputs>(
        &mut self,
        closure_type: ClosureId,
        original_shading_basis: &Basis3f,
        weight: &Spectrum,
        normal: &Vector3f,
        tangent: Option<&Vector3f>,
        values: V,
        arena: &'a Bump,
    ) -> Result<&'a V> {
        self.closures.ensure_capacity()?;

        let shading_basis = compute_closure_shading_basis(normal, tangent, original_shading_basis);
        let values: &'a V = arena.alloc(values);
        self.closures
            .push(closure_type, weight, shading_basis, values.surface_inputs())?;
        Ok(values)
    }

    /// Replaces the scalar weight of the most recently added entry.
    ///
    /// * `scalar_weight` - The new scalar weight.
    pub fn override_closure_scalar_weight(&mut self, scalar_weight: Float) {
        self.closures.override_closure_scalar_weight(scalar_weight);
    }

    /// Records an index of refraction, weighted by the luminance of the
    /// closure weight. Fails once `MAX_CLOSURE_ENTRIES` indices are recorded.
    ///
    /// * `weight` - Weight of the closure the index belongs to.
    /// * `ior`    - Index of refraction.
    pub fn add_ior(&mut self, weight: &Spectrum, ior: Float) -> Result<()> {
        if self.ior_count >= MAX_CLOSURE_ENTRIES {
            return Err(ClosureError::CapacityExceeded {
                capacity: MAX_CLOSURE_ENTRIES,
            });
        }

        let w = luminance(weight);
        debug_assert!(w > 0.0);

        self.iors[self.ior_count] = ior;
        self.ior_cdf[self.ior_count] = w;
        self.ior_count += 1;
        Ok(())
    }

    /// Returns the number of recorded indices of refraction; at least 1 once
    /// built.
    pub fn ior_count(&self) -> usize {
        self.ior_count
    }

    /// Returns the cumulative distribution of the indices of refraction.
    pub fn ior_cdf(&self) -> &[Float] {
        &self.ior_cdf[..self.ior_count]
    }

    /// Picks one of the recorded indices of refraction with probability
    /// proportional to its weight.
    ///
    /// * `u` - Uniform sample in [0, 1).
    pub fn choose_ior(&self, u: Float) -> Float {
        assert!(self.ior_count > 0);
        if self.ior_count == 1 {
            return self.iors[0];
        }
        self.iors[sample_cdf_linear_search(self.ior_cdf(), u)]
    }

    /// Computes the selection probability of each entry among the entries
    /// scattering in at least one of the given modes. Returns the number of
    /// such entries; when there are none all probabilities are zero.
    ///
    /// * `modes` - Scattering modes.
    /// * `pdfs`  - Receives the probabilities.
    pub fn compute_pdfs(&self, modes: ScatteringMode, pdfs: &mut [Float; MAX_CLOSURE_ENTRIES]) -> usize {
        *pdfs = [0.0; MAX_CLOSURE_ENTRIES];

        let mut num_closures = 0;
        for (pdf, entry) in pdfs.iter_mut().zip(self.closures.entries()) {
            if self.registry.lookup_modes(entry.closure_type).matches(modes) {
                *pdf = entry.scalar_weight;
                num_closures += 1;
            }
        }

        normalize_weights(&mut pdfs[..self.closures.closure_count()]);
        num_closures
    }

    /// Picks an entry given probabilities from `compute_pdfs()`. Returns
    /// `None` if every probability is zero.
    ///
    /// * `u`    - Uniform sample in [0, 1).
    /// * `pdfs` - Entry probabilities.
    pub fn choose_closure(&self, u: Float, pdfs: &[Float; MAX_CLOSURE_ENTRIES]) -> Option<usize> {
        sample_pdf_linear_search(&pdfs[..self.closures.closure_count()], u)
    }

    /// Turns the recorded index of refraction weights into a cumulative
    /// distribution. Without any recorded index the composite gets the
    /// index of vacuum.
    fn finalize_iors(&mut self) {
        if self.ior_count == 0 {
            self.ior_count = 1;
            self.iors[0] = 1.0;
            self.ior_cdf[0] = 1.0;
        } else if self.ior_count > 1 {
            build_cdf(&mut self.ior_cdf[..self.ior_count]);
        }
    }
}

impl<'a> Deref for CompositeSurfaceClosure<'a> {
    type Target = CompositeClosure<SurfaceInputs<'a>>;

    /// Returns the entries.
    fn deref(&self) -> &Self::Target {
        &self.closures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use float_cmp::*;
    use proptest::prelude::*;

    #[test]
    fn scaled_diffuse_becomes_oren_nayar() {
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::mul(Spectrum::new(2.0), diffuse(Vector3f::Y_AXIS, 0.25));

        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();

        assert_eq!(composite.closure_count(), 1);
        let entry = composite.entry(0).unwrap();
        assert_eq!(entry.closure_type, ClosureId::OrenNayar);
        assert!(approx_eq!(f32, entry.scalar_weight, 0.5, epsilon = 1e-6));
        assert_eq!(entry.shading_basis.normal(), Vector3f::Y_AXIS);
        match entry.input_values {
            SurfaceInputs::OrenNayar(values) => {
                assert_eq!(values.reflectance, Spectrum::ONE);
                assert_eq!(values.reflectance_multiplier, 1.0);
                assert_eq!(values.roughness, 0.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn empty_tree_builds_empty_composite() {
        let registry = registry();
        let arena = Bump::new();
        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), None, &arena).unwrap();
        assert!(composite.is_empty());
        assert_eq!(composite.ior_count(), 1);
        assert_eq!(composite.choose_ior(0.5), 1.0);

        let mut pdfs = [1.0; MAX_CLOSURE_ENTRIES];
        assert_eq!(composite.compute_pdfs(ScatteringMode::ALL, &mut pdfs), 0);
        assert!(pdfs.iter().all(|p| *p == 0.0));
        assert_eq!(composite.choose_closure(0.5, &pdfs), None);
    }

    #[test]
    fn zero_weight_components_are_pruned() {
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(
            diffuse(Vector3f::Z_AXIS, 0.0),
            ClosureColor::mul(Spectrum::ZERO, sheen(1.0)),
        );
        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();
        assert!(composite.is_empty());
        assert_eq!(arena.allocated_bytes(), 0);
    }

    #[test]
    fn non_scattering_components_add_nothing() {
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(
            ClosureColor::add(transparent(1.0), holdout(1.0)),
            ClosureColor::add(background(1.0), emission(1.0)),
        );
        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();
        assert!(composite.is_empty());
    }

    #[test]
    fn seventeenth_closure_exceeds_capacity() {
        let registry = registry();
        let arena = Bump::new();
        let mut tree = diffuse(Vector3f::Z_AXIS, 1.0);
        for _ in 1..=MAX_CLOSURE_ENTRIES {
            tree = ClosureColor::add(tree, diffuse(Vector3f::Z_AXIS, 1.0));
        }

        let result = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena);
        assert_eq!(
            result.err(),
            Some(ClosureError::CapacityExceeded {
                capacity: MAX_CLOSURE_ENTRIES
            })
        );
    }

    #[test]
    fn failed_add_leaves_entries_intact() {
        let registry = registry();
        let arena = Bump::new();
        let basis = Basis3f::default();
        let mut composite = CompositeSurfaceClosure::new(&registry);
        for i in 0..MAX_CLOSURE_ENTRIES {
            let values = SheenBrdfInputValues {
                reflectance: Spectrum::ONE,
                reflectance_multiplier: i as Float,
            };
            composite
                .add_closure(ClosureId::Sheen, &basis, &Spectrum::ONE, &Vector3f::Z_AXIS, None, values, &arena)
                .unwrap();
        }
        let before: Vec<_> = composite.entries().copied().collect();
        let allocated = arena.allocated_bytes();

        let result = composite.add_closure(
            ClosureId::Sheen,
            &basis,
            &Spectrum::ONE,
            &Vector3f::Z_AXIS,
            None,
            SheenBrdfInputValues::default(),
            &arena,
        );

        assert!(matches!(result, Err(ClosureError::CapacityExceeded { capacity: 16 })));
        let after: Vec<_> = composite.entries().copied().collect();
        assert_eq!(before, after);
        assert_eq!(arena.allocated_bytes(), allocated);
        for (i, entry) in after.iter().enumerate() {
            match entry.input_values {
                SurfaceInputs::Sheen(values) => assert_eq!(values.reflectance_multiplier, i as Float),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn unknown_distribution_fails() {
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::component(Spectrum::ONE, glass_params("metal"));
        let result = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena);
        assert_eq!(
            result.err(),
            Some(ClosureError::InvalidDistribution("metal".to_string()))
        );
    }

    #[test]
    fn pdfs_are_filtered_by_mode() {
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(
            diffuse(Vector3f::Z_AXIS, 0.25),
            ClosureColor::add(
                ClosureColor::component(Spectrum::new(0.5), glass_params("ggx")),
                sheen(0.75),
            ),
        );
        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();
        assert_eq!(composite.closure_count(), 3);

        let mut pdfs = [0.0; MAX_CLOSURE_ENTRIES];
        assert_eq!(composite.compute_pdfs(ScatteringMode::DIFFUSE, &mut pdfs), 2);
        assert!(approx_eq!(f32, pdfs[0], 0.25, epsilon = 1e-5));
        assert_eq!(pdfs[1], 0.0);
        assert!(approx_eq!(f32, pdfs[2], 0.75, epsilon = 1e-5));
        assert_eq!(composite.choose_closure(0.1, &pdfs), Some(0));
        assert_eq!(composite.choose_closure(0.5, &pdfs), Some(2));

        assert_eq!(composite.compute_pdfs(ScatteringMode::SPECULAR, &mut pdfs), 1);
        assert!(approx_eq!(f32, pdfs[1], 1.0, epsilon = 1e-6));
        assert_eq!(composite.choose_closure(0.9, &pdfs), Some(1));

        assert_eq!(composite.compute_pdfs(ScatteringMode::empty(), &mut pdfs), 0);
        assert!(pdfs.iter().all(|p| *p == 0.0));
    }

    #[test]
    fn single_glass_ior_is_always_chosen() {
        let registry = registry();
        let arena = Bump::new();
        let mut params = glass_params("beckmann");
        if let ClosureParams::Glass(p) = &mut params {
            p.ior = 1.33;
        }
        let tree = ClosureColor::component(Spectrum::new(0.3), params);
        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();

        assert_eq!(composite.ior_count(), 1);
        for u in [0.0, 0.25, 0.5, ONE_MINUS_EPSILON] {
            assert_eq!(composite.choose_ior(u), 1.33);
        }
    }

    #[test]
    fn ior_cdf_is_normalized() {
        let registry = registry();
        let arena = Bump::new();
        let glass = |ior: Float, w: Float| {
            let mut params = glass_params("std");
            if let ClosureParams::Glass(p) = &mut params {
                p.ior = ior;
            }
            ClosureColor::component(Spectrum::new(w), params)
        };
        let tree = ClosureColor::add(glass(1.5, 0.25), ClosureColor::add(glass(2.0, 0.5), glass(1.2, 0.25)));
        let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();

        assert_eq!(composite.ior_count(), 3);
        let cdf = composite.ior_cdf();
        assert!(approx_eq!(f32, cdf[0], 0.25, epsilon = 1e-5));
        assert!(approx_eq!(f32, cdf[1], 0.75, epsilon = 1e-5));
        assert_eq!(cdf[2], 1.0);
        assert_eq!(composite.choose_ior(0.1), 1.5);
        assert_eq!(composite.choose_ior(0.5), 2.0);
        assert_eq!(composite.choose_ior(0.9), 1.2);
    }

    #[test]
    fn ior_capacity_is_enforced() {
        let registry = registry();
        let mut composite = CompositeSurfaceClosure::new(&registry);
        for i in 0..MAX_CLOSURE_ENTRIES {
            composite.add_ior(&Spectrum::ONE, 1.0 + i as Float * 0.1).unwrap();
        }
        assert_eq!(
            composite.add_ior(&Spectrum::ONE, 1.5),
            Err(ClosureError::CapacityExceeded {
                capacity: MAX_CLOSURE_ENTRIES
            })
        );
        assert_eq!(composite.ior_count(), MAX_CLOSURE_ENTRIES);
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(
            ClosureColor::mul(Spectrum::rgb(0.2, 0.4, 0.6), glossy("std", 0.3)),
            ClosureColor::add(diffuse(Vector3f::new(1.0, 2.0, 3.0), 0.5), sheen(0.1)),
        );
        let basis = Basis3f::from_normal(Vector3f::new(0.0, 0.6, 0.8));

        let a = CompositeSurfaceClosure::build(&registry, &basis, Some(&tree), &arena).unwrap();
        let b = CompositeSurfaceClosure::build(&registry, &basis, Some(&tree), &arena).unwrap();
        let a: Vec<_> = a.entries().copied().collect();
        let b: Vec<_> = b.entries().copied().collect();
        assert_eq!(a, b);
    }

    proptest! {
        #[test]
        fn scalar_weights_are_luminances(weights in prop::collection::vec(0.0..4.0f32, 1..16)) {
            let registry = registry();
            let arena = Bump::new();
            let mut tree = diffuse(Vector3f::Z_AXIS, weights[0]);
            for w in weights[1..].iter() {
                tree = ClosureColor::add(tree, sheen(*w));
            }
            let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();

            let expected: Vec<Float> = weights.iter().copied().filter(|w| luminance(&Spectrum::new(*w)) > 0.0).collect();
            prop_assert_eq!(composite.closure_count(), expected.len());
            for (entry, w) in composite.entries().zip(expected.iter()) {
                prop_assert_eq!(entry.scalar_weight, luminance(&Spectrum::new(*w)));
                prop_assert!(entry.scalar_weight > 0.0);
            }
        }

        #[test]
        fn mode_pdfs_sum_to_one(weights in prop::collection::vec(0.01..4.0f32, 1..16)) {
            let registry = registry();
            let arena = Bump::new();
            let mut tree = diffuse(Vector3f::Z_AXIS, weights[0]);
            for (i, w) in weights[1..].iter().enumerate() {
                let leaf = if i % 2 == 0 { glossy("ggx", *w) } else { sheen(*w) };
                tree = ClosureColor::add(tree, leaf);
            }
            let composite = CompositeSurfaceClosure::build(&registry, &Basis3f::default(), Some(&tree), &arena).unwrap();

            for modes in [ScatteringMode::DIFFUSE, ScatteringMode::GLOSSY, ScatteringMode::ALL] {
                let mut pdfs = [0.0; MAX_CLOSURE_ENTRIES];
                let n = composite.compute_pdfs(modes, &mut pdfs);
                let sum: Float = pdfs.iter().sum();
                if n > 0 {
                    prop_assert!(approx_eq!(f32, sum, 1.0, epsilon = 1e-5));
                } else {
                    prop_assert_eq!(sum, 0.0);
                }
            }
        }
    }
}
