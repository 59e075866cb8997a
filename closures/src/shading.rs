//! Shading Point Closures
//!
//! Turns the closure tree a shader produced at one shading point into
//! everything the light transport needs from it.

use crate::*;
use bumpalo::Bump;
use kernel::geometry::*;
use kernel::math::*;
use kernel::spectrum::*;

/// The shader output at one shading point.
#[derive(Copy, Clone, Debug)]
pub struct ShadingPoint<'t> {
    /// World space position; used in diagnostics.
    pub position: Vector3f,

    /// Shading basis before any closure overrides it.
    pub shading_basis: Basis3f,

    /// Root of the closure tree; `None` when the shader produced nothing.
    pub closures: Option<&'t ClosureColor>,
}

/// Everything extracted from the closure tree of a shading point.
#[derive(Clone)]
pub struct ShadingPointClosures<'a> {
    /// BSDF closures.
    pub surface: CompositeSurfaceClosure<'a>,

    /// BSSRDF closures.
    pub subsurface: CompositeSubsurfaceClosure<'a>,

    /// EDF closures.
    pub emission: CompositeEmissionClosure<'a>,

    /// Opacity in [0, 1].
    pub opacity: Float,

    /// Holdout factor in [0, 1].
    pub holdout: Float,

    /// Background color.
    pub background: Spectrum,
}

/// Builds the composites and scalar reductions of a shading point. A
/// composite whose closures cannot be converted is logged and replaced by an
/// empty one, so the sample contributes nothing through it.
///
/// * `registry` - The closure registry.
/// * `point`    - The shading point.
/// * `arena`    - Per-thread arena for the parameter blocks.
pub fn evaluate_shading_point<'a>(
    registry: &'a ClosureRegistry,
    point: &ShadingPoint<'_>,
    arena: &'a Bump,
) -> ShadingPointClosures<'a> {
    let surface = CompositeSurfaceClosure::build(registry, &point.shading_basis, point.closures, arena)
        .unwrap_or_else(|err| {
            warn!("Dropping surface closures at {}: {}.", point.position, err);
            CompositeSurfaceClosure::empty(registry)
        });

    let subsurface = CompositeSubsurfaceClosure::build(&point.shading_basis, point.closures, arena)
        .unwrap_or_else(|err| {
            warn!("Dropping subsurface closures at {}: {}.", point.position, err);
            CompositeSubsurfaceClosure::new()
        });

    let emission = CompositeEmissionClosure::build(point.closures, arena).unwrap_or_else(|err| {
        warn!("Dropping emission closures at {}: {}.", point.position, err);
        CompositeEmissionClosure::new()
    });

    ShadingPointClosures {
        surface,
        subsurface,
        emission,
        opacity: process_transparency_tree(point.closures),
        holdout: process_holdout_tree(point.closures),
        background: process_background_tree(point.closures),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use float_cmp::*;
    use std::thread;

    fn point(closures: Option<&ClosureColor>) -> ShadingPoint<'_> {
        ShadingPoint {
            position: Vector3f::new(1.0, 2.0, 3.0),
            shading_basis: Basis3f::default(),
            closures,
        }
    }

    #[test]
    fn everything_is_extracted() {
        init_logging();
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(
            ClosureColor::add(diffuse(Vector3f::Z_AXIS, 0.5), transparent(0.5)),
            ClosureColor::add(
                ClosureColor::component(Spectrum::ONE, subsurface_params("gaussian")),
                ClosureColor::add(emission(2.0), background(0.25)),
            ),
        );

        let closures = evaluate_shading_point(&registry, &point(Some(&tree)), &arena);
        assert_eq!(closures.surface.closure_count(), 1);
        assert_eq!(closures.subsurface.closure_count(), 1);
        assert_eq!(closures.emission.closure_count(), 1);
        assert!(approx_eq!(f32, closures.opacity, 0.5, epsilon = 1e-6));
        assert_eq!(closures.holdout, 0.0);
        assert_eq!(closures.background, Spectrum::new(0.25));
    }

    #[test]
    fn faulty_surface_closures_are_dropped() {
        init_logging();
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(
            ClosureColor::component(Spectrum::ONE, glass_params("metal")),
            ClosureColor::add(emission(1.0), transparent(0.25)),
        );

        let closures = evaluate_shading_point(&registry, &point(Some(&tree)), &arena);
        assert!(closures.surface.is_empty());
        assert_eq!(closures.surface.choose_ior(0.5), 1.0);
        // The other composites are unaffected.
        assert_eq!(closures.emission.closure_count(), 1);
        assert!(approx_eq!(f32, closures.opacity, 0.75, epsilon = 1e-6));
    }

    #[test]
    fn faulty_subsurface_closures_are_dropped() {
        init_logging();
        let registry = registry();
        let arena = Bump::new();
        let tree = ClosureColor::add(
            ClosureColor::component(Spectrum::ONE, subsurface_params("marble")),
            sheen(1.0),
        );

        let closures = evaluate_shading_point(&registry, &point(Some(&tree)), &arena);
        assert!(closures.subsurface.is_empty());
        assert_eq!(closures.surface.closure_count(), 1);
    }

    #[test]
    fn empty_point_is_opaque() {
        let registry = registry();
        let arena = Bump::new();
        let closures = evaluate_shading_point(&registry, &point(None), &arena);
        assert!(closures.surface.is_empty());
        assert!(closures.subsurface.is_empty());
        assert!(closures.emission.is_empty());
        assert_eq!(closures.opacity, 1.0);
    }

    #[test]
    fn threads_share_the_registry() {
        let registry = &registry();
        let good = &ClosureColor::add(diffuse(Vector3f::Z_AXIS, 1.0), glossy("ggx", 1.0));
        let bad = &ClosureColor::add(diffuse(Vector3f::Z_AXIS, 1.0), glossy("phong", 1.0));

        thread::scope(|s| {
            let good_handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(move || {
                        let arena = Bump::new();
                        let mut counts = vec![];
                        for _ in 0..64 {
                            let closures = evaluate_shading_point(registry, &point(Some(good)), &arena);
                            counts.push(closures.surface.closure_count());
                        }
                        counts
                    })
                })
                .collect();
            let bad_handle = s.spawn(move || {
                let arena = Bump::new();
                evaluate_shading_point(registry, &point(Some(bad)), &arena)
                    .surface
                    .closure_count()
            });

            for handle in good_handles {
                assert!(handle.join().unwrap().iter().all(|n| *n == 2));
            }
            assert_eq!(bad_handle.join().unwrap(), 0);
        });
    }
}
