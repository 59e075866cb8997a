//! Test helpers.

use crate::*;
use kernel::geometry::*;
use kernel::math::*;
use kernel::spectrum::*;

/// Routes log output to the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// One `register_closure()` call.
pub struct RegisteredClosure {
    pub name: &'static str,
    pub id: ClosureId,
    pub params: &'static [ClosureParam],
    pub block_size: usize,
    pub prepare: Option<PrepareFn>,
}

/// A shading system that remembers the closures declared to it.
#[derive(Default)]
pub struct RecordingShadingSystem {
    pub closures: Vec<RegisteredClosure>,
}

impl ShadingSystem for RecordingShadingSystem {
    fn register_closure(
        &mut self,
        name: &'static str,
        id: ClosureId,
        params: &'static [ClosureParam],
        block_size: usize,
        prepare: Option<PrepareFn>,
    ) {
        self.closures.push(RegisteredClosure {
            name,
            id,
            params,
            block_size,
            prepare,
        });
    }
}

/// Returns a registry with every closure kind.
pub fn registry() -> ClosureRegistry {
    register_closures(&mut RecordingShadingSystem::default())
}

/// Returns a grey `diffuse` leaf.
pub fn diffuse(n: Vector3f, w: Float) -> ClosureColor {
    ClosureColor::component(Spectrum::new(w), ClosureParams::Diffuse(DiffuseParams { n }))
}

/// Returns a grey `as_sheen` leaf facing +z.
pub fn sheen(w: Float) -> ClosureColor {
    ClosureColor::component(
        Spectrum::new(w),
        ClosureParams::Sheen(SheenParams { n: Vector3f::Z_AXIS }),
    )
}

/// Returns a grey `transparent` leaf.
pub fn transparent(w: Float) -> ClosureColor {
    ClosureColor::component(Spectrum::new(w), ClosureParams::Transparent)
}

/// Returns a grey `holdout` leaf.
pub fn holdout(w: Float) -> ClosureColor {
    ClosureColor::component(Spectrum::new(w), ClosureParams::Holdout)
}

/// Returns a grey `background` leaf.
pub fn background(w: Float) -> ClosureColor {
    ClosureColor::component(Spectrum::new(w), ClosureParams::Background)
}

/// Returns a grey `emission` leaf.
pub fn emission(w: Float) -> ClosureColor {
    ClosureColor::component(Spectrum::new(w), ClosureParams::Emission)
}

/// Returns `as_glass` parameters facing +z with an index of refraction of
/// 1.5.
pub fn glass_params(dist: &str) -> ClosureParams {
    ClosureParams::Glass(GlassParams {
        dist: dist.to_string(),
        n: Vector3f::Z_AXIS,
        t: Vector3f::X_AXIS,
        surface_transmittance: Spectrum::ONE,
        reflection_tint: Spectrum::ONE,
        refraction_tint: Spectrum::ONE,
        roughness: 0.1,
        highlight_falloff: 0.4,
        anisotropy: 0.0,
        ior: 1.5,
        volume_transmittance: Spectrum::ONE,
        volume_transmittance_distance: 0.0,
        energy_compensation: 0.0,
    })
}

/// Returns a grey `as_glossy` leaf facing +z with a roughness of 0.3 and an
/// index of refraction of 1.5.
pub fn glossy(dist: &str, w: Float) -> ClosureColor {
    ClosureColor::component(
        Spectrum::new(w),
        ClosureParams::Glossy(GlossyParams {
            dist: dist.to_string(),
            n: Vector3f::Z_AXIS,
            t: Vector3f::X_AXIS,
            roughness: 0.3,
            highlight_falloff: 0.4,
            anisotropy: 0.0,
            ior: 1.5,
            energy_compensation: 0.0,
        }),
    )
}

/// Returns `as_subsurface` parameters facing +z.
pub fn subsurface_params(profile: &str) -> ClosureParams {
    ClosureParams::Subsurface(SubsurfaceParams {
        profile: profile.to_string(),
        n: Vector3f::Z_AXIS,
        reflectance: Spectrum::new(0.5),
        mean_free_path: Spectrum::ONE,
        ior: 1.3,
        fresnel_weight: 1.0,
    })
}
