//! Microfacet Distribution Models

use crate::geometry::*;
use crate::math::*;

mod albedo;
mod beckmann;
mod ggx;

// Re-exports
pub use albedo::*;
pub use beckmann::*;
pub use ggx::*;

/// The microfacet distribution families with precomputed albedo tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MicrofacetModel {
    /// Beckmann-Spizzichino distribution.
    Beckmann,

    /// GGX (Trowbridge-Reitz) distribution.
    Ggx,
}

/// Interface for microfacet distribution models. Directions are expressed
/// in the local shading frame where the normal is +z.
pub trait MicrofacetDistribution {
    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    fn d(&self, wh: &Vector3f) -> Float;

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// * `w` - The direction from camera/viewer.
    fn lambda(&self, w: &Vector3f) -> Float;

    /// Evaluates Smith's masking-shadowing function which gives the fraction of
    /// microfacets that are visible from a given direction.
    ///
    /// * `w` - The direction from camera/viewer.
    fn g1(&self, w: &Vector3f) -> Float {
        1.0 / (1.0 + self.lambda(w))
    }

    /// Returns the fraction of microfacets in a differential area that are
    /// visible from both directions `wo` and `wi`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `wi` - Incident direction.
    fn g(&self, wo: &Vector3f, wi: &Vector3f) -> Float {
        1.0 / (1.0 + self.lambda(wo) + self.lambda(wi))
    }

    /// Returns a sample from the distribution of normal vectors, with density
    /// `d(wh) * cos_theta(wh)`.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    fn sample_wh(&self, wo: &Vector3f, u: (Float, Float)) -> Vector3f;
}

/// Maps a roughness in [0, 1] to the distribution's α parameter. Values near
/// zero approach a perfect mirror.
///
/// * `roughness` - Roughness parameter value.
pub fn alpha_from_roughness(roughness: Float) -> Float {
    max(0.001, roughness * roughness)
}

/// Returns cos(θ) of a direction in the shading frame.
///
/// * `w` - The direction.
#[inline(always)]
pub fn cos_theta(w: &Vector3f) -> Float {
    w.z
}

/// Returns cos²(θ) of a direction in the shading frame.
///
/// * `w` - The direction.
#[inline(always)]
pub fn cos_2_theta(w: &Vector3f) -> Float {
    w.z * w.z
}

/// Returns sin²(θ) of a direction in the shading frame.
///
/// * `w` - The direction.
#[inline(always)]
pub fn sin_2_theta(w: &Vector3f) -> Float {
    max(0.0, 1.0 - cos_2_theta(w))
}

/// Returns tan²(θ) of a direction in the shading frame.
///
/// * `w` - The direction.
#[inline(always)]
pub fn tan_2_theta(w: &Vector3f) -> Float {
    sin_2_theta(w) / cos_2_theta(w)
}

/// Returns true if two directions lie in the same hemisphere.
///
/// * `w`  - First direction.
/// * `wp` - Second direction.
#[inline(always)]
pub fn same_hemisphere(w: &Vector3f, wp: &Vector3f) -> bool {
    w.z * wp.z > 0.0
}

/// Returns the direction for the given spherical coordinates.
///
/// * `sin_theta` - sin(θ).
/// * `cos_theta` - cos(θ).
/// * `phi`       - φ.
pub fn spherical_direction(sin_theta: Float, cos_theta: Float, phi: Float) -> Vector3f {
    Vector3f::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta)
}

/// Samples an isotropic half vector given tan²(θ) drawn from the
/// distribution's slope density.
///
/// * `wo`         - Outgoing direction.
/// * `tan2_theta` - Sampled tan²(θ).
/// * `u1`         - Uniform value used for φ.
fn sample_isotropic_wh(wo: &Vector3f, tan2_theta: Float, u1: Float) -> Vector3f {
    let phi = TWO_PI * u1;
    let cos_theta = 1.0 / (1.0 + tan2_theta).sqrt();
    let sin_theta = max(0.0, 1.0 - cos_theta * cos_theta).sqrt();
    let wh = spherical_direction(sin_theta, cos_theta, phi);
    if !same_hemisphere(wo, &wh) {
        -wh
    } else {
        wh
    }
}
