//! GGX Distribution

use super::*;

/// Implements the isotropic GGX (Trowbridge-Reitz) distribution.
#[derive(Copy, Clone, Debug)]
pub struct GgxDistribution {
    /// Width of the distribution; α = sqrt(2) * σ where σ is the RMS slope
    /// of microfacets.
    alpha: Float,
}

impl GgxDistribution {
    /// Create a new `GgxDistribution`.
    ///
    /// * `alpha` - Width of the distribution. Clamped to at least 0.001.
    pub fn new(alpha: Float) -> Self {
        Self {
            alpha: max(0.001, alpha),
        }
    }
}

impl MicrofacetDistribution for GgxDistribution {
    /// Return the differential area of microfacets oriented with the surface
    /// normal `wh`.
    ///
    /// * `wh` - A sample normal from the distrubition of normal vectors.
    fn d(&self, wh: &Vector3f) -> Float {
        let tan2_theta = tan_2_theta(wh);
        if tan2_theta.is_infinite() {
            return 0.0;
        }
        let alpha2 = self.alpha * self.alpha;
        let cos4_theta = cos_2_theta(wh) * cos_2_theta(wh);
        let e = 1.0 + tan2_theta / alpha2;
        1.0 / (PI * alpha2 * cos4_theta * e * e)
    }

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// * `w` - The direction from camera/viewer.
    fn lambda(&self, w: &Vector3f) -> Float {
        let tan2_theta = tan_2_theta(w);
        if tan2_theta.is_infinite() {
            return 0.0;
        }
        let alpha2_tan2_theta = self.alpha * self.alpha * tan2_theta;
        (-1.0 + (1.0 + alpha2_tan2_theta).sqrt()) / 2.0
    }

    /// Returns a sample from the distribution of normal vectors.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    fn sample_wh(&self, wo: &Vector3f, u: (Float, Float)) -> Vector3f {
        let tan2_theta = self.alpha * self.alpha * u.0 / (1.0 - u.0);
        sample_isotropic_wh(wo, tan2_theta, u.1)
    }
}
