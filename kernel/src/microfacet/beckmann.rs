//! Beckmann Distribution

use super::*;

/// Implements the isotropic Beckmann-Spizzichino distribution.
#[derive(Copy, Clone, Debug)]
pub struct BeckmannDistribution {
    /// Width of the distribution; α = sqrt(2) * σ where σ is the RMS slope
    /// of microfacets.
    alpha: Float,
}

impl BeckmannDistribution {
    /// Create a new `BeckmannDistribution`.
    ///
    /// * `alpha` - Width of the distribution. Clamped to at least 0.001.
    pub fn new(alpha: Float) -> Self {
        Self {
            alpha: max(0.001, alpha),
        }
    }
}

impl MicrofacetDistribution for BeckmannDistribution {
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
        (-tan2_theta / alpha2).exp() / (PI * alpha2 * cos4_theta)
    }

    /// Returns the invisible masked microfacet area per visible microfacet area.
    ///
    /// Uses the rational approximation of the Smith term.
    ///
    /// * `w` - The direction from camera/viewer.
    fn lambda(&self, w: &Vector3f) -> Float {
        let abs_tan_theta = tan_2_theta(w).sqrt();
        if abs_tan_theta.is_infinite() {
            return 0.0;
        }
        let a = 1.0 / (self.alpha * abs_tan_theta);
        if a >= 1.6 {
            0.0
        } else {
            (1.0 - 1.259 * a + 0.396 * a * a) / (3.535 * a + 2.181 * a * a)
        }
    }

    /// Returns a sample from the distribution of normal vectors.
    ///
    /// * `wo` - Outgoing direction.
    /// * `u`  - The 2D uniform random values.
    fn sample_wh(&self, wo: &Vector3f, u: (Float, Float)) -> Vector3f {
        let tan2_theta = -self.alpha * self.alpha * (1.0 - u.0).ln();
        sample_isotropic_wh(wo, tan2_theta, u.1)
    }
}
