//! BSSRDF Input Values

use super::*;

/// Parameters shared by the diffusion profile BSSRDFs (dipoles, normalized
/// diffusion and gaussian).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BssrdfInputValues {
    /// Overall weight of the BSSRDF.
    pub weight: Float,

    /// Multiple scattering albedo.
    pub reflectance: Spectrum,

    /// Reflectance multiplier.
    pub reflectance_multiplier: Float,

    /// Mean free path.
    pub mfp: Spectrum,

    /// Mean free path multiplier.
    pub mfp_multiplier: Float,

    /// Index of refraction.
    pub ior: Float,

    /// Strength of the Fresnel term at the boundary in [0, 1].
    pub fresnel_weight: Float,
}

/// Parameters of the random walk BSSRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RandomWalkBssrdfInputValues {
    /// Parameters shared with the diffusion profiles.
    pub base: BssrdfInputValues,

    /// Weight of paths leaving the medium without scattering.
    pub zero_scattering_weight: Float,
}
