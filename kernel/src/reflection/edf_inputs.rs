//! EDF Input Values

use super::*;

/// Parameters of the diffuse EDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DiffuseEdfInputValues {
    /// Emitted radiance, normalized so the largest component is 1.
    pub radiance: Spectrum,

    /// Radiance multiplier.
    pub radiance_multiplier: Float,

    /// Exposure in stops.
    pub exposure: Float,
}
