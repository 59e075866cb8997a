//! Scattering Modes

use bitflags::bitflags;

bitflags! {
    /// Classifies the scattering a closure contributes so light transport
    /// strategies can restrict sampling to a subset of the closures.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct ScatteringMode: u8 {
        const DIFFUSE = 1;
        const GLOSSY = 2;
        const SPECULAR = 4;
        const ALL = Self::DIFFUSE.bits() | Self::GLOSSY.bits() | Self::SPECULAR.bits();
    }
}

impl ScatteringMode {
    /// Returns true if any of the given modes is set.
    ///
    /// * `other` - Modes to match.
    pub fn matches(&self, other: Self) -> bool {
        self.bits() & other.bits() > 0
    }
}
