//! Closure Identifiers

use std::fmt;

/// Number of closure identifiers; the size of the registry tables.
pub const NUM_CLOSURE_IDS: usize = 38;

/// Identifies a closure kind, or a per-distribution/per-profile variant of
/// one. Variant ids are never produced by the shading language; they are
/// what the converters record in composites.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ClosureId {
    AshikhminShirley = 0,
    Background,
    Blinn,
    Debug,
    Diffuse,
    Disney,
    Emission,
    Glass,
    GlassBeckmann,
    GlassGgx,
    GlassStd,
    Glossy,
    GlossyBeckmann,
    GlossyGgx,
    GlossyStd,
    Holdout,
    Metal,
    MetalBeckmann,
    MetalGgx,
    MetalStd,
    OrenNayar,
    Phong,
    Plastic,
    PlasticBeckmann,
    PlasticGgx,
    PlasticGtr1,
    PlasticStd,
    Reflection,
    Sheen,
    Subsurface,
    SubsurfaceBetterDipole,
    SubsurfaceDirectionalDipole,
    SubsurfaceGaussian,
    SubsurfaceNormalizedDiffusion,
    SubsurfaceRandomWalk,
    SubsurfaceStandardDipole,
    Translucent,
    Transparent,
}

impl ClosureId {
    /// Every identifier, in table order.
    pub const ALL: [ClosureId; NUM_CLOSURE_IDS] = [
        Self::AshikhminShirley,
        Self::Background,
        Self::Blinn,
        Self::Debug,
        Self::Diffuse,
        Self::Disney,
        Self::Emission,
        Self::Glass,
        Self::GlassBeckmann,
        Self::GlassGgx,
        Self::GlassStd,
        Self::Glossy,
        Self::GlossyBeckmann,
        Self::GlossyGgx,
        Self::GlossyStd,
        Self::Holdout,
        Self::Metal,
        Self::MetalBeckmann,
        Self::MetalGgx,
        Self::MetalStd,
        Self::OrenNayar,
        Self::Phong,
        Self::Plastic,
        Self::PlasticBeckmann,
        Self::PlasticGgx,
        Self::PlasticGtr1,
        Self::PlasticStd,
        Self::Reflection,
        Self::Sheen,
        Self::Subsurface,
        Self::SubsurfaceBetterDipole,
        Self::SubsurfaceDirectionalDipole,
        Self::SubsurfaceGaussian,
        Self::SubsurfaceNormalizedDiffusion,
        Self::SubsurfaceRandomWalk,
        Self::SubsurfaceStandardDipole,
        Self::Translucent,
        Self::Transparent,
    ];

    /// Returns the index of the identifier in the registry tables.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ClosureId {
    /// Formats the value using the given formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
