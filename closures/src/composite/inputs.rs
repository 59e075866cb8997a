//! Composite Parameter Blocks
//!
//! References to the renderer parameter blocks a composite's entries own in
//! the arena. The entry's closure id tells the models apart where several
//! share a layout.

use super::*;

/// Parameter block of a surface composite entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SurfaceInputs<'a> {
    Ashikhmin(&'a AshikhminBrdfInputValues),
    Blinn(&'a BlinnBrdfInputValues),
    DiffuseBtdf(&'a DiffuseBtdfInputValues),
    Disney(&'a DisneyBrdfInputValues),
    Glass(&'a GlassBsdfInputValues),
    Glossy(&'a GlossyBrdfInputValues),
    Metal(&'a MetalBrdfInputValues),
    OrenNayar(&'a OrenNayarBrdfInputValues),
    Plastic(&'a PlasticBrdfInputValues),
    Sheen(&'a SheenBrdfInputValues),
}

/// Parameter block of a subsurface composite entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BssrdfInputs<'a> {
    /// Dipole, normalized diffusion and gaussian profiles.
    Diffusion(&'a BssrdfInputValues),

    /// Random walk.
    RandomWalk(&'a RandomWalkBssrdfInputValues),
}

/// Parameter block of an emission composite entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EdfInputs<'a> {
    Diffuse(&'a DiffuseEdfInputValues),
}

/// Parameter blocks that can be stored in a surface composite.
pub trait IntoSurfaceInputs {
    /// Returns the reference stored in the composite entry.
    fn surface_inputs(&self) -> SurfaceInputs<'_>;
}

/// Parameter blocks that can be stored in a subsurface composite.
pub trait IntoBssrdfInputs {
    /// Returns the reference stored in the composite entry.
    fn bssrdf_inputs(&self) -> BssrdfInputs<'_>;
}

impl IntoSurfaceInputs for AshikhminBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Ashikhmin(self)
    }
}

impl IntoSurfaceInputs for BlinnBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Blinn(self)
    }
}

impl IntoSurfaceInputs for DiffuseBtdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::DiffuseBtdf(self)
    }
}

impl IntoSurfaceInputs for DisneyBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Disney(self)
    }
}

impl IntoSurfaceInputs for GlassBsdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Glass(self)
    }
}

impl IntoSurfaceInputs for GlossyBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Glossy(self)
    }
}

impl IntoSurfaceInputs for MetalBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Metal(self)
    }
}

impl IntoSurfaceInputs for OrenNayarBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::OrenNayar(self)
    }
}

impl IntoSurfaceInputs for PlasticBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Plastic(self)
    }
}

impl IntoSurfaceInputs for SheenBrdfInputValues {
    fn surface_inputs(&self) -> SurfaceInputs<'_> {
        SurfaceInputs::Sheen(self)
    }
}

impl IntoBssrdfInputs for BssrdfInputValues {
    fn bssrdf_inputs(&self) -> BssrdfInputs<'_> {
        BssrdfInputs::Diffusion(self)
    }
}

impl IntoBssrdfInputs for RandomWalkBssrdfInputValues {
    fn bssrdf_inputs(&self) -> BssrdfInputs<'_> {
        BssrdfInputs::RandomWalk(self)
    }
}
