//! BSDF Input Values

use super::*;

/// Parameters of the Ashikhmin-Shirley BRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AshikhminBrdfInputValues {
    /// Diffuse reflectance.
    pub rd: Spectrum,

    /// Diffuse reflectance multiplier.
    pub rd_multiplier: Float,

    /// Glossy reflectance.
    pub rg: Spectrum,

    /// Glossy reflectance multiplier.
    pub rg_multiplier: Float,

    /// Shininess exponent in the tangent u direction.
    pub nu: Float,

    /// Shininess exponent in the tangent v direction.
    pub nv: Float,

    /// Fresnel multiplier.
    pub fr_multiplier: Float,
}

/// Parameters of the Blinn BRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BlinnBrdfInputValues {
    /// Shininess exponent.
    pub exponent: Float,

    /// Index of refraction.
    pub ior: Float,
}

/// Parameters of the Disney principled BRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DisneyBrdfInputValues {
    pub base_color: Spectrum,
    pub subsurface: Float,
    pub metallic: Float,
    pub specular: Float,
    pub specular_tint: Float,
    pub anisotropic: Float,
    pub roughness: Float,
    pub sheen: Float,
    pub sheen_tint: Float,
    pub clearcoat: Float,
    pub clearcoat_gloss: Float,
}

/// Parameters of the rough dielectric (glass) BSDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlassBsdfInputValues {
    /// Transmittance at the surface.
    pub surface_transmittance: Spectrum,

    /// Surface transmittance multiplier.
    pub surface_transmittance_multiplier: Float,

    /// Tint of reflected light.
    pub reflection_tint: Spectrum,

    /// Tint of refracted light.
    pub refraction_tint: Spectrum,

    /// Microfacet roughness.
    pub roughness: Float,

    /// Blend between GGX and Beckmann tails for the std distribution.
    pub highlight_falloff: Float,

    /// Anisotropy in [-1, 1].
    pub anisotropy: Float,

    /// Index of refraction.
    pub ior: Float,

    /// Transmittance of the medium behind the surface.
    pub volume_transmittance: Spectrum,

    /// Distance at which `volume_transmittance` is reached.
    pub volume_transmittance_distance: Float,

    /// Amount of multiple scattering energy compensation.
    pub energy_compensation: Float,
}

/// Parameters of the rough dielectric coated (glossy) BRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GlossyBrdfInputValues {
    pub reflectance: Spectrum,
    pub reflectance_multiplier: Float,
    pub roughness: Float,
    pub highlight_falloff: Float,
    pub anisotropy: Float,
    pub ior: Float,
    pub fresnel_weight: Float,
    pub energy_compensation: Float,
}

/// Parameters of the rough conductor (metal) BRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MetalBrdfInputValues {
    /// Reflectance at normal incidence.
    pub normal_reflectance: Spectrum,

    /// Reflectance at grazing angles.
    pub edge_tint: Spectrum,

    pub reflectance_multiplier: Float,
    pub roughness: Float,
    pub highlight_falloff: Float,
    pub anisotropy: Float,
    pub energy_compensation: Float,
}

/// Parameters of the Oren-Nayar BRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OrenNayarBrdfInputValues {
    /// Reflectance.
    pub reflectance: Spectrum,

    /// Reflectance multiplier.
    pub reflectance_multiplier: Float,

    /// Roughness; 0 is Lambertian.
    pub roughness: Float,
}

/// Parameters of the plastic BRDF (a diffuse base under a dielectric coat).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PlasticBrdfInputValues {
    pub specular_reflectance: Spectrum,
    pub specular_reflectance_multiplier: Float,
    pub roughness: Float,
    pub highlight_falloff: Float,
    pub ior: Float,
    pub diffuse_reflectance: Spectrum,
    pub diffuse_reflectance_multiplier: Float,
    pub internal_scattering: Float,
}

/// Parameters of the sheen BRDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SheenBrdfInputValues {
    pub reflectance: Spectrum,
    pub reflectance_multiplier: Float,
}

/// Parameters of the diffuse (Lambertian) BTDF.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DiffuseBtdfInputValues {
    pub transmittance: Spectrum,
    pub transmittance_multiplier: Float,
}
