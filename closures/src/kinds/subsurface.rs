//! Subsurface

use super::*;

/// Raw parameters of `as_subsurface`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubsurfaceParams {
    /// Diffusion profile name.
    pub profile: String,

    /// Normal.
    pub n: Vector3f,

    /// Multiple scattering albedo.
    pub reflectance: Spectrum,

    /// Mean free path per channel.
    pub mean_free_path: Spectrum,

    /// Index of refraction of the medium.
    pub ior: Float,

    /// Keyword parameter; weight of the Fresnel term at the boundary.
    pub fresnel_weight: Float,
}

/// The `as_subsurface` closure. It never reaches the surface composite;
/// `CompositeSubsurfaceClosure` collects it instead.
pub struct SubsurfaceClosure;

impl SubsurfaceClosure {
    /// Adds a BSSRDF to a subsurface composite.
    ///
    /// * `composite`     - The composite.
    /// * `shading_basis` - The original shading basis at the shading point.
    /// * `params`        - Raw parameters.
    /// * `weight`        - Accumulated weight of the closure.
    /// * `arena`         - Arena for the parameter block.
    pub fn convert<'a>(
        composite: &mut CompositeSubsurfaceClosure<'a>,
        shading_basis: &Basis3f,
        params: &ClosureParams,
        weight: &Spectrum,
        arena: &'a Bump,
    ) -> Result<()> {
        let p = params_of::<Self>(params)?;

        let values = BssrdfInputValues {
            weight: 1.0,
            reflectance: p.reflectance,
            reflectance_multiplier: 1.0,
            mfp: p.mean_free_path,
            mfp_multiplier: 1.0,
            ior: p.ior,
            fresnel_weight: saturate(p.fresnel_weight),
        };

        let closure_type = match p.profile.as_str() {
            "better_dipole" => ClosureId::SubsurfaceBetterDipole,
            "directional_dipole" => ClosureId::SubsurfaceDirectionalDipole,
            "gaussian" => ClosureId::SubsurfaceGaussian,
            "normalized_diffusion" => ClosureId::SubsurfaceNormalizedDiffusion,
            "standard_dipole" => ClosureId::SubsurfaceStandardDipole,
            "randomwalk" => {
                let values = RandomWalkBssrdfInputValues {
                    base: values,
                    zero_scattering_weight: 1.0,
                };
                composite.add_closure(ClosureId::SubsurfaceRandomWalk, shading_basis, weight, &p.n, values, arena)?;
                return Ok(());
            }
            profile => return Err(ClosureError::UnknownSubsurfaceProfile(profile.to_string())),
        };
        composite.add_closure(closure_type, shading_basis, weight, &p.n, values, arena)?;
        Ok(())
    }
}

impl ClosureKind for SubsurfaceClosure {
    type Params = SubsurfaceParams;

    const NAME: &'static str = "as_subsurface";
    const ID: ClosureId = ClosureId::Subsurface;
    const PARAMS: &'static [ClosureParam] = &[
        ClosureParam::string("profile"),
        ClosureParam::vector("N"),
        ClosureParam::color("reflectance"),
        ClosureParam::color("mean_free_path"),
        ClosureParam::float("ior"),
        ClosureParam::float_keyword("fresnel_weight"),
    ];
    const PREPARE: Option<PrepareFn> = Some(prepare_subsurface as PrepareFn);

    fn into_params(params: SubsurfaceParams) -> ClosureParams {
        ClosureParams::Subsurface(params)
    }

    fn from_params(params: &ClosureParams) -> Option<&SubsurfaceParams> {
        match params {
            ClosureParams::Subsurface(p) => Some(p),
            _ => None,
        }
    }
}

fn prepare_subsurface() -> ClosureParams {
    SubsurfaceClosure::into_params(SubsurfaceParams {
        fresnel_weight: 1.0,
        ..Default::default()
    })
}
