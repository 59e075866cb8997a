//! Average Albedo Tables
//!
//! Hemispherical average albedo `Eavg = 2 ∫ E(μ) μ dμ` of a perfectly
//! reflecting microfacet BRDF (Fresnel = 1), tabulated over roughness.
//! `E(μ)` is the directional albedo for an outgoing direction with
//! `cos θo = μ`, estimated by sampling half vectors from `D(wh) cos θh`.

use super::*;

/// Number of roughness values in each table; roughness `i / (N - 1)`.
pub const ALBEDO_TABLE_SIZE: usize = 32;

/// Number of cos(θo) values integrated per roughness.
const ALBEDO_COS_THETA_COUNT: usize = 32;

/// Square root of the number of stratified half vector samples per
/// directional albedo estimate.
const ALBEDO_SAMPLE_STRATA: usize = 16;

lazy_static! {
    static ref GGX_AVERAGE_ALBEDO: [Float; ALBEDO_TABLE_SIZE] =
        compute_average_albedo_table("GGX", GgxDistribution::new);
    static ref BECKMANN_AVERAGE_ALBEDO: [Float; ALBEDO_TABLE_SIZE] =
        compute_average_albedo_table("Beckmann", BeckmannDistribution::new);
}

/// Returns the average albedo of the given distribution model at the given
/// roughness, interpolated from the precomputed table.
///
/// * `model`     - The microfacet distribution model.
/// * `roughness` - Roughness in [0, 1]; values outside are clamped.
pub fn average_albedo(model: MicrofacetModel, roughness: Float) -> Float {
    let table: &[Float; ALBEDO_TABLE_SIZE] = match model {
        MicrofacetModel::Ggx => &*GGX_AVERAGE_ALBEDO,
        MicrofacetModel::Beckmann => &*BECKMANN_AVERAGE_ALBEDO,
    };

    let x = saturate(roughness) * (ALBEDO_TABLE_SIZE - 1) as Float;
    let i = min(x as usize, ALBEDO_TABLE_SIZE - 2);
    lerp(x - i as Float, table[i], table[i + 1])
}

/// Builds an average albedo table.
///
/// * `name`             - Distribution name used for logging.
/// * `new_distribution` - Creates the distribution for a given α.
fn compute_average_albedo_table<D, F>(name: &str, new_distribution: F) -> [Float; ALBEDO_TABLE_SIZE]
where
    D: MicrofacetDistribution,
    F: Fn(Float) -> D,
{
    let mut table = [0.0; ALBEDO_TABLE_SIZE];
    for (i, eavg) in table.iter_mut().enumerate() {
        let roughness = i as Float / (ALBEDO_TABLE_SIZE - 1) as Float;
        let distribution = new_distribution(alpha_from_roughness(roughness));

        let mut sum = 0.0;
        for j in 0..ALBEDO_COS_THETA_COUNT {
            let mu = (j as Float + 0.5) / ALBEDO_COS_THETA_COUNT as Float;
            sum += directional_albedo(&distribution, mu) * mu;
        }
        *eavg = min(1.0, 2.0 * sum / ALBEDO_COS_THETA_COUNT as Float);
    }

    debug!("Computed {} average albedo table.", name);
    table
}

/// Estimates the directional albedo of a microfacet BRDF with no Fresnel
/// attenuation.
///
/// * `distribution` - The microfacet distribution.
/// * `mu`           - cos(θo) of the outgoing direction, in (0, 1].
fn directional_albedo<D: MicrofacetDistribution>(distribution: &D, mu: Float) -> Float {
    let wo = Vector3f::new(max(0.0, 1.0 - mu * mu).sqrt(), 0.0, mu);

    let mut sum = 0.0;
    for a in 0..ALBEDO_SAMPLE_STRATA {
        for b in 0..ALBEDO_SAMPLE_STRATA {
            let u = (
                (a as Float + 0.5) / ALBEDO_SAMPLE_STRATA as Float,
                (b as Float + 0.5) / ALBEDO_SAMPLE_STRATA as Float,
            );
            let wh = distribution.sample_wh(&wo, u);
            let wo_dot_wh = wo.dot(&wh);
            if wo_dot_wh <= 0.0 {
                continue;
            }

            let wi = 2.0 * wo_dot_wh * wh - wo;
            if !same_hemisphere(&wo, &wi) {
                continue;
            }

            // f cos θi / pdf with pdf(wi) = D cos θh / (4 wo·wh).
            sum += distribution.g(&wo, &wi) * wo_dot_wh / (mu * cos_theta(&wh));
        }
    }
    sum / (ALBEDO_SAMPLE_STRATA * ALBEDO_SAMPLE_STRATA) as Float
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn smooth_surfaces_reflect_everything() {
        assert!(average_albedo(MicrofacetModel::Ggx, 0.0) > 0.95);
        assert!(average_albedo(MicrofacetModel::Beckmann, 0.0) > 0.95);
    }

    #[test]
    fn albedo_decreases_with_roughness() {
        for model in [MicrofacetModel::Ggx, MicrofacetModel::Beckmann] {
            let e0 = average_albedo(model, 0.0);
            let e1 = average_albedo(model, 0.5);
            let e2 = average_albedo(model, 1.0);
            assert!(e0 > e1 && e1 > e2, "{:?}: {} {} {}", model, e0, e1, e2);
        }
    }

    #[test]
    fn ggx_loses_more_energy_than_beckmann() {
        assert!(average_albedo(MicrofacetModel::Ggx, 1.0) < average_albedo(MicrofacetModel::Beckmann, 1.0));
    }

    #[test]
    fn out_of_range_roughness_is_clamped() {
        assert_eq!(
            average_albedo(MicrofacetModel::Ggx, 2.0),
            average_albedo(MicrofacetModel::Ggx, 1.0)
        );
        assert_eq!(
            average_albedo(MicrofacetModel::Beckmann, -1.0),
            average_albedo(MicrofacetModel::Beckmann, 0.0)
        );
    }

    proptest! {
        #[test]
        fn albedo_is_bounded(roughness in 0.0..1.0f32) {
            for model in [MicrofacetModel::Ggx, MicrofacetModel::Beckmann] {
                let e = average_albedo(model, roughness);
                prop_assert!(e > 0.0 && e <= 1.0);
            }
        }
    }
}
