//! Property-based tests for the impact pipeline using proptest.
//!
//! These tests verify floors, branch selection and monotonicity across a
//! wide range of impactors and strike points.

use proptest::prelude::*;

use crate::test_utils::assertions;
use crate::types::{
    AsteroidParameters, Composition, ESCAPE_VELOCITY_KM_S, ImpactLocation, MEGATON_TO_JOULES,
    SurfaceType,
};

use super::{
    MIN_MASS_FRACTION, MIN_VELOCITY_FRACTION, compute_crater, compute_impact_effects,
    compute_secondary_effects, enter_atmosphere,
};

fn composition() -> impl Strategy<Value = Composition> {
    prop::sample::select(Composition::ALL.to_vec())
}

fn asteroid() -> impl Strategy<Value = AsteroidParameters> {
    (10.0f64..5000.0, ESCAPE_VELOCITY_KM_S..70.0, 5.0f64..=90.0, composition()).prop_map(
        |(diameter_m, velocity_km_s, impact_angle_deg, composition)| {
            AsteroidParameters {
                diameter_m,
                velocity_km_s,
                impact_angle_deg,
                ..Default::default()
            }
            .with_composition(composition)
        },
    )
}

fn location() -> impl Strategy<Value = ImpactLocation> {
    (-89.0f64..89.0, -179.0f64..179.0).prop_map(|(lat, lon)| ImpactLocation::new(lat, lon))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Identical inputs give identical outputs.
    #[test]
    fn prop_deterministic(a in asteroid(), l in location()) {
        let first = compute_impact_effects(&a, &l).expect("valid input");
        let second = compute_impact_effects(&a, &l).expect("valid input");
        prop_assert_eq!(first, second);
    }

    /// Floors, ranges and the ocean/land branch hold for every valid input.
    #[test]
    fn prop_results_physically_consistent(a in asteroid(), l in location()) {
        let fx = compute_impact_effects(&a, &l).expect("valid input");
        assertions::assert_physically_consistent(&a, &fx);
    }

    /// A faster body is never less destructive.
    #[test]
    fn prop_monotone_in_velocity(
        a in asteroid(),
        l in location(),
        factor in 1.01f64..2.0,
    ) {
        let faster = AsteroidParameters {
            velocity_km_s: a.velocity_km_s * factor,
            ..a
        };
        let slow_fx = compute_impact_effects(&a, &l).expect("valid input");
        let fast_fx = compute_impact_effects(&faster, &l).expect("valid input");
        assertions::assert_not_weaker(&slow_fx, &fast_fx);
    }

    /// A larger body is never less destructive.
    #[test]
    fn prop_monotone_in_diameter(
        a in asteroid(),
        l in location(),
        factor in 1.01f64..2.0,
    ) {
        let larger = AsteroidParameters {
            diameter_m: a.diameter_m * factor,
            ..a
        };
        let small_fx = compute_impact_effects(&a, &l).expect("valid input");
        let large_fx = compute_impact_effects(&larger, &l).expect("valid input");
        assertions::assert_not_weaker(&small_fx, &large_fx);
    }

    /// Entry fractions stay within their floors even for tiny or slow bodies.
    #[test]
    fn prop_entry_fractions_bounded(
        diameter in 0.01f64..1000.0,
        velocity in 1000.0f64..80_000.0,
        density in 100.0f64..9000.0,
        angle in 1.0f64..=90.0,
    ) {
        let entry = enter_atmosphere(diameter, velocity, angle, density);
        prop_assert!((MIN_MASS_FRACTION..=1.0).contains(&entry.surviving_mass_fraction));
        prop_assert!((MIN_VELOCITY_FRACTION..=1.0).contains(&entry.surviving_velocity_fraction));
        prop_assert!(entry.fragmentation_altitude_km >= 0.0);
        if !entry.did_airburst {
            prop_assert_eq!(entry.fragmentation_altitude_km, 0.0);
        }
    }

    /// The crater never drops below fifteen projectile diameters.
    #[test]
    fn prop_crater_floor(
        diameter in 0.1f64..20_000.0,
        velocity in 100.0f64..80_000.0,
        density in 100.0f64..9000.0,
        angle in 0.01f64..=std::f64::consts::FRAC_PI_2,
        ocean in any::<bool>(),
    ) {
        let surface = if ocean { SurfaceType::Ocean } else { SurfaceType::Land };
        let crater = compute_crater(diameter, velocity, density, surface, angle);
        prop_assert!(crater.diameter_km >= 15.0 * diameter / 1000.0);
        prop_assert!(crater.depth_km < crater.diameter_km);
    }

    /// Damage radii grow with energy and stay finite.
    #[test]
    fn prop_radii_monotone_in_energy(
        energy in 1e-6f64..1e9,
        factor in 1.01f64..10.0,
        ocean in any::<bool>(),
    ) {
        let surface = if ocean { SurfaceType::Ocean } else { SurfaceType::Land };
        let crater = compute_crater(100.0, 20_000.0, 3000.0, surface, 1.0);
        let low =
            compute_secondary_effects(energy, energy * MEGATON_TO_JOULES, &crater, surface, 4.0);
        let high = compute_secondary_effects(
            energy * factor,
            energy * factor * MEGATON_TO_JOULES,
            &crater,
            surface,
            4.0,
        );

        prop_assert!(high.airblast_radius_km > low.airblast_radius_km);
        prop_assert!(high.thermal_radius_km > low.thermal_radius_km);
        prop_assert!(high.fireball_radius_km > low.fireball_radius_km);
        prop_assert!(high.peak_wind_speed_km_h > low.peak_wind_speed_km_h);
        prop_assert!(high.seismic_magnitude >= low.seismic_magnitude);
        prop_assert!(high.peak_decibels.is_finite());
        prop_assert_eq!(high.tsunami.is_some(), ocean);
    }
}
