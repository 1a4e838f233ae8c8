//! Test utilities for impact physics tests.
//!
//! Provides fixtures for common impactors and strike points, and assertions
//! for the invariants every computed result must satisfy.

use crate::physics::{
    ImpactEffects, MIN_CRATER_TO_PROJECTILE, MIN_MASS_FRACTION, MIN_VELOCITY_FRACTION,
};
use crate::types::AsteroidParameters;

/// Fixtures for creating test impactors and locations.
pub mod fixtures {
    use crate::types::{AsteroidParameters, Composition, ImpactLocation};

    /// 100 m stony body at 20 km/s, 45°.
    pub fn hundred_meter_rock() -> AsteroidParameters {
        AsteroidParameters {
            diameter_m: 100.0,
            velocity_km_s: 20.0,
            impact_angle_deg: 45.0,
            density_kg_m3: 3000.0,
            ..Default::default()
        }
    }

    /// Chelyabinsk-scale body: 15 m at 19 km/s, shallow entry.
    pub fn chelyabinsk() -> AsteroidParameters {
        AsteroidParameters {
            diameter_m: 15.0,
            velocity_km_s: 19.0,
            impact_angle_deg: 20.0,
            ..hundred_meter_rock()
        }
    }

    /// Chicxulub-scale body: 10 km at 20 km/s.
    pub fn dinosaur_killer() -> AsteroidParameters {
        AsteroidParameters {
            diameter_m: 10_000.0,
            ..hundred_meter_rock()
        }
    }

    /// Iron body of the given diameter.
    pub fn iron(diameter_m: f64) -> AsteroidParameters {
        AsteroidParameters {
            diameter_m,
            ..hundred_meter_rock()
        }
        .with_composition(Composition::Iron)
    }

    pub fn new_york() -> ImpactLocation {
        ImpactLocation::new(40.7128, -74.0060)
    }

    pub fn central_pacific() -> ImpactLocation {
        ImpactLocation::new(0.0, -160.0)
    }

    pub fn sahara() -> ImpactLocation {
        ImpactLocation::new(23.0, 12.0)
    }
}

/// Assertions for verifying physical invariants.
pub mod assertions {
    use super::*;

    /// Assert the floors and ranges every result must respect.
    ///
    /// # Panics
    /// Panics on the first violated invariant.
    pub fn assert_physically_consistent(asteroid: &AsteroidParameters, fx: &ImpactEffects) {
        let entry = &fx.atmospheric_entry;
        assert!(
            (MIN_MASS_FRACTION..=1.0).contains(&entry.surviving_mass_fraction),
            "mass fraction {} out of range",
            entry.surviving_mass_fraction
        );
        assert!(
            (MIN_VELOCITY_FRACTION..=1.0).contains(&entry.surviving_velocity_fraction),
            "velocity fraction {} out of range",
            entry.surviving_velocity_fraction
        );

        let floor_km = MIN_CRATER_TO_PROJECTILE * asteroid.diameter_m / 1000.0;
        assert!(
            fx.crater_diameter_km() >= floor_km,
            "crater {} km below floor {} km",
            fx.crater_diameter_km(),
            floor_km
        );

        assert!(fx.energy_megatons.is_finite() && fx.energy_megatons > 0.0);
        assert!(fx.seismic_magnitude().is_finite() && fx.seismic_magnitude() >= 0.0);
        assert!(fx.secondary.peak_decibels.is_finite() && fx.secondary.peak_decibels >= 0.0);
        assert_eq!(fx.tsunami().is_some(), fx.surface_type.is_ocean());
    }

    /// Assert that `smaller <= larger` for every monotone output.
    ///
    /// # Panics
    /// Panics naming the first output that decreased.
    pub fn assert_not_weaker(smaller: &ImpactEffects, larger: &ImpactEffects) {
        let pairs = [
            ("energy", smaller.energy_megatons, larger.energy_megatons),
            ("crater", smaller.crater_diameter_km(), larger.crater_diameter_km()),
            ("airblast", smaller.airblast_radius_km(), larger.airblast_radius_km()),
            ("seismic", smaller.seismic_magnitude(), larger.seismic_magnitude()),
        ];
        for (name, a, b) in pairs {
            assert!(b >= a, "{name} decreased: {a} -> {b}");
        }
    }
}
