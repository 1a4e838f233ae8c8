//! Common test utilities for integration tests.

use impactsim::types::{AsteroidParameters, ImpactLocation};

/// The reference impactor: 100 m stony body at 20 km/s, 45°.
pub fn reference_asteroid() -> AsteroidParameters {
    AsteroidParameters {
        diameter_m: 100.0,
        velocity_km_s: 20.0,
        impact_angle_deg: 45.0,
        density_kg_m3: 3000.0,
        ..Default::default()
    }
}

/// Same impactor with a different entry angle.
pub fn at_angle(impact_angle_deg: f64) -> AsteroidParameters {
    AsteroidParameters {
        impact_angle_deg,
        ..reference_asteroid()
    }
}

pub fn new_york() -> ImpactLocation {
    ImpactLocation::new(40.7128, -74.0060)
}

pub fn pacific() -> ImpactLocation {
    ImpactLocation::new(0.0, -160.0)
}

/// Relative difference between two positive quantities.
pub fn relative_difference(a: f64, b: f64) -> f64 {
    ((a - b) / a.abs().max(b.abs())).abs()
}
