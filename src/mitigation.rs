//! Deflection strategies applied to an incoming asteroid.
//!
//! Each strategy nudges the impactor's speed or approach geometry and
//! returns a modified copy. The model is coarse: a strategy
//! is a parameter delta, not a simulated mission.

use crate::types::{AsteroidParameters, ImpactError};

/// A deflection attempt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MitigationStrategy {
    /// Spacecraft rammed into the asteroid.
    KineticImpactor {
        /// Change in speed (km/s).
        delta_v_km_s: f64,
        /// Heading change (degrees).
        azimuth_change_deg: f64,
    },
    /// Long-duration gravitational tug.
    GravityTractor {
        /// Heading change (degrees).
        azimuth_change_deg: f64,
        /// Entry angle change (degrees).
        angle_change_deg: f64,
    },
    /// Standoff nuclear detonation.
    NuclearDevice {
        /// Change in speed (km/s).
        delta_v_km_s: f64,
    },
}

impl MitigationStrategy {
    /// DART-like kinetic impactor.
    pub fn kinetic_impactor() -> Self {
        Self::KineticImpactor {
            delta_v_km_s: 0.01,
            azimuth_change_deg: 1.0,
        }
    }

    pub fn gravity_tractor() -> Self {
        Self::GravityTractor {
            azimuth_change_deg: 0.5,
            angle_change_deg: 0.5,
        }
    }

    pub fn nuclear_device() -> Self {
        Self::NuclearDevice { delta_v_km_s: 0.1 }
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::KineticImpactor { .. } => "Kinetic Impactor",
            Self::GravityTractor { .. } => "Gravity Tractor",
            Self::NuclearDevice { .. } => "Nuclear Device",
        }
    }
}

/// Apply a strategy and return the modified asteroid.
///
/// The result is validated like any other input, so a strategy that pushes
/// the entry angle past vertical is reported instead of clamped.
pub fn apply_mitigation(
    asteroid: &AsteroidParameters,
    strategy: &MitigationStrategy,
) -> Result<AsteroidParameters, ImpactError> {
    let mut modified = *asteroid;

    match *strategy {
        MitigationStrategy::KineticImpactor {
            delta_v_km_s,
            azimuth_change_deg,
        } => {
            modified.velocity_km_s += delta_v_km_s;
            modified.azimuth_deg += azimuth_change_deg;
        }
        MitigationStrategy::GravityTractor {
            azimuth_change_deg,
            angle_change_deg,
        } => {
            modified.azimuth_deg += azimuth_change_deg;
            modified.impact_angle_deg += angle_change_deg;
        }
        MitigationStrategy::NuclearDevice { delta_v_km_s } => {
            modified.velocity_km_s += delta_v_km_s;
        }
    }

    modified.azimuth_deg = modified.azimuth_deg.rem_euclid(360.0);
    modified.validate()?;
    Ok(modified)
}
