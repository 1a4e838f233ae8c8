//! Impact physics engine.
//!
//! A pure pipeline from asteroid parameters and a strike point to a
//! consistent set of effect estimates:
//!
//! atmospheric entry → energy/location → crater scaling → secondary effects
//!
//! Nothing here holds state. Identical inputs always produce bit-identical
//! outputs, so callers are free to recompute on every parameter change.

mod atmosphere;
mod comparison;
mod crater;
mod energy;
mod secondary;

#[cfg(test)]
mod proptest_physics;

use bevy::prelude::*;

pub use atmosphere::{
    AtmosphericEntryResult, MIN_MASS_FRACTION, MIN_VELOCITY_FRACTION, air_density,
    enter_atmosphere, fragmentation_altitude, material_strength,
};
pub use comparison::{EnergyClass, earthquake_comparison, energy_comparison, wind_comparison};
pub use crater::{Crater, MIN_CRATER_TO_PROJECTILE, compute_crater, froude_number};
pub use energy::{EnergyBudget, classify_and_compute_energy, classify_surface, impact_efficiency};
pub use secondary::{
    DEFAULT_OCEAN_DEPTH_KM, MAX_COASTAL_HEIGHT_M, SecondaryEffects, Tsunami,
    compute_secondary_effects, compute_tsunami, seismic_magnitude,
};

use crate::types::{AsteroidParameters, ImpactError, ImpactLocation, MEGATON_TO_JOULES, SurfaceType};

/// Tunable inputs that are not properties of the asteroid itself.
#[derive(Resource, Clone, Debug)]
pub struct ImpactConfig {
    /// Water depth assumed at ocean strike points (km).
    pub ocean_depth_km: f64,
    /// Number of segments in a generated approach trajectory.
    pub trajectory_steps: usize,
}

impl Default for ImpactConfig {
    fn default() -> Self {
        Self {
            ocean_depth_km: DEFAULT_OCEAN_DEPTH_KM,
            trajectory_steps: crate::trajectory::DEFAULT_TRAJECTORY_STEPS,
        }
    }
}

impl ImpactConfig {
    /// Reject settings the physics cannot use.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !(self.ocean_depth_km.is_finite() && self.ocean_depth_km > 0.0) {
            return Err(ImpactError::InvalidOceanDepth(self.ocean_depth_km));
        }
        if self.trajectory_steps == 0 {
            return Err(ImpactError::InvalidSteps);
        }
        Ok(())
    }
}

/// Complete set of effect estimates for one impact.
#[derive(Clone, Debug, PartialEq)]
pub struct ImpactEffects {
    /// Effective impact energy (Mt TNT).
    pub energy_megatons: f64,
    /// Kinetic energy of the surviving body before angle coupling (J).
    pub kinetic_energy_j: f64,
    pub surface_type: SurfaceType,
    pub atmospheric_entry: AtmosphericEntryResult,
    /// Oblique-impact coupling factor.
    pub impact_efficiency: f64,
    pub impact_angle_deg: f64,
    /// Mass reaching the ground (kg).
    pub effective_mass_kg: f64,
    /// Speed at the ground (km/s).
    pub effective_velocity_km_s: f64,
    pub crater: Crater,
    pub secondary: SecondaryEffects,
}

impl ImpactEffects {
    pub fn crater_diameter_km(&self) -> f64 {
        self.crater.diameter_km
    }

    pub fn airblast_radius_km(&self) -> f64 {
        self.secondary.airblast_radius_km
    }

    pub fn seismic_magnitude(&self) -> f64 {
        self.secondary.seismic_magnitude
    }

    pub fn tsunami(&self) -> Option<&Tsunami> {
        self.secondary.tsunami.as_ref()
    }

    /// Coastal run-up height (m), or 0 for land strikes.
    pub fn tsunami_height_m(&self) -> f64 {
        self.tsunami().map_or(0.0, |t| t.coastal_height_m)
    }

    /// Radius where the tsunami stays above 1 m (km), or 0 for land strikes.
    pub fn tsunami_radius_km(&self) -> f64 {
        self.tsunami().map_or(0.0, |t| t.effective_radius_km)
    }

    pub fn energy_class(&self) -> EnergyClass {
        EnergyClass::from_megatons(self.energy_megatons)
    }
}

/// Compute all impact effects with the default configuration.
///
/// Returns an error if any asteroid or location field is out of range.
pub fn compute_impact_effects(
    asteroid: &AsteroidParameters,
    location: &ImpactLocation,
) -> Result<ImpactEffects, ImpactError> {
    compute_impact_effects_with(asteroid, location, &ImpactConfig::default())
}

/// Compute all impact effects.
///
/// # Arguments
/// * `asteroid` - Pre-entry impactor parameters
/// * `location` - Strike point
/// * `config` - Ocean depth and other non-asteroid inputs
pub fn compute_impact_effects_with(
    asteroid: &AsteroidParameters,
    location: &ImpactLocation,
    config: &ImpactConfig,
) -> Result<ImpactEffects, ImpactError> {
    asteroid.validate()?;
    location.validate()?;
    config.validate()?;

    let budget = classify_and_compute_energy(asteroid, location);
    if !budget.effective_energy_j.is_finite() {
        return Err(ImpactError::EnergyOverflow {
            diameter_m: asteroid.diameter_m,
            velocity_km_s: asteroid.velocity_km_s,
        });
    }
    let energy_megatons = budget.effective_energy_j / MEGATON_TO_JOULES;

    let crater = compute_crater(
        asteroid.diameter_m,
        budget.effective_velocity_m_s,
        asteroid.density_kg_m3,
        budget.surface_type,
        asteroid.angle_rad(),
    );

    let secondary = compute_secondary_effects(
        energy_megatons,
        budget.kinetic_energy_j,
        &crater,
        budget.surface_type,
        config.ocean_depth_km,
    );

    Ok(ImpactEffects {
        energy_megatons,
        kinetic_energy_j: budget.kinetic_energy_j,
        surface_type: budget.surface_type,
        atmospheric_entry: budget.entry,
        impact_efficiency: budget.impact_efficiency,
        impact_angle_deg: asteroid.impact_angle_deg,
        effective_mass_kg: budget.effective_mass_kg,
        effective_velocity_km_s: budget.effective_velocity_m_s / 1000.0,
        crater,
        secondary,
    })
}
