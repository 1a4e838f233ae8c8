//! Atmospheric entry, fragmentation and ablation.
//!
//! A pancake-free breakup estimate in the spirit of Hills & Goda (1993):
//! the body fragments at the altitude where ram pressure first reaches its
//! tensile strength, and small bodies that break up lose mass and speed
//! before reaching the ground.

use crate::types::{SCALE_HEIGHT_M, SEA_LEVEL_AIR_DENSITY, sphere_volume};

/// Bodies at or above this diameter (m) punch through intact.
const AIRBURST_MAX_DIAMETER: f64 = 200.0;

/// Bodies below this diameter (m) suffer extra ablation.
const ABLATION_MAX_DIAMETER: f64 = 50.0;

/// Drag coefficient of a fragmenting body.
const DRAG_COEFFICIENT: f64 = 2.0;

/// Relative slack when comparing ram pressure to strength.
///
/// Above ground the breakup altitude is defined by `q == S`, so the ratio
/// lands on 1.0 up to rounding.
const RATIO_TOLERANCE: f64 = 1e-9;

/// Lower bound on the surviving mass fraction.
pub const MIN_MASS_FRACTION: f64 = 0.01;

/// Lower bound on the surviving velocity fraction.
pub const MIN_VELOCITY_FRACTION: f64 = 0.1;

/// Outcome of atmospheric passage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtmosphericEntryResult {
    /// Fraction of the pre-entry mass reaching the ground, [0.01, 1].
    pub surviving_mass_fraction: f64,
    /// Fraction of the entry speed retained at the ground, [0.1, 1].
    pub surviving_velocity_fraction: f64,
    /// True if the body broke up in the atmosphere.
    pub did_airburst: bool,
    /// Breakup altitude (km). Zero without an airburst.
    pub fragmentation_altitude_km: f64,
    /// Peak ram pressure at the breakup altitude (Pa).
    pub dynamic_pressure_pa: f64,
    /// Ram pressure over tensile strength.
    pub fragmentation_ratio: f64,
}

/// Tensile strength (Pa) for a bulk density bracket.
pub fn material_strength(density: f64) -> f64 {
    if density < 1000.0 {
        1e5 // cometary
    } else if density < 2000.0 {
        1e6 // carbonaceous
    } else if density < 3500.0 {
        5e6 // stony
    } else {
        1e7 // metallic
    }
}

/// Altitude (m) where ram pressure `½ρv²` equals `strength`.
///
/// Negative when the body never reaches its strength above sea level.
pub fn fragmentation_altitude(strength: f64, velocity: f64) -> f64 {
    -SCALE_HEIGHT_M * ((2.0 * strength) / (SEA_LEVEL_AIR_DENSITY * velocity * velocity)).ln()
}

/// Exponential atmosphere density at `altitude` (m).
pub fn air_density(altitude: f64) -> f64 {
    SEA_LEVEL_AIR_DENSITY * (-altitude / SCALE_HEIGHT_M).exp()
}

/// Estimate fragmentation and ablation losses during entry.
///
/// # Arguments
/// * `diameter` - Body diameter (m)
/// * `velocity` - Entry speed (m/s)
/// * `angle_deg` - Entry angle from horizontal (degrees)
/// * `density` - Bulk density (kg/m³)
///
/// Inputs are expected to be validated by the caller.
pub fn enter_atmosphere(
    diameter: f64,
    velocity: f64,
    _angle_deg: f64,
    density: f64,
) -> AtmosphericEntryResult {
    let strength = material_strength(density);

    // Clamp to the ground: a body too strong to break up aloft feels
    // sea-level ram pressure at most.
    let altitude = fragmentation_altitude(strength, velocity).max(0.0);
    let rho = air_density(altitude);
    let dynamic_pressure = 0.5 * rho * velocity * velocity;
    let fragmentation_ratio = dynamic_pressure / strength;

    let mut mass_fraction: f64 = 1.0;
    let mut velocity_fraction: f64 = 1.0;
    let mut airburst = false;

    if diameter < AIRBURST_MAX_DIAMETER && fragmentation_ratio >= 1.0 - RATIO_TOLERANCE {
        airburst = true;

        let excess = (fragmentation_ratio - 1.0).max(0.0);
        let ablation_factor = (-diameter / 100.0).exp();
        mass_fraction = (1.0 - ablation_factor * excess * 0.5).max(MIN_MASS_FRACTION);

        let cross_section = std::f64::consts::PI * (diameter / 2.0).powi(2);
        let drag_factor = (DRAG_COEFFICIENT * rho * cross_section)
            / (2.0 * density * sphere_volume(diameter));
        velocity_fraction =
            (1.0 - drag_factor * fragmentation_ratio * 0.3).max(MIN_VELOCITY_FRACTION);
    }

    if diameter < ABLATION_MAX_DIAMETER {
        let ablation_loss = (-diameter / 25.0).exp();
        mass_fraction *= 1.0 - ablation_loss * 0.7;
        velocity_fraction *= 1.0 - ablation_loss * 0.5;
    }

    AtmosphericEntryResult {
        surviving_mass_fraction: mass_fraction.clamp(MIN_MASS_FRACTION, 1.0),
        surviving_velocity_fraction: velocity_fraction.clamp(MIN_VELOCITY_FRACTION, 1.0),
        did_airburst: airburst,
        fragmentation_altitude_km: if airburst { altitude / 1000.0 } else { 0.0 },
        dynamic_pressure_pa: dynamic_pressure,
        fragmentation_ratio,
    }
}
