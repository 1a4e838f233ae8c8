//! Transient crater size from pi-group scaling.
//!
//! Schmidt-Holsapple gravity-regime scaling with the coefficients of
//! Collins et al. (2005):
//!
//! D = K1 · L^α · (ρp/ρt)^β · Fr^μ · sin(θ)^(1/3)
//!
//! where `Fr = v² / (g·L)` is the Froude number of the projectile.

use crate::types::{EARTH_GRAVITY, SurfaceType};

/// Velocity coupling exponent.
pub const MU: f64 = 0.41;

/// Size coupling exponent.
pub const NU: f64 = 0.41;

/// Crater diameter never falls below this multiple of the projectile size.
pub const MIN_CRATER_TO_PROJECTILE: f64 = 15.0;

/// Depth-to-diameter ratio of a complex crater.
const DEPTH_RATIO: f64 = 5.0;

/// Final crater geometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crater {
    /// Rim-to-rim diameter (km).
    pub diameter_km: f64,
    /// Depth below the pre-impact surface (km).
    pub depth_km: f64,
    /// Paraboloid bowl volume (m³).
    pub volume_m3: f64,
}

/// Bulk density of the target layer (kg/m³).
pub fn target_density(surface: SurfaceType) -> f64 {
    match surface {
        SurfaceType::Ocean => 1000.0,
        SurfaceType::Land => 2500.0,
    }
}

/// Scaling coefficient `K1` for the target.
pub fn scaling_coefficient(surface: SurfaceType) -> f64 {
    match surface {
        SurfaceType::Ocean => 1.88,
        SurfaceType::Land => 1.161,
    }
}

/// Froude number `v² / (g·L)`.
pub fn froude_number(velocity: f64, diameter: f64) -> f64 {
    velocity * velocity / (EARTH_GRAVITY * diameter)
}

/// Compute crater dimensions.
///
/// # Arguments
/// * `diameter` - Projectile diameter (m)
/// * `velocity` - Effective impact speed after atmospheric losses (m/s)
/// * `projectile_density` - Projectile bulk density (kg/m³)
/// * `surface` - Target surface type
/// * `angle_rad` - Impact angle from horizontal (radians)
pub fn compute_crater(
    diameter: f64,
    velocity: f64,
    projectile_density: f64,
    surface: SurfaceType,
    angle_rad: f64,
) -> Crater {
    let alpha = (2.0 * MU + NU) / (3.0 * NU);
    let beta = 2.0 * NU / 3.0;

    let density_ratio = projectile_density / target_density(surface);
    let angle_factor = angle_rad.sin().cbrt();

    let scaled_m = scaling_coefficient(surface)
        * diameter.powf(alpha)
        * density_ratio.powf(beta)
        * froude_number(velocity, diameter).powf(MU)
        * angle_factor;

    let minimum_m = diameter * MIN_CRATER_TO_PROJECTILE;
    let diameter_km = scaled_m.max(minimum_m) / 1000.0;
    let depth_km = diameter_km / DEPTH_RATIO;

    // Bowl approximation: (π/4)·r²·h
    let radius_m = diameter_km * 1000.0 / 2.0;
    let volume_m3 = std::f64::consts::FRAC_PI_4 * radius_m * radius_m * depth_km * 1000.0;

    Crater {
        diameter_km,
        depth_km,
        volume_m3,
    }
}
