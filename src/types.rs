//! Core impact parameter types and physical constants.

use bevy::math::DVec3;

/// Physical constants (SI units unless noted)

/// Gravitational constant (m³·kg⁻¹·s⁻²)
pub const G: f64 = 6.67430e-11;

/// Earth mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth mass in kilograms
pub const EARTH_MASS: f64 = 5.972e24;

/// Surface gravity (m/s²)
pub const EARTH_GRAVITY: f64 = 9.81;

/// Earth escape velocity (km/s). Slowest possible arrival speed for an impactor.
pub const ESCAPE_VELOCITY_KM_S: f64 = 11.2;

/// Sea-level air density (kg/m³)
pub const SEA_LEVEL_AIR_DENSITY: f64 = 1.225;

/// Atmospheric scale height in meters
pub const SCALE_HEIGHT_M: f64 = 8500.0;

/// One megaton of TNT in joules
pub const MEGATON_TO_JOULES: f64 = 4.184e15;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Default distance at which an approach trajectory starts (km).
pub const DEFAULT_START_DISTANCE_KM: f64 = 1_000_000.0;

/// Rejected input at one of the public entry points.
///
/// Every variant carries the offending value so callers can surface it.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ImpactError {
    #[error("invalid diameter: {0} m (must be positive and finite)")]
    InvalidDiameter(f64),

    #[error("invalid velocity: {0} km/s (must be finite, at least 11.2 km/s)")]
    InvalidVelocity(f64),

    #[error("invalid density: {0} kg/m³ (must be positive and finite)")]
    InvalidDensity(f64),

    #[error("invalid impact angle: {0}° (must be in (0, 90])")]
    InvalidAngle(f64),

    #[error("invalid azimuth: {0}° (must be finite)")]
    InvalidAzimuth(f64),

    #[error("invalid start distance: {0} km (must be positive and finite)")]
    InvalidStartDistance(f64),

    #[error("invalid latitude: {0}° (must be in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("invalid longitude: {0}° (must be in [-180, 180])")]
    InvalidLongitude(f64),

    #[error("invalid ocean depth: {0} km (must be positive and finite)")]
    InvalidOceanDepth(f64),

    #[error("trajectory needs at least one step")]
    InvalidSteps,

    #[error("impact energy overflows for a {diameter_m} m body at {velocity_km_s} km/s")]
    EnergyOverflow { diameter_m: f64, velocity_km_s: f64 },
}

fn positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Bulk composition of an impactor, used to pick a representative density.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Composition {
    /// Cometary ice.
    Icy,
    /// C-type rubble.
    Carbonaceous,
    /// S-type stony body.
    #[default]
    Rocky,
    /// M-type metallic body.
    Iron,
}

impl Composition {
    /// All compositions, lightest first.
    pub const ALL: [Composition; 4] = [
        Composition::Icy,
        Composition::Carbonaceous,
        Composition::Rocky,
        Composition::Iron,
    ];

    /// Typical bulk density (kg/m³).
    pub fn density_kg_m3(self) -> f64 {
        match self {
            Composition::Icy => 500.0,
            Composition::Carbonaceous => 2000.0,
            Composition::Rocky => 3000.0,
            Composition::Iron => 8000.0,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Composition::Icy => "Icy",
            Composition::Carbonaceous => "Carbonaceous",
            Composition::Rocky => "Rocky",
            Composition::Iron => "Iron",
        }
    }
}

/// Pre-entry impactor parameters.
///
/// Owned by the caller and never mutated by the physics core.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsteroidParameters {
    /// Diameter in meters.
    pub diameter_m: f64,
    /// Speed at atmospheric entry (km/s).
    pub velocity_km_s: f64,
    /// Impact angle measured from horizontal (degrees, (0, 90]).
    pub impact_angle_deg: f64,
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
    /// Approach heading (degrees). Only used for trajectory generation.
    pub azimuth_deg: f64,
    /// Distance from which the approach trajectory starts (km).
    pub start_distance_km: f64,
}

impl Default for AsteroidParameters {
    fn default() -> Self {
        Self {
            diameter_m: 100.0,
            velocity_km_s: 20.0,
            impact_angle_deg: 45.0,
            density_kg_m3: Composition::Rocky.density_kg_m3(),
            azimuth_deg: 0.0,
            start_distance_km: DEFAULT_START_DISTANCE_KM,
        }
    }
}

impl AsteroidParameters {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !positive_finite(self.diameter_m) {
            return Err(ImpactError::InvalidDiameter(self.diameter_m));
        }
        if !(self.velocity_km_s.is_finite() && self.velocity_km_s >= ESCAPE_VELOCITY_KM_S) {
            return Err(ImpactError::InvalidVelocity(self.velocity_km_s));
        }
        if !positive_finite(self.density_kg_m3) {
            return Err(ImpactError::InvalidDensity(self.density_kg_m3));
        }
        if !(self.impact_angle_deg > 0.0 && self.impact_angle_deg <= 90.0) {
            return Err(ImpactError::InvalidAngle(self.impact_angle_deg));
        }
        if !self.azimuth_deg.is_finite() {
            return Err(ImpactError::InvalidAzimuth(self.azimuth_deg));
        }
        if !positive_finite(self.start_distance_km) {
            return Err(ImpactError::InvalidStartDistance(self.start_distance_km));
        }
        Ok(())
    }

    /// Replace the density with the typical value for a composition.
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.density_kg_m3 = composition.density_kg_m3();
        self
    }

    /// Volume of the equivalent sphere (m³).
    pub fn volume_m3(&self) -> f64 {
        sphere_volume(self.diameter_m)
    }

    /// Pre-entry mass (kg).
    pub fn mass_kg(&self) -> f64 {
        self.volume_m3() * self.density_kg_m3
    }

    /// Entry speed in m/s.
    pub fn velocity_m_s(&self) -> f64 {
        self.velocity_km_s * 1000.0
    }

    /// Impact angle in radians.
    pub fn angle_rad(&self) -> f64 {
        self.impact_angle_deg * DEG_TO_RAD
    }
}

/// Volume of a sphere with the given diameter.
pub fn sphere_volume(diameter: f64) -> f64 {
    let r = diameter / 2.0;
    (4.0 / 3.0) * std::f64::consts::PI * r * r * r
}

/// Kind of surface at the strike point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceType {
    Land,
    Ocean,
}

impl SurfaceType {
    /// Returns true for ocean strikes.
    pub fn is_ocean(self) -> bool {
        matches!(self, SurfaceType::Ocean)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceType::Land => "Land",
            SurfaceType::Ocean => "Ocean",
        }
    }
}

/// Geographic strike point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpactLocation {
    /// Latitude in degrees, [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, [-180, 180].
    pub longitude_deg: f64,
}

impl Default for ImpactLocation {
    /// New York City.
    fn default() -> Self {
        Self::new(40.7128, -74.0060)
    }
}

impl ImpactLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Check latitude and longitude ranges.
    pub fn validate(&self) -> Result<(), ImpactError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(ImpactError::InvalidLatitude(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(ImpactError::InvalidLongitude(self.longitude_deg));
        }
        Ok(())
    }

    /// Land or ocean, according to the coarse continental mask.
    pub fn surface_type(&self) -> SurfaceType {
        crate::physics::classify_surface(self.latitude_deg, self.longitude_deg)
    }

    /// Surface point in the scene frame (km).
    pub fn to_cartesian(&self) -> DVec3 {
        crate::trajectory::lat_lon_to_cartesian(
            self.latitude_deg,
            self.longitude_deg,
            EARTH_RADIUS_KM,
        )
    }
}
