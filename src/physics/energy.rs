//! Strike-point classification and effective impact energy.

use crate::types::{AsteroidParameters, ImpactLocation, SurfaceType};

use super::atmosphere::{AtmosphericEntryResult, enter_atmosphere};

/// Axis-aligned lat/lon box, open on every side.
#[derive(Clone, Copy, Debug)]
struct LandBox {
    lat: (f64, f64),
    lon: (f64, f64),
}

impl LandBox {
    const fn new(lat: (f64, f64), lon: (f64, f64)) -> Self {
        Self { lat, lon }
    }

    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude > self.lat.0
            && latitude < self.lat.1
            && longitude > self.lon.0
            && longitude < self.lon.1
    }
}

/// Continental bounding boxes.
///
/// This is a coarse mask, not a coastline lookup: the Gulf of Mexico and
/// most of the Mediterranean count as land.
const LAND_BOXES: [LandBox; 6] = [
    LandBox::new((15.0, 75.0), (-170.0, -50.0)), // North America
    LandBox::new((-55.0, 15.0), (-82.0, -35.0)), // South America
    LandBox::new((35.0, 70.0), (-10.0, 60.0)),   // Europe
    LandBox::new((-35.0, 37.0), (-20.0, 55.0)),  // Africa
    LandBox::new((-10.0, 75.0), (25.0, 180.0)),  // Asia
    LandBox::new((-45.0, -10.0), (110.0, 155.0)), // Australia
];

/// Classify a strike point as land or ocean.
pub fn classify_surface(latitude_deg: f64, longitude_deg: f64) -> SurfaceType {
    if LAND_BOXES
        .iter()
        .any(|b| b.contains(latitude_deg, longitude_deg))
    {
        SurfaceType::Land
    } else {
        SurfaceType::Ocean
    }
}

/// Cratering efficiency for an oblique strike: `sin(θ)^(1/3)`.
pub fn impact_efficiency(angle_rad: f64) -> f64 {
    angle_rad.sin().cbrt()
}

/// Energy delivered to the surface after atmospheric losses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyBudget {
    /// Land or ocean at the strike point.
    pub surface_type: SurfaceType,
    /// Atmospheric passage outcome.
    pub entry: AtmosphericEntryResult,
    /// Mass reaching the surface (kg).
    pub effective_mass_kg: f64,
    /// Speed at the surface (m/s).
    pub effective_velocity_m_s: f64,
    /// ½·m·v² of the surviving body (J).
    pub kinetic_energy_j: f64,
    /// Oblique-impact coupling factor, (0, 1].
    pub impact_efficiency: f64,
    /// Kinetic energy scaled by impact efficiency (J).
    pub effective_energy_j: f64,
}

/// Classify the strike point and compute the energy reaching it.
///
/// Inputs are expected to be validated by the caller.
pub fn classify_and_compute_energy(
    asteroid: &AsteroidParameters,
    location: &ImpactLocation,
) -> EnergyBudget {
    let surface_type = location.surface_type();

    let velocity = asteroid.velocity_m_s();
    let entry = enter_atmosphere(
        asteroid.diameter_m,
        velocity,
        asteroid.impact_angle_deg,
        asteroid.density_kg_m3,
    );

    let effective_mass_kg = asteroid.mass_kg() * entry.surviving_mass_fraction;
    let effective_velocity_m_s = velocity * entry.surviving_velocity_fraction;
    let kinetic_energy_j =
        0.5 * effective_mass_kg * effective_velocity_m_s * effective_velocity_m_s;

    let impact_efficiency = impact_efficiency(asteroid.angle_rad());

    EnergyBudget {
        surface_type,
        entry,
        effective_mass_kg,
        effective_velocity_m_s,
        kinetic_energy_j,
        impact_efficiency,
        effective_energy_j: kinetic_energy_j * impact_efficiency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_land_points() {
        // New York, Paris, Nairobi, Beijing, Sydney, São Paulo
        for (lat, lon) in [
            (40.7128, -74.0060),
            (48.8566, 2.3522),
            (-1.2921, 36.8219),
            (39.9042, 116.4074),
            (-33.8688, 151.2093),
            (-23.5505, -46.6333),
        ] {
            assert_eq!(
                classify_surface(lat, lon),
                SurfaceType::Land,
                "({lat}, {lon}) should be land"
            );
        }
    }

    #[test]
    fn test_known_ocean_points() {
        // Central Pacific, South Atlantic, southern Indian Ocean, Antarctic
        for (lat, lon) in [(0.0, -160.0), (-30.0, -25.0), (-40.0, 80.0), (-80.0, 0.0)] {
            assert_eq!(
                classify_surface(lat, lon),
                SurfaceType::Ocean,
                "({lat}, {lon}) should be ocean"
            );
        }
    }

    #[test]
    fn test_box_edges_are_open() {
        // Exactly on the North America southern edge, outside every other box
        assert_eq!(classify_surface(15.0, -100.0), SurfaceType::Ocean);
        assert_eq!(classify_surface(15.0001, -100.0), SurfaceType::Land);
    }

    #[test]
    fn test_efficiency_by_angle() {
        assert!((impact_efficiency(std::f64::consts::FRAC_PI_2) - 1.0).abs() < 1e-12);
        let shallow = impact_efficiency(15f64.to_radians());
        assert!(shallow < 1.0 && shallow > 0.6);
    }

    #[test]
    fn test_energy_budget_for_intact_body() {
        let asteroid = AsteroidParameters {
            diameter_m: 1000.0,
            impact_angle_deg: 90.0,
            ..Default::default()
        };
        let budget = classify_and_compute_energy(&asteroid, &ImpactLocation::default());

        let expected = 0.5 * asteroid.mass_kg() * asteroid.velocity_m_s().powi(2);
        assert!((budget.kinetic_energy_j - expected).abs() / expected < 1e-12);
        assert!((budget.effective_energy_j - expected).abs() / expected < 1e-12);
        assert_eq!(budget.surface_type, SurfaceType::Land);
    }
}
