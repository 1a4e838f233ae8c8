//! Blast, thermal, seismic, wind and tsunami effects.
//!
//! Everything here is an empirical power law on the impact energy in
//! megatons. The coefficients are fixed design constants chosen to match
//! nuclear-test and impact-effects tables; they are not derived.

use crate::types::{MEGATON_TO_JOULES, SurfaceType};

use super::comparison::{earthquake_comparison, energy_comparison, wind_comparison};
use super::crater::Crater;

/// Mean ocean depth used when the caller has no better estimate (km).
pub const DEFAULT_OCEAN_DEPTH_KM: f64 = 4.0;

/// Maximum coastal run-up height (m).
pub const MAX_COASTAL_HEIGHT_M: f64 = 300.0;

/// Water depth at the shoreline for the run-up estimate (km).
const SHORE_DEPTH_KM: f64 = 0.01;

/// Reference energy for the tsunami scaling (J).
const TSUNAMI_REFERENCE_ENERGY_J: f64 = 4.2e15;

/// Widest radius over which a tsunami stays above 1 m (km).
const MAX_TSUNAMI_RADIUS_KM: f64 = 5000.0;

/// Fraction of ejecta lofted into the atmosphere.
const DUST_FRACTION: f64 = 0.1;

const KM_H_TO_MPH: f64 = 0.621371;

/// Ocean wave train raised by an ocean strike.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tsunami {
    /// Deep-water wave amplitude (m).
    pub initial_height_m: f64,
    /// Dominant wavelength (km).
    pub wavelength_km: f64,
    /// Shallow-water propagation speed (km/h).
    pub speed_km_h: f64,
    /// Green's-law amplification toward the shore.
    pub runup_factor: f64,
    /// Run-up height at the coast, capped at 300 m.
    pub coastal_height_m: f64,
    /// How far the wave floods inland (km).
    pub inundation_distance_km: f64,
    /// Radius where the wave stays above 1 m (km).
    pub effective_radius_km: f64,
}

/// Tsunami generated by an ocean impact (Ward & Asphaug 2000 form).
///
/// # Arguments
/// * `energy_megatons` - Effective impact energy (Mt TNT)
/// * `ocean_depth_km` - Water depth at the impact point
pub fn compute_tsunami(energy_megatons: f64, ocean_depth_km: f64) -> Tsunami {
    let energy_norm = energy_megatons * MEGATON_TO_JOULES / TSUNAMI_REFERENCE_ENERGY_J;
    let depth_norm = ocean_depth_km / DEFAULT_OCEAN_DEPTH_KM;

    let initial_height_m = 0.14 * energy_norm.powf(0.33) * depth_norm.powf(-0.5);
    let wavelength_km = 2.5 * energy_norm.powf(0.25);

    // Shallow-water wave: v = √(g·d), with g in km/s²
    let g_km = 9.81 / 1000.0;
    let speed_km_h = (g_km * ocean_depth_km).sqrt() * 3600.0;

    let runup_factor = (ocean_depth_km / SHORE_DEPTH_KM).powf(0.25);
    let coastal_height_m = (initial_height_m * runup_factor).min(MAX_COASTAL_HEIGHT_M);

    Tsunami {
        initial_height_m,
        wavelength_km,
        speed_km_h,
        runup_factor,
        coastal_height_m,
        inundation_distance_km: coastal_height_m * 0.3,
        effective_radius_km: (wavelength_km * 50.0).min(MAX_TSUNAMI_RADIUS_KM),
    }
}

/// Moment magnitude of the ground shock: `(2/3)·log10(E) − 3.2`, floored at 0.
pub fn seismic_magnitude(kinetic_energy_j: f64) -> f64 {
    if kinetic_energy_j <= 0.0 {
        return 0.0;
    }
    ((2.0 / 3.0) * kinetic_energy_j.log10() - 3.2).max(0.0)
}

/// Radius over which shaking is damaging (km). Zero below magnitude 6.
pub fn seismic_radius(magnitude: f64) -> f64 {
    if magnitude > 6.0 {
        10f64.powf(magnitude - 4.0) * 10.0
    } else {
        0.0
    }
}

/// Everything derived from energy and crater size.
#[derive(Clone, Debug, PartialEq)]
pub struct SecondaryEffects {
    /// Moment magnitude of the ground shock.
    pub seismic_magnitude: f64,
    /// Damaging-shaking radius (km).
    pub seismic_radius_km: f64,
    /// Distance at which shaking is felt (km).
    pub felt_distance_km: f64,

    /// 5 psi overpressure radius (km).
    pub airblast_radius_km: f64,
    /// Third-degree burn radius (km).
    pub thermal_radius_km: f64,
    pub fireball_radius_km: f64,
    pub fireball_diameter_km: f64,
    /// Ionizing radiation radius (km).
    pub radiation_radius_km: f64,

    pub burn_radius_3rd_km: f64,
    pub burn_radius_2nd_km: f64,
    pub burn_radius_1st_km: f64,

    /// Peak overpressure (psi).
    pub peak_overpressure_psi: f64,
    /// Radius of >20 psi (km).
    pub building_collapse_radius_km: f64,
    /// Radius of >1 psi (km).
    pub glass_breakage_radius_km: f64,
    /// Peak sound level (dB), floored at 0.
    pub peak_decibels: f64,

    pub peak_wind_speed_km_h: f64,
    pub peak_wind_speed_mph: f64,
    /// Radius of flattened forest (km).
    pub tree_damage_radius_km: f64,

    /// Excavated volume (m³).
    pub ejecta_volume_m3: f64,
    /// Ejecta lofted into the atmosphere (m³).
    pub dust_in_atmosphere_m3: f64,

    /// Present only for ocean strikes.
    pub tsunami: Option<Tsunami>,

    pub energy_comparison: String,
    pub wind_comparison: String,
    pub seismic_comparison: &'static str,
}

/// Derive secondary effects from the impact energy and crater.
///
/// # Arguments
/// * `energy_megatons` - Effective impact energy (Mt TNT)
/// * `kinetic_energy_j` - Kinetic energy before angle coupling (J), drives the seismic estimate
/// * `crater` - Crater geometry
/// * `surface` - Target surface type
/// * `ocean_depth_km` - Water depth for ocean strikes
pub fn compute_secondary_effects(
    energy_megatons: f64,
    kinetic_energy_j: f64,
    crater: &Crater,
    surface: SurfaceType,
    ocean_depth_km: f64,
) -> SecondaryEffects {
    let e = energy_megatons.max(0.0);

    let seismic_magnitude = seismic_magnitude(kinetic_energy_j);

    let airblast_radius_km = 2.2 * e.cbrt();
    let thermal_radius_km = 1.9 * e.powf(0.41);
    let fireball_radius_km = 0.14 * e.powf(0.4);
    let radiation_radius_km = 1.5 * e.powf(0.38);

    let (peak_overpressure_psi, peak_decibels) = if airblast_radius_km > 0.0 {
        let overpressure = (e / airblast_radius_km).powf(0.7) * 100.0;
        let decibels = 170.0 + 10.0 * (e / (airblast_radius_km * airblast_radius_km)).log10();
        (overpressure, decibels.max(0.0))
    } else {
        (0.0, 0.0)
    };

    let peak_wind_speed_km_h = e.powf(0.35) * 450.0;

    let ejecta_volume_m3 = std::f64::consts::PI
        * (crater.diameter_km / 2.0).powi(2)
        * crater.depth_km
        * 1e9;

    let tsunami = surface
        .is_ocean()
        .then(|| compute_tsunami(e, ocean_depth_km));

    SecondaryEffects {
        seismic_magnitude,
        seismic_radius_km: seismic_radius(seismic_magnitude),
        felt_distance_km: seismic_magnitude * 100.0,
        airblast_radius_km,
        thermal_radius_km,
        fireball_radius_km,
        fireball_diameter_km: fireball_radius_km * 2.0,
        radiation_radius_km,
        burn_radius_3rd_km: thermal_radius_km,
        burn_radius_2nd_km: thermal_radius_km * 1.4,
        burn_radius_1st_km: thermal_radius_km * 1.8,
        peak_overpressure_psi,
        building_collapse_radius_km: e.powf(0.33) * 1.5,
        glass_breakage_radius_km: airblast_radius_km * 2.5,
        peak_decibels,
        peak_wind_speed_km_h,
        peak_wind_speed_mph: peak_wind_speed_km_h * KM_H_TO_MPH,
        tree_damage_radius_km: e.powf(0.33) * 1.8,
        ejecta_volume_m3,
        dust_in_atmosphere_m3: ejecta_volume_m3 * DUST_FRACTION,
        tsunami,
        energy_comparison: energy_comparison(e),
        wind_comparison: wind_comparison(peak_wind_speed_km_h),
        seismic_comparison: earthquake_comparison(seismic_magnitude),
    }
}
