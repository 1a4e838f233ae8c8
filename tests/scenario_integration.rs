//! Integration tests for the preset catalogue.

use impactsim::compute_impact_effects;
use impactsim::scenarios::{PRESETS, clean_asteroid_name, presets_by_distance};
use impactsim::types::{AsteroidParameters, ImpactLocation};

#[test]
fn test_presets_exist() {
    assert!(!PRESETS.is_empty(), "Should have at least one preset defined");
}

#[test]
fn test_preset_unique_names() {
    let mut names: Vec<&str> = PRESETS.iter().map(|p| p.name).collect();
    names.sort();

    for i in 1..names.len() {
        assert_ne!(names[i - 1], names[i], "Duplicate preset name: {}", names[i]);
    }
}

#[test]
fn test_preset_sizes_ordered() {
    for preset in PRESETS {
        assert!(
            preset.diameter_min_m > 0.0 && preset.diameter_min_m <= preset.diameter_max_m,
            "Preset '{}' has an inverted size range",
            preset.name
        );
    }
}

#[test]
fn test_preset_dates_well_formed() {
    for preset in PRESETS {
        let parts: Vec<&str> = preset.close_approach_date.split('-').collect();
        assert_eq!(parts.len(), 3, "Preset '{}' date is not YYYY-MM-DD", preset.name);
        assert!(parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit())));
    }
}

#[test]
fn test_every_preset_can_be_simulated() {
    let base = AsteroidParameters::default();
    let location = ImpactLocation::default();

    for preset in PRESETS {
        let asteroid = preset.to_parameters(&base);
        let fx = compute_impact_effects(&asteroid, &location)
            .unwrap_or_else(|e| panic!("Preset '{}' failed: {e}", preset.name));
        assert!(fx.energy_megatons > 0.0);
    }
}

#[test]
fn test_closest_preset_is_hazardous() {
    let closest = presets_by_distance()[0];
    assert!(closest.potentially_hazardous);
}

#[test]
fn test_preset_names_are_clean() {
    for preset in PRESETS {
        assert_eq!(clean_asteroid_name(preset.name), preset.name);
    }
}
