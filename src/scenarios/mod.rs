//! Near-Earth-object presets.
//!
//! Presets seed the impact scenario with the size and speed of a known
//! asteroid. They only replace what the catalogue knows about; the strike
//! point, angle and composition stay under the user's control.

pub mod presets;

use bevy::prelude::*;

use crate::simulation::ImpactScenario;
use crate::types::{AsteroidParameters, ESCAPE_VELOCITY_KM_S};

pub use presets::PRESETS;

/// Catalogue entry for a near-Earth object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeoPreset {
    /// Catalogue identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Lower size estimate (m).
    pub diameter_min_m: f64,
    /// Upper size estimate (m).
    pub diameter_max_m: f64,
    /// Speed relative to Earth at close approach (km/s).
    pub velocity_km_s: f64,
    /// Close-approach miss distance (km).
    pub miss_distance_km: f64,
    /// Date of the close approach (YYYY-MM-DD).
    pub close_approach_date: &'static str,
    /// Flagged as potentially hazardous.
    pub potentially_hazardous: bool,
}

impl NeoPreset {
    /// Midpoint of the size estimate (m).
    pub fn average_diameter_m(&self) -> f64 {
        (self.diameter_min_m + self.diameter_max_m) / 2.0
    }

    /// Speed at the top of the atmosphere (km/s).
    ///
    /// Earth's gravity adds escape velocity in quadrature to the approach
    /// speed.
    pub fn impact_velocity_km_s(&self) -> f64 {
        self.velocity_km_s.hypot(ESCAPE_VELOCITY_KM_S)
    }

    /// Overlay this object's size, speed and distance onto `base`.
    pub fn to_parameters(&self, base: &AsteroidParameters) -> AsteroidParameters {
        AsteroidParameters {
            diameter_m: self.average_diameter_m(),
            velocity_km_s: self.impact_velocity_km_s(),
            start_distance_km: self.miss_distance_km,
            ..*base
        }
    }
}

/// Look up a preset by catalogue id.
pub fn get_preset(id: &str) -> Option<&'static NeoPreset> {
    PRESETS.iter().find(|p| p.id == id)
}

/// Presets sorted by miss distance, closest first.
pub fn presets_by_distance() -> Vec<&'static NeoPreset> {
    let mut sorted: Vec<_> = PRESETS.iter().collect();
    sorted.sort_by(|a, b| a.miss_distance_km.total_cmp(&b.miss_distance_km));
    sorted
}

/// Strip parenthesised designations from a catalogue name.
///
/// `"433 Eros (A898 PA)"` becomes `"433 Eros"`. Names that are nothing but a
/// parenthesised provisional designation keep the designation itself.
pub fn clean_asteroid_name(name: &str) -> String {
    let mut outside = String::with_capacity(name.len());
    let mut depth = 0usize;
    for c in name.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 => outside.push(c),
            _ => {}
        }
    }

    let cleaned = outside.split_whitespace().collect::<Vec<_>>().join(" ");
    if !cleaned.is_empty() {
        return cleaned;
    }

    // e.g. "(2024 AB1)"
    let inner = name
        .split(['(', ')'])
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ");
    if inner.is_empty() {
        "Unknown Asteroid".to_string()
    } else {
        inner
    }
}

/// Resource tracking the last preset applied to the scenario.
#[derive(Resource, Default)]
pub struct CurrentPreset {
    /// Catalogue id, or `None` for hand-tuned parameters.
    pub id: Option<&'static str>,
}

/// Request to load a preset into the scenario.
#[derive(Message, Clone, Debug)]
pub struct SelectPresetEvent {
    /// Catalogue id of the preset.
    pub preset_id: &'static str,
}

/// Plugin providing preset selection.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentPreset>()
            .add_message::<SelectPresetEvent>()
            .add_systems(Update, handle_select_preset);
    }
}

/// Apply preset selections to the scenario.
pub fn handle_select_preset(
    mut events: MessageReader<SelectPresetEvent>,
    mut scenario: ResMut<ImpactScenario>,
    mut current: ResMut<CurrentPreset>,
) {
    for event in events.read() {
        let Some(preset) = get_preset(event.preset_id) else {
            warn!("Unknown preset ID: {}", event.preset_id);
            continue;
        };

        info!(
            "Loading preset: {} ({:.0} m at {:.1} km/s)",
            preset.name,
            preset.average_diameter_m(),
            preset.impact_velocity_km_s()
        );

        scenario.asteroid = preset.to_parameters(&scenario.asteroid);
        current.id = Some(preset.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_produce_valid_parameters() {
        let base = AsteroidParameters::default();
        for preset in PRESETS {
            let params = preset.to_parameters(&base);
            assert!(
                params.validate().is_ok(),
                "{} produced invalid parameters",
                preset.name
            );
            assert_eq!(params.impact_angle_deg, base.impact_angle_deg);
        }
    }

    #[test]
    fn test_slow_approach_gains_escape_velocity() {
        let apophis = get_preset("2099942").expect("Apophis preset");
        assert!(apophis.velocity_km_s < ESCAPE_VELOCITY_KM_S);

        let params = apophis.to_parameters(&AsteroidParameters::default());
        assert!((params.velocity_km_s - 13.42).abs() < 0.01);
        assert!(params.validate().is_ok());

        for preset in PRESETS {
            assert!(preset.impact_velocity_km_s() > preset.velocity_km_s);
            assert!(preset.impact_velocity_km_s() >= ESCAPE_VELOCITY_KM_S);
        }
    }

    #[test]
    fn test_apophis_average() {
        let apophis = get_preset("2099942").expect("Apophis preset");
        assert_eq!(apophis.average_diameter_m(), 505.0);
        assert!(apophis.potentially_hazardous);
    }

    #[test]
    fn test_presets_by_distance() {
        let sorted = presets_by_distance();
        assert_eq!(sorted.len(), PRESETS.len());
        assert_eq!(sorted[0].name, "Apophis");
        assert!(sorted
            .windows(2)
            .all(|w| w[0].miss_distance_km <= w[1].miss_distance_km));
    }

    #[test]
    fn test_unique_ids() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_clean_asteroid_name() {
        assert_eq!(clean_asteroid_name("433 Eros (A898 PA)"), "433 Eros");
        assert_eq!(clean_asteroid_name("(2024 AB1)"), "2024 AB1");
        assert_eq!(clean_asteroid_name("  Bennu  "), "Bennu");
        assert_eq!(clean_asteroid_name(""), "Unknown Asteroid");
        assert_eq!(clean_asteroid_name("()"), "Unknown Asteroid");
    }
}
