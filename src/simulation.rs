//! Bevy wiring for the impact engine.
//!
//! The engine itself is stateless; this module owns the scenario the user is
//! editing and the report derived from it. The report is rebuilt whenever
//! the scenario or the configuration changes.

use bevy::prelude::*;

use crate::mitigation::{MitigationStrategy, apply_mitigation};
use crate::physics::{ImpactConfig, ImpactEffects, compute_impact_effects_with};
use crate::trajectory::{Trajectory, generate_trajectory};
use crate::types::{AsteroidParameters, ImpactError, ImpactLocation};

/// The impact currently being explored.
#[derive(Resource, Clone, Debug, Default)]
pub struct ImpactScenario {
    pub asteroid: AsteroidParameters,
    pub location: ImpactLocation,
}

/// Derived results for the current [`ImpactScenario`].
#[derive(Resource, Default)]
pub struct ImpactReport {
    /// Effect estimates, absent while the scenario is invalid.
    pub effects: Option<ImpactEffects>,
    /// Approach path toward the strike point.
    pub trajectory: Option<Trajectory>,
    /// Why the last recompute or mitigation was rejected.
    pub last_error: Option<ImpactError>,
    /// Number of successful recomputes.
    pub generation: u64,
}

/// Request to apply a deflection strategy to the current asteroid.
#[derive(Message, Clone, Debug)]
pub struct ApplyMitigationEvent {
    pub strategy: MitigationStrategy,
}

/// Plugin owning the scenario and its report.
pub struct ImpactPlugin;

impl Plugin for ImpactPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImpactScenario>()
            .init_resource::<ImpactConfig>()
            .init_resource::<ImpactReport>()
            .add_message::<ApplyMitigationEvent>()
            .add_systems(Update, (handle_apply_mitigation, recompute_report).chain());
    }
}

/// Apply deflection requests to the scenario asteroid.
///
/// A strategy that would leave the asteroid out of range is rejected and
/// the scenario is left untouched.
pub fn handle_apply_mitigation(
    mut events: MessageReader<ApplyMitigationEvent>,
    mut scenario: ResMut<ImpactScenario>,
    mut report: ResMut<ImpactReport>,
) {
    for event in events.read() {
        match apply_mitigation(&scenario.asteroid, &event.strategy) {
            Ok(asteroid) => {
                info!(
                    "Applied {}: {:.3} km/s, {:.1}° entry, {:.1}° azimuth",
                    event.strategy.name(),
                    asteroid.velocity_km_s,
                    asteroid.impact_angle_deg,
                    asteroid.azimuth_deg
                );
                scenario.asteroid = asteroid;
            }
            Err(err) => {
                warn!("{} rejected: {}", event.strategy.name(), err);
                report.last_error = Some(err);
            }
        }
    }
}

/// Rebuild the report when the scenario or configuration changed.
pub fn recompute_report(
    scenario: Res<ImpactScenario>,
    config: Res<ImpactConfig>,
    mut report: ResMut<ImpactReport>,
) {
    if !(scenario.is_changed() || config.is_changed()) {
        return;
    }

    let result = compute_impact_effects_with(&scenario.asteroid, &scenario.location, &config)
        .and_then(|effects| {
            let trajectory = generate_trajectory(
                &scenario.asteroid,
                &scenario.location,
                config.trajectory_steps,
            )?;
            Ok((effects, trajectory))
        });

    match result {
        Ok((effects, trajectory)) => {
            debug!(
                "Impact at ({:.2}, {:.2}): {:.3e} Mt, crater {:.2} km",
                scenario.location.latitude_deg,
                scenario.location.longitude_deg,
                effects.energy_megatons,
                effects.crater_diameter_km()
            );
            report.effects = Some(effects);
            report.trajectory = Some(trajectory);
            report.last_error = None;
            report.generation += 1;
        }
        Err(err) => {
            warn!("Impact scenario rejected: {}", err);
            report.effects = None;
            report.trajectory = None;
            report.last_error = Some(err);
        }
    }
}
