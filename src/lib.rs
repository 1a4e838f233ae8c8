//! Impactsim - Asteroid Impact Simulator
//!
//! A library crate providing the impact physics engine and the Bevy
//! plugins built on top of it.

pub mod mitigation;
pub mod physics;
pub mod scenarios;
pub mod simulation;
pub mod trajectory;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

pub use physics::{
    ImpactConfig, ImpactEffects, compute_impact_effects, compute_impact_effects_with,
};
pub use trajectory::{Trajectory, compute_trajectory, generate_trajectory};
pub use types::{AsteroidParameters, ImpactError, ImpactLocation, SurfaceType};
