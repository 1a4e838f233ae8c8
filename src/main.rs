//! Impactsim - Asteroid Impact Simulator
//!
//! A desktop application for exploring the effects of an asteroid strike:
//! atmospheric entry, cratering, blast, thermal, seismic and tsunami.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use impactsim::scenarios::ScenarioPlugin;
use impactsim::simulation::ImpactPlugin;
use impactsim::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Impactsim".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins((ImpactPlugin, ScenarioPlugin, UiPlugin))
        .add_systems(Startup, spawn_camera)
        .run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
