//! Phosphor icons used by the impact panel.
//!
//! The icon font is registered once via `setup_fonts`; panel systems are
//! gated on [`FontsInitialized`] so glyphs never render as tofu.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Whether the icon font has been registered with egui.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// Register the Phosphor icon font.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// https://phosphoricons.com/

pub const ASTEROID: &str = egui_phosphor::regular::ASTERISK;
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
pub const GLOBE: &str = egui_phosphor::regular::GLOBE;
/// Energy read-out
pub const ENERGY: &str = egui_phosphor::regular::LIGHTNING;
pub const CRATER: &str = egui_phosphor::regular::CIRCLE_DASHED;
pub const FIRE: &str = egui_phosphor::regular::FIRE;
pub const WIND: &str = egui_phosphor::regular::WIND;
/// Seismic read-out
pub const SEISMIC: &str = egui_phosphor::regular::WAVEFORM;
pub const TSUNAMI: &str = egui_phosphor::regular::WAVES;
pub const WARNING: &str = egui_phosphor::regular::WARNING;

// Deflection strategies
pub const KINETIC: &str = egui_phosphor::regular::ROCKET;
pub const GRAVITY_TRACTOR: &str = egui_phosphor::regular::MAGNET;
pub const NUCLEAR: &str = egui_phosphor::regular::RADIOACTIVE;
