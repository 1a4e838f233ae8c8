//! Side panel for editing the scenario and reading the impact report.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::mitigation::MitigationStrategy;
use crate::physics::{ImpactConfig, ImpactEffects};
use crate::scenarios::{CurrentPreset, SelectPresetEvent, presets_by_distance};
use crate::simulation::{ApplyMitigationEvent, ImpactReport, ImpactScenario};
use crate::types::{AsteroidParameters, Composition, ESCAPE_VELOCITY_KM_S, ImpactLocation};

use super::icons;

mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(26, 26, 36, 240);
    pub const HEADING: Color32 = Color32::from_rgb(220, 220, 230);
    pub const MUTED: Color32 = Color32::from_rgb(160, 160, 170);
    pub const DANGER: Color32 = Color32::from_rgb(255, 100, 100);
    pub const OCEAN: Color32 = Color32::from_rgb(100, 170, 255);
}

/// Render the impact panel.
#[allow(clippy::too_many_arguments)]
pub fn impact_panel_system(
    mut contexts: EguiContexts,
    mut scenario: ResMut<ImpactScenario>,
    mut config: ResMut<ImpactConfig>,
    report: Res<ImpactReport>,
    current_preset: Res<CurrentPreset>,
    mut preset_events: MessageWriter<SelectPresetEvent>,
    mut mitigation_events: MessageWriter<ApplyMitigationEvent>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    // Edit copies so change detection only fires on real edits.
    let mut asteroid = scenario.asteroid;
    let mut location = scenario.location;
    let mut ocean_depth_km = config.ocean_depth_km;

    egui::SidePanel::left("impact_panel")
        .resizable(false)
        .default_width(320.0)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::symmetric(16, 12)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                section_heading(ui, icons::ASTEROID, "Asteroid");
                preset_selector(ui, current_preset.id, &mut preset_events);
                asteroid_controls(ui, &mut asteroid);

                ui.separator();
                section_heading(ui, icons::TARGET, "Impact Site");
                location_controls(ui, &mut location, &mut ocean_depth_km);

                ui.separator();
                section_heading(ui, icons::KINETIC, "Deflection");
                mitigation_buttons(ui, &mut mitigation_events);

                ui.separator();
                if let Some(err) = &report.last_error {
                    ui.label(
                        egui::RichText::new(format!("{} {}", icons::WARNING, err))
                            .color(colors::DANGER),
                    );
                }
                if let Some(effects) = &report.effects {
                    render_report(ui, effects);
                }
            });
        });

    if asteroid != scenario.asteroid || location != scenario.location {
        scenario.asteroid = asteroid;
        scenario.location = location;
    }
    if ocean_depth_km != config.ocean_depth_km {
        config.ocean_depth_km = ocean_depth_km;
    }
}

fn section_heading(ui: &mut egui::Ui, icon: &str, title: &str) {
    ui.label(
        egui::RichText::new(format!("{icon} {title}"))
            .size(16.0)
            .strong()
            .color(colors::HEADING),
    );
    ui.add_space(4.0);
}

fn preset_selector(
    ui: &mut egui::Ui,
    current: Option<&'static str>,
    events: &mut MessageWriter<SelectPresetEvent>,
) {
    let selected = current
        .and_then(crate::scenarios::get_preset)
        .map_or("Custom", |p| p.name);

    egui::ComboBox::from_label("Preset")
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for preset in presets_by_distance() {
                let label = if preset.potentially_hazardous {
                    format!("{} {}", preset.name, icons::WARNING)
                } else {
                    preset.name.to_string()
                };
                if ui
                    .selectable_label(current == Some(preset.id), label)
                    .on_hover_text(format!(
                        "{:.0} m, {:.1} km/s, closest approach {}",
                        preset.average_diameter_m(),
                        preset.velocity_km_s,
                        preset.close_approach_date
                    ))
                    .clicked()
                {
                    events.write(SelectPresetEvent {
                        preset_id: preset.id,
                    });
                }
            }
        });
}

// Sliders clamp only on drag; presets and mitigations can sit outside the range.
fn asteroid_controls(ui: &mut egui::Ui, asteroid: &mut AsteroidParameters) {
    ui.add(
        egui::Slider::new(&mut asteroid.diameter_m, 1.0..=1_000_000.0)
            .logarithmic(true)
            .clamping(egui::SliderClamping::Edits)
            .text("Diameter")
            .suffix(" m"),
    );
    ui.add(
        egui::Slider::new(&mut asteroid.velocity_km_s, ESCAPE_VELOCITY_KM_S..=72.0)
            .clamping(egui::SliderClamping::Edits)
            .text("Velocity")
            .suffix(" km/s"),
    );
    ui.add(
        egui::Slider::new(&mut asteroid.impact_angle_deg, 1.0..=90.0)
            .clamping(egui::SliderClamping::Edits)
            .text("Entry angle")
            .suffix("°"),
    );
    ui.add(
        egui::Slider::new(&mut asteroid.azimuth_deg, 0.0..=360.0)
            .clamping(egui::SliderClamping::Edits)
            .text("Azimuth")
            .suffix("°"),
    );

    ui.horizontal_wrapped(|ui| {
        for composition in Composition::ALL {
            let density = composition.density_kg_m3();
            if ui
                .selectable_label(asteroid.density_kg_m3 == density, composition.name())
                .clicked()
            {
                *asteroid = asteroid.with_composition(composition);
            }
        }
    });
    ui.label(
        egui::RichText::new(format!(
            "Mass {:.3e} kg, density {:.0} kg/m³",
            asteroid.mass_kg(),
            asteroid.density_kg_m3
        ))
        .color(colors::MUTED),
    );
}

fn location_controls(ui: &mut egui::Ui, location: &mut ImpactLocation, ocean_depth_km: &mut f64) {
    ui.add(
        egui::Slider::new(&mut location.latitude_deg, -90.0..=90.0)
            .clamping(egui::SliderClamping::Edits)
            .text("Latitude")
            .suffix("°"),
    );
    ui.add(
        egui::Slider::new(&mut location.longitude_deg, -180.0..=180.0)
            .clamping(egui::SliderClamping::Edits)
            .text("Longitude")
            .suffix("°"),
    );

    let surface = location.surface_type();
    ui.horizontal(|ui| {
        ui.label(format!("{} Surface:", icons::GLOBE));
        let color = if surface.is_ocean() {
            colors::OCEAN
        } else {
            colors::HEADING
        };
        ui.label(egui::RichText::new(surface.name()).color(color));
    });

    if surface.is_ocean() {
        ui.add(
            egui::Slider::new(ocean_depth_km, 0.1..=11.0)
                .clamping(egui::SliderClamping::Edits)
                .text("Ocean depth")
                .suffix(" km"),
        );
    }
}

fn mitigation_buttons(ui: &mut egui::Ui, events: &mut MessageWriter<ApplyMitigationEvent>) {
    ui.horizontal_wrapped(|ui| {
        for (icon, strategy) in [
            (icons::KINETIC, MitigationStrategy::kinetic_impactor()),
            (icons::GRAVITY_TRACTOR, MitigationStrategy::gravity_tractor()),
            (icons::NUCLEAR, MitigationStrategy::nuclear_device()),
        ] {
            if ui
                .button(format!("{icon} {}", strategy.name()))
                .clicked()
            {
                events.write(ApplyMitigationEvent { strategy });
            }
        }
    });
}

fn render_report(ui: &mut egui::Ui, effects: &ImpactEffects) {
    let entry = &effects.atmospheric_entry;
    let secondary = &effects.secondary;

    section_heading(ui, icons::ENERGY, "Energy");
    ui.label(format_megatons(effects.energy_megatons));
    ui.label(egui::RichText::new(&secondary.energy_comparison).color(colors::MUTED));
    if entry.did_airburst {
        ui.label(
            egui::RichText::new(format!(
                "Airburst at {:.1} km, {:.0}% of mass survives",
                entry.fragmentation_altitude_km,
                entry.surviving_mass_fraction * 100.0
            ))
            .color(colors::DANGER),
        );
    }

    ui.add_space(6.0);
    section_heading(ui, icons::CRATER, "Crater");
    ui.label(format!(
        "{} wide, {} deep",
        format_distance_km(effects.crater.diameter_km),
        format_distance_km(effects.crater.depth_km)
    ));
    ui.label(format!("Ejecta {}", format_volume_m3(secondary.ejecta_volume_m3)));

    ui.add_space(6.0);
    section_heading(ui, icons::FIRE, "Thermal");
    ui.label(format!(
        "Fireball {}",
        format_distance_km(secondary.fireball_radius_km)
    ));
    ui.label(format!(
        "Burns: 3rd {} / 2nd {} / 1st {}",
        format_distance_km(secondary.burn_radius_3rd_km),
        format_distance_km(secondary.burn_radius_2nd_km),
        format_distance_km(secondary.burn_radius_1st_km)
    ));

    ui.add_space(6.0);
    section_heading(ui, icons::WIND, "Blast");
    ui.label(format!(
        "Airblast {}, collapse {}, glass {}",
        format_distance_km(secondary.airblast_radius_km),
        format_distance_km(secondary.building_collapse_radius_km),
        format_distance_km(secondary.glass_breakage_radius_km)
    ));
    ui.label(format!(
        "Peak wind {:.0} km/h ({:.0} mph), {:.0} dB",
        secondary.peak_wind_speed_km_h, secondary.peak_wind_speed_mph, secondary.peak_decibels
    ));
    ui.label(egui::RichText::new(&secondary.wind_comparison).color(colors::MUTED));

    ui.add_space(6.0);
    section_heading(ui, icons::SEISMIC, "Seismic");
    ui.label(format!(
        "Magnitude {:.1}, felt to {}",
        secondary.seismic_magnitude,
        format_distance_km(secondary.felt_distance_km)
    ));
    ui.label(egui::RichText::new(secondary.seismic_comparison).color(colors::MUTED));

    if let Some(tsunami) = effects.tsunami() {
        ui.add_space(6.0);
        section_heading(ui, icons::TSUNAMI, "Tsunami");
        ui.label(format!(
            "{:.0} m at source, {:.0} m at the coast",
            tsunami.initial_height_m, tsunami.coastal_height_m
        ));
        ui.label(format!(
            "Reaches {} inland, dangerous to {}",
            format_distance_km(tsunami.inundation_distance_km),
            format_distance_km(tsunami.effective_radius_km)
        ));
    }
}

/// Human-readable distance, switching to meters below 1 km.
pub fn format_distance_km(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else if km < 100.0 {
        format!("{km:.1} km")
    } else {
        format!("{km:.0} km")
    }
}

/// Human-readable TNT equivalent.
pub fn format_megatons(megatons: f64) -> String {
    if megatons < 1e-3 {
        format!("{:.1} t TNT", megatons * 1e6)
    } else if megatons < 1.0 {
        format!("{:.1} kt TNT", megatons * 1e3)
    } else if megatons < 1e4 {
        format!("{megatons:.1} Mt TNT")
    } else {
        format!("{megatons:.2e} Mt TNT")
    }
}

/// Human-readable volume in cubic kilometers when large.
pub fn format_volume_m3(volume_m3: f64) -> String {
    let km3 = volume_m3 / 1e9;
    if km3 >= 0.01 {
        format!("{km3:.2} km³")
    } else {
        format!("{volume_m3:.2e} m³")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::PRESETS;

    /// Draw one frame of `add_contents` without a window.
    fn run_frame(mut add_contents: impl FnMut(&mut egui::Ui)) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }

    #[test]
    fn test_controls_keep_preset_values() {
        let base = AsteroidParameters {
            azimuth_deg: 359.5,
            ..Default::default()
        };
        for preset in PRESETS {
            let loaded = preset.to_parameters(&base);
            let mut shown = loaded;
            run_frame(|ui| asteroid_controls(ui, &mut shown));
            assert_eq!(shown, loaded, "{} changed by drawing", preset.name);
        }
    }

    #[test]
    fn test_controls_keep_location_values() {
        let mut location = ImpactLocation::new(0.0, -160.0);
        let mut depth = 12.5;
        run_frame(|ui| location_controls(ui, &mut location, &mut depth));
        assert_eq!(location, ImpactLocation::new(0.0, -160.0));
        assert_eq!(depth, 12.5);
    }

    #[test]
    fn test_format_distance_switches_units() {
        assert_eq!(format_distance_km(0.25), "250 m");
        assert_eq!(format_distance_km(21.7), "21.7 km");
        assert_eq!(format_distance_km(1234.4), "1234 km");
    }

    #[test]
    fn test_format_megatons_brackets() {
        assert_eq!(format_megatons(0.0005), "500.0 t TNT");
        assert_eq!(format_megatons(0.015), "15.0 kt TNT");
        assert_eq!(format_megatons(67.2), "67.2 Mt TNT");
        assert_eq!(format_megatons(8.0e8), "8.00e8 Mt TNT");
    }

    #[test]
    fn test_format_volume() {
        assert_eq!(format_volume_m3(2.5e9), "2.50 km³");
        assert_eq!(format_volume_m3(1.0e6), "1.00e6 m³");
    }
}
