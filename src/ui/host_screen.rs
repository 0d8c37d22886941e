//! Host-Bildschirm: Menüleiste und zentrales Panel mit eingebettetem Slider.

use super::slider_widget::show_curved_slider;
use crate::app::{AppIntent, AppState, CurvedProgressSlider};

/// Innenabstand des zentralen Panels.
const SCREEN_PADDING: i8 = 30;

/// Rendert die Menüleiste.
pub fn render_menu(ctx: &egui::Context) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Optionen…").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }
                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }
                ui.separator();
                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });
        });
    });

    events
}

/// Rendert das zentrale Panel mit Slider und Wertanzeige.
pub fn render_slider_screen(
    ctx: &egui::Context,
    state: &AppState,
    slider: &mut CurvedProgressSlider,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(
            egui::Frame::central_panel(&ctx.style())
                .inner_margin(egui::Margin::same(SCREEN_PADDING)),
        )
        .show(ctx, |ui| {
            show_curved_slider(ui, slider);

            ui.add_space(12.0);

            ui.horizontal(|ui| {
                match state.last_committed {
                    Some(value) => {
                        ui.label(format!("Gemeldeter Wert: {} / {}", value, slider.max_progress()))
                    }
                    None => ui.label("Noch kein Wert gemeldet"),
                };

                ui.separator();

                ui.label("Wert setzen:");
                let mut value = slider.progress();
                let changed = ui
                    .add(egui::DragValue::new(&mut value).range(0..=slider.max_progress()))
                    .changed();
                if changed {
                    events.push(AppIntent::ProgressSetRequested { progress: value });
                }
            });
        });

    events
}
