//! Optionen-Dialog für Farben, Breiten, Wertebereich und Feder.

use super::slider_widget::to_color32;
use crate::app::{AppIntent, AppState};
use crate::shared::options::{
    CLIP_MARGIN_RANGE, CURVE_SEGMENTS_RANGE, DAMPING_RATIO_RANGE, DRAG_THRESHOLD_RANGE,
    LINE_WIDTH_RANGE, MAX_PROGRESS_RANGE, SLIDER_HEIGHT_RANGE, STIFFNESS_RANGE,
};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .anchor(egui::Align2::RIGHT_TOP, [-16.0, 48.0])
        .show(ctx, |ui| {
            // ── Darstellung ─────────────────────────────────────
            ui.collapsing("Darstellung", |ui| {
                changed |= color_edit(ui, "Track-Farbe:", &mut opts.track_color);
                changed |= color_edit(ui, "Fortschritts-Farbe:", &mut opts.progress_color);
                changed |= drag_f32(ui, "Track-Breite:", &mut opts.track_width, LINE_WIDTH_RANGE, 0.1);
                changed |= drag_f32(
                    ui,
                    "Fortschritts-Breite:",
                    &mut opts.progress_width,
                    LINE_WIDTH_RANGE,
                    0.1,
                );
                changed |= drag_f32(ui, "Höhe:", &mut opts.slider_height, SLIDER_HEIGHT_RANGE, 1.0);
                ui.horizontal(|ui| {
                    ui.label("Kurven-Segmente:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.curve_segments).range(CURVE_SEGMENTS_RANGE))
                        .changed();
                });
            });

            // ── Wertebereich ────────────────────────────────────
            ui.collapsing("Wertebereich", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Maximum:");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.max_progress).range(MAX_PROGRESS_RANGE))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Startwert:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.initial_progress)
                                .range(0..=opts.max_progress),
                        )
                        .changed();
                });
            });

            // ── Animation & Gesten ──────────────────────────────
            ui.collapsing("Animation & Gesten", |ui| {
                changed |= drag_f32(ui, "Dämpfung:", &mut opts.damping_ratio, DAMPING_RATIO_RANGE, 0.01);
                changed |= drag_f32(ui, "Steifigkeit:", &mut opts.stiffness, STIFFNESS_RANGE, 10.0);
                changed |= drag_f32(
                    ui,
                    "Drag-Schwelle (px):",
                    &mut opts.drag_threshold,
                    DRAG_THRESHOLD_RANGE,
                    0.5,
                );
            });

            // ── Maske ───────────────────────────────────────────
            ui.collapsing("Maske", |ui| {
                changed |= drag_f32(ui, "Rand links:", &mut opts.clip_margin_left, CLIP_MARGIN_RANGE, 1.0);
                changed |= drag_f32(ui, "Rand oben:", &mut opts.clip_margin_top, CLIP_MARGIN_RANGE, 1.0);
                changed |= drag_f32(
                    ui,
                    "Rand unten:",
                    &mut opts.clip_margin_bottom,
                    CLIP_MARGIN_RANGE,
                    1.0,
                );
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Beschriftetes DragValue für f32-Felder.
fn drag_f32(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut f32,
    range: std::ops::RangeInclusive<f32>,
    speed: f64,
) -> bool {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).range(range).speed(speed))
            .changed()
    })
    .inner
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                a as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
