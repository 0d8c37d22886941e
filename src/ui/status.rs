//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, CurvedProgressSlider};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState, slider: &CurvedProgressSlider) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Fortschritt: {} / {}",
                slider.progress(),
                slider.max_progress()
            ));

            ui.separator();

            let cp = slider.engine().control_point();
            ui.label(format!("Steuerpunkt: ({:.1}, {:.1})", cp.x, cp.y));

            ui.separator();

            let phase = if slider.is_dragging() {
                "Drag"
            } else if slider.engine().is_animating() {
                "Animation"
            } else {
                "Ruhe"
            };
            ui.label(format!("Zustand: {}", phase));

            ui.separator();

            ui.label(format!("Meldungen: {}", state.commit_count));

            if let Some(message) = &state.status_message {
                ui.separator();
                ui.label(message);
            }
        });
    });
}
