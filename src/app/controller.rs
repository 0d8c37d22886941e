//! Application Controller für zentrale Event-Verarbeitung des Host-Bildschirms.

use super::{AppIntent, AppState, CurvedProgressSlider, SliderIntent};
use crate::shared::SliderOptions;

/// Orchestriert UI-Events auf AppState und Slider.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        slider: &mut CurvedProgressSlider,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        match intent {
            AppIntent::ProgressCommitted { progress } => {
                log::info!("Fortschritt festgeschrieben: {}", progress);
                state.last_committed = Some(progress);
                state.commit_count += 1;
            }
            AppIntent::ProgressSetRequested { progress } => {
                slider.handle_intent(SliderIntent::ProgressSetRequested { progress });
            }
            AppIntent::OpenOptionsDialogRequested => state.show_options_dialog = true,
            AppIntent::CloseOptionsDialogRequested => state.show_options_dialog = false,
            AppIntent::OptionsChanged { options } => apply_options(state, slider, options),
            AppIntent::ResetOptionsRequested => {
                apply_options(state, slider, SliderOptions::default());
                state.status_message = Some("Standardwerte wiederhergestellt".to_string());
            }
            AppIntent::SaveOptionsRequested => {
                state.options.save_to_file(&state.options_path)?;
                state.status_message =
                    Some(format!("Optionen gespeichert: {}", state.options_path.display()));
            }
            AppIntent::ExitRequested => state.should_exit = true,
        }
        Ok(())
    }
}

fn apply_options(state: &mut AppState, slider: &mut CurvedProgressSlider, options: SliderOptions) {
    state.options = options.clone();
    slider.handle_intent(SliderIntent::OptionsChanged { options });
}
