//! Curved Progress Slider – Host-Bildschirm.
//!
//! Minimale eframe-Anwendung, die einen gekrümmten Fortschritts-Slider einbettet
//! und jeden festgeschriebenen Wert anzeigt.

use curved_progress_slider::{
    ui, AppController, AppIntent, AppState, CurvedProgressSlider, SliderOptions,
};
use eframe::egui;
use std::sync::mpsc;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren (RUST_LOG überschreibt den Standard)
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Curved Progress Slider v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([720.0, 520.0])
                .with_title("Curved Progress Slider"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Curved Progress Slider",
            options,
            Box::new(|_cc| Ok(Box::new(SliderApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct SliderApp {
    state: AppState,
    controller: AppController,
    slider: CurvedProgressSlider,
    /// Vom Slider-Listener gemeldete Werte
    committed: mpsc::Receiver<u32>,
}

impl SliderApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = SliderOptions::config_path();
        let slider_options = SliderOptions::load_from_file(&config_path);

        let (sender, committed) = mpsc::channel();
        let slider = CurvedProgressSlider::new(slider_options.clone()).on_progress_change(
            move |progress| {
                if sender.send(progress).is_err() {
                    log::warn!("Fortschritt {} konnte nicht zugestellt werden", progress);
                }
            },
        );

        Self {
            state: AppState::with_options(slider_options, config_path),
            controller: AppController::new(),
            slider,
            committed,
        }
    }
}

impl eframe::App for SliderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();
        events.extend(ui::render_menu(ctx));
        ui::render_status_bar(ctx, &self.state, &self.slider);
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::render_slider_screen(ctx, &self.state, &mut self.slider));

        events.extend(
            self.committed
                .try_iter()
                .map(|progress| AppIntent::ProgressCommitted { progress }),
        );

        self.process_events(events);
    }
}

impl SliderApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self
                .controller
                .handle_intent(&mut self.state, &mut self.slider, event)
            {
                log::error!("Event handling failed: {:#}", e);
                self.state.status_message = Some(format!("Fehler: {e}"));
            }
        }
    }
}
