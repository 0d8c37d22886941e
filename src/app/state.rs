//! Zustand des Host-Bildschirms.

use crate::shared::SliderOptions;
use std::path::PathBuf;

/// Hauptzustand der Anwendung
#[derive(Debug, Clone)]
pub struct AppState {
    /// Laufzeit-Optionen (Farben, Breiten, Feder, Wertebereich)
    pub options: SliderOptions,
    /// Pfad, unter dem die Optionen gespeichert werden
    pub options_path: PathBuf,
    /// Zuletzt vom Slider gemeldeter Wert
    pub last_committed: Option<u32>,
    /// Anzahl gemeldeter Werte seit Start
    pub commit_count: u64,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Letzte Rückmeldung für die Status-Bar
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(SliderOptions::default(), SliderOptions::config_path())
    }

    /// Erstellt einen App-State mit geladenen Optionen
    pub fn with_options(options: SliderOptions, options_path: PathBuf) -> Self {
        Self {
            options,
            options_path,
            last_committed: None,
            commit_count: 0,
            show_options_dialog: false,
            status_message: None,
            should_exit: false,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
