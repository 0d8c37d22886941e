//! Slider- und Host-Events.
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.

use crate::core::ViewportSize;
use crate::shared::SliderOptions;
use glam::Vec2;

/// Eingaben an einen einzelnen Slider (Viewport-Koordinaten).
#[derive(Debug, Clone)]
pub enum SliderIntent {
    /// Layout-Durchlauf mit (ggf. neuer) Zeichenflächen-Größe
    ViewportResized { size: ViewportSize },
    /// Primärer Zeiger gedrückt
    PointerPressed { pos: Vec2 },
    /// Zeiger bewegt (nur relevant solange gedrückt)
    PointerMoved { pos: Vec2 },
    /// Primärer Zeiger losgelassen
    PointerReleased { pos: Vec2 },
    /// Zeiger verloren
    PointerCancelled,
    /// Render-Frame: Animation um `dt` Sekunden fortschreiben
    FrameAdvanced { dt: f32 },
    /// Wert vom Host setzen (ohne Listener-Aufruf)
    ProgressSetRequested { progress: u32 },
    /// Optionen geändert (Farben, Breiten, Feder, Wertebereich)
    OptionsChanged { options: SliderOptions },
}

/// Eingaben an den Host-Bildschirm.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Slider hat einen Wert festgeschrieben
    ProgressCommitted { progress: u32 },
    /// Wert per Bedienelement setzen
    ProgressSetRequested { progress: u32 },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen live geändert
    OptionsChanged { options: SliderOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen als TOML speichern
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
