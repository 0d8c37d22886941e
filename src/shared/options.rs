//! Zentrale Konfiguration für den Curved Progress Slider.
//!
//! `SliderOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ── Wertebereich ────────────────────────────────────────────────────

/// Standard-Startwert des Sliders.
pub const INITIAL_PROGRESS: u32 = 30;
/// Standard-Obergrenze des Wertebereichs.
pub const MAX_PROGRESS: u32 = 100;

// ── Darstellung ─────────────────────────────────────────────────────

/// Farbe der Grundkurve (RGBA: Vordergrund mit 40 % Deckkraft).
pub const TRACK_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.4];
/// Farbe des erledigten Anteils (RGBA: Lila).
pub const PROGRESS_COLOR: [f32; 4] = [0.384, 0.0, 0.933, 1.0];
/// Linienstärke der Grundkurve.
pub const TRACK_WIDTH: f32 = 5.0;
/// Linienstärke der Fortschrittslinie.
pub const PROGRESS_WIDTH: f32 = 6.0;
/// Höhe der Zeichenfläche, die der Host reserviert.
pub const SLIDER_HEIGHT: f32 = 300.0;
/// Anzahl Polylinien-Segmente, mit denen die Bézier-Kurve gezeichnet wird.
pub const CURVE_SEGMENTS: usize = 64;

// ── Fortschritts-Maske ──────────────────────────────────────────────

/// Überstand der Maske links vom Viewport.
pub const CLIP_MARGIN_LEFT: f32 = 100.0;
/// Überstand der Maske über dem Viewport.
pub const CLIP_MARGIN_TOP: f32 = 100.0;
/// Überstand der Maske unter dem Viewport.
pub const CLIP_MARGIN_BOTTOM: f32 = 150.0;

// ── Animation & Gesten ──────────────────────────────────────────────

/// Dämpfungsverhältnis der Steuerpunkt-Feder.
pub const DAMPING_RATIO: f32 = 0.4;
/// Steifigkeit der Steuerpunkt-Feder.
pub const STIFFNESS: f32 = 1500.0;
/// Bewegung (px) ab der ein Druck als Drag statt als Tap gilt.
pub const DRAG_THRESHOLD: f32 = 8.0;

// ── Zulässige Wertebereiche (Dialog und Datei-Laden) ────────────────

pub const MAX_PROGRESS_RANGE: RangeInclusive<u32> = 1..=10_000;
pub const LINE_WIDTH_RANGE: RangeInclusive<f32> = 0.5..=30.0;
pub const SLIDER_HEIGHT_RANGE: RangeInclusive<f32> = 20.0..=800.0;
pub const CURVE_SEGMENTS_RANGE: RangeInclusive<usize> = 4..=512;
pub const CLIP_MARGIN_RANGE: RangeInclusive<f32> = 0.0..=500.0;
pub const DAMPING_RATIO_RANGE: RangeInclusive<f32> = 0.05..=2.0;
/// Obergrenze hält `√k · MAX_SUBSTEP` weit unter 2 (Stabilität des Integrators).
pub const STIFFNESS_RANGE: RangeInclusive<f32> = 10.0..=10_000.0;
pub const DRAG_THRESHOLD_RANGE: RangeInclusive<f32> = 0.0..=50.0;

/// Alle zur Laufzeit änderbaren Slider-Optionen.
/// Wird als `curved_progress_slider.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderOptions {
    // ── Wertebereich ────────────────────────────────────────────
    /// Startwert beim ersten Layout
    pub initial_progress: u32,
    /// Obergrenze des Wertebereichs (≥ 1)
    pub max_progress: u32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Farbe der Grundkurve (RGBA)
    pub track_color: [f32; 4],
    /// Farbe des erledigten Anteils (RGBA)
    pub progress_color: [f32; 4],
    /// Linienstärke der Grundkurve
    pub track_width: f32,
    /// Linienstärke der Fortschrittslinie
    pub progress_width: f32,
    /// Höhe der Zeichenfläche
    pub slider_height: f32,
    /// Polylinien-Segmente pro Kurve
    pub curve_segments: usize,

    // ── Maske ───────────────────────────────────────────────────
    pub clip_margin_left: f32,
    pub clip_margin_top: f32,
    pub clip_margin_bottom: f32,

    // ── Animation & Gesten ──────────────────────────────────────
    /// Dämpfungsverhältnis der Feder (0.4 = deutliches Nachschwingen)
    pub damping_ratio: f32,
    /// Federsteifigkeit
    pub stiffness: f32,
    /// Drag-Schwelle in Pixeln
    pub drag_threshold: f32,
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self {
            initial_progress: INITIAL_PROGRESS,
            max_progress: MAX_PROGRESS,

            track_color: TRACK_COLOR,
            progress_color: PROGRESS_COLOR,
            track_width: TRACK_WIDTH,
            progress_width: PROGRESS_WIDTH,
            slider_height: SLIDER_HEIGHT,
            curve_segments: CURVE_SEGMENTS,

            clip_margin_left: CLIP_MARGIN_LEFT,
            clip_margin_top: CLIP_MARGIN_TOP,
            clip_margin_bottom: CLIP_MARGIN_BOTTOM,

            damping_ratio: DAMPING_RATIO,
            stiffness: STIFFNESS,
            drag_threshold: DRAG_THRESHOLD,
        }
    }
}

impl SliderOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::normalized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Klemmt alle Werte auf die zulässigen Bereiche.
    ///
    /// Nicht endliche Zahlen fallen auf den Standardwert zurück. Jede Korrektur
    /// wird als Warnung geloggt.
    pub fn normalized(self) -> Self {
        let d = Self::default();
        Self {
            // `initial_progress > max_progress` klemmt der Wertebereich selbst
            initial_progress: self.initial_progress,
            max_progress: clamp_ord("max_progress", self.max_progress, MAX_PROGRESS_RANGE),
            track_color: self.track_color,
            progress_color: self.progress_color,
            track_width: clamp_f32("track_width", self.track_width, d.track_width, LINE_WIDTH_RANGE),
            progress_width: clamp_f32(
                "progress_width",
                self.progress_width,
                d.progress_width,
                LINE_WIDTH_RANGE,
            ),
            slider_height: clamp_f32(
                "slider_height",
                self.slider_height,
                d.slider_height,
                SLIDER_HEIGHT_RANGE,
            ),
            curve_segments: clamp_ord("curve_segments", self.curve_segments, CURVE_SEGMENTS_RANGE),
            clip_margin_left: clamp_f32(
                "clip_margin_left",
                self.clip_margin_left,
                d.clip_margin_left,
                CLIP_MARGIN_RANGE,
            ),
            clip_margin_top: clamp_f32(
                "clip_margin_top",
                self.clip_margin_top,
                d.clip_margin_top,
                CLIP_MARGIN_RANGE,
            ),
            clip_margin_bottom: clamp_f32(
                "clip_margin_bottom",
                self.clip_margin_bottom,
                d.clip_margin_bottom,
                CLIP_MARGIN_RANGE,
            ),
            damping_ratio: clamp_f32(
                "damping_ratio",
                self.damping_ratio,
                d.damping_ratio,
                DAMPING_RATIO_RANGE,
            ),
            stiffness: clamp_f32("stiffness", self.stiffness, d.stiffness, STIFFNESS_RANGE),
            drag_threshold: clamp_f32(
                "drag_threshold",
                self.drag_threshold,
                d.drag_threshold,
                DRAG_THRESHOLD_RANGE,
            ),
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("curved_progress_slider"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("curved_progress_slider.toml")
    }

    /// Masken-Ränder als Geometrie-Parameter.
    pub fn clip_margins(&self) -> crate::core::ClipMargins {
        crate::core::ClipMargins {
            left: self.clip_margin_left,
            top: self.clip_margin_top,
            bottom: self.clip_margin_bottom,
        }
    }

    /// Federparameter für die Steuerpunkt-Animation.
    pub fn spring_params(&self) -> crate::core::SpringParams {
        crate::core::SpringParams {
            damping_ratio: self.damping_ratio,
            stiffness: self.stiffness,
        }
    }
}

/// Klemmt `value` auf `range`; NaN/∞ ergeben `fallback`.
pub(crate) fn clamp_f32(name: &str, value: f32, fallback: f32, range: RangeInclusive<f32>) -> f32 {
    if !value.is_finite() {
        log::warn!("Option {} = {} ist ungültig, verwende {}", name, value, fallback);
        return fallback;
    }
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        log::warn!("Option {} = {} außerhalb von {:?}, geklemmt auf {}", name, value, range, clamped);
    }
    clamped
}

fn clamp_ord<T: Ord + Copy + std::fmt::Display + std::fmt::Debug>(
    name: &str,
    value: T,
    range: RangeInclusive<T>,
) -> T {
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        log::warn!("Option {} = {} außerhalb von {:?}, geklemmt auf {}", name, value, range, clamped);
    }
    clamped
}
