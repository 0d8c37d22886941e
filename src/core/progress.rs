//! Lineare Abbildung zwischen Zeiger-X und ganzzahligem Fortschrittswert.

use super::ViewportSize;

/// Wertebereich `[0, max]` des Sliders.
///
/// `max` ist immer ≥ 1; ungültige Konfigurationen werden beim Erzeugen
/// normalisiert und geloggt, nie abgelehnt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressRange {
    max: u32,
}

impl ProgressRange {
    /// Erstellt einen Bereich. `max == 0` wird auf 1 angehoben.
    pub fn new(max: u32) -> Self {
        if max == 0 {
            log::warn!("CurvedProgressSlider: max_progress = 0 ist ungültig, verwende 1");
        }
        Self { max: max.max(1) }
    }

    /// Obere Grenze des Bereichs.
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Klemmt einen Startwert auf den Bereich und warnt bei Überschreitung.
    pub fn normalize_initial(&self, initial: u32) -> u32 {
        if initial > self.max {
            log::warn!(
                "CurvedProgressSlider: Fortschritt darf nicht größer als max_progress sein \
                 (progress = {}, max_progress = {}), klemme auf {}",
                initial,
                self.max,
                self.max
            );
        }
        initial.min(self.max)
    }

    /// `round(x / w * max)` mit X auf `[0, w]` geklemmt.
    pub fn progress_for_x(&self, x: f32, viewport: ViewportSize) -> u32 {
        if viewport.is_degenerate() {
            return 0;
        }
        let ratio = viewport.clamp_x(x) / viewport.width;
        let value = (ratio * self.max as f32).round();
        if value.is_nan() {
            return 0;
        }
        (value as u32).min(self.max)
    }

    /// Umkehrung: `clamp(progress / max * w, 0, w)`.
    pub fn x_for_progress(&self, progress: u32, viewport: ViewportSize) -> f32 {
        if viewport.is_degenerate() {
            return 0.0;
        }
        let ratio = progress as f32 / self.max as f32;
        viewport.clamp_x(ratio * viewport.width)
    }
}

impl Default for ProgressRange {
    fn default() -> Self {
        Self::new(crate::shared::options::MAX_PROGRESS)
    }
}

#[cfg(test)]
mod tests;
