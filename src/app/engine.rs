//! Kern-Logik des Sliders: Zeigerposition → Fortschrittswert und Kurvengeometrie.
//!
//! Der Engine-Zustand besteht nur aus dem animierten Steuerpunkt und dem
//! zuletzt festgeschriebenen Fortschrittswert. Alles Zeichnen ist eine reine
//! Funktion dieses Zustands plus der Viewport-Größe.

use crate::core::{
    build_clip_region, build_curve, ClipMargins, ClipRect, ControlPointAnimation, CurveGeometry,
    ProgressRange, SpringAnimation, ViewportSize,
};
use crate::shared::SliderOptions;
use glam::Vec2;

/// Ergebnis einer festschreibenden Operation (Tap, Drag-Ende, programmatisch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commit {
    /// Neues Ziel des Steuerpunkts (immer auf der vertikalen Mitte)
    pub control_point: Vec2,
    /// Festgeschriebener Fortschrittswert in `[0, max]`
    pub progress: u32,
}

/// Abbildung zwischen Zeiger-Eingaben, Fortschrittswert und Kurvengeometrie.
#[derive(Debug)]
pub struct CurveSliderEngine {
    range: ProgressRange,
    initial_progress: u32,
    clip_margins: ClipMargins,
    animation: Box<dyn ControlPointAnimation>,
    progress: u32,
    viewport: Option<ViewportSize>,
}

impl CurveSliderEngine {
    /// Erstellt eine Engine. Ungültige Werte werden geklemmt und geloggt.
    pub fn new(
        initial_progress: u32,
        max_progress: u32,
        clip_margins: ClipMargins,
        animation: Box<dyn ControlPointAnimation>,
    ) -> Self {
        let range = ProgressRange::new(max_progress);
        let initial_progress = range.normalize_initial(initial_progress);
        Self {
            range,
            initial_progress,
            clip_margins,
            animation,
            progress: initial_progress,
            viewport: None,
        }
    }

    /// Engine mit Feder-Animation gemäß Optionen.
    pub fn from_options(options: &SliderOptions) -> Self {
        Self::with_animation(
            options,
            Box::new(SpringAnimation::new(Vec2::ZERO, options.spring_params())),
        )
    }

    /// Engine gemäß Optionen mit beliebiger Animationsstrategie.
    pub fn with_animation(
        options: &SliderOptions,
        animation: Box<dyn ControlPointAnimation>,
    ) -> Self {
        Self::new(
            options.initial_progress,
            options.max_progress,
            options.clip_margins(),
            animation,
        )
    }

    /// Setzt den Steuerpunkt auf die Startposition `(initial/max · w, h/2)`, ohne Animation.
    pub fn initialize(&mut self, viewport: ViewportSize) -> Vec2 {
        let x = self.range.x_for_progress(self.initial_progress, viewport);
        let control_point = viewport.rest_point(x);
        self.animation.snap_to(control_point);
        self.progress = self.initial_progress;
        self.viewport = Some(viewport);
        control_point
    }

    /// Ob bereits ein Layout-Durchlauf stattgefunden hat.
    pub fn is_initialized(&self) -> bool {
        self.viewport.is_some()
    }

    /// Übernimmt eine neue Viewport-Größe.
    ///
    /// Beim ersten Aufruf wird initialisiert; danach wird der Steuerpunkt aus dem
    /// festgeschriebenen Wert neu abgeleitet, sobald sich die Größe ändert.
    pub fn resize(&mut self, viewport: ViewportSize) {
        match self.viewport {
            None => {
                self.initialize(viewport);
            }
            Some(previous) if previous != viewport => {
                let x = self.range.x_for_progress(self.progress, viewport);
                self.animation.snap_to(viewport.rest_point(x));
                self.viewport = Some(viewport);
            }
            Some(_) => {}
        }
    }

    /// Merkt sich eine neue Viewport-Größe, ohne den Steuerpunkt zu versetzen.
    ///
    /// Für Größenänderungen während eines Drags: der Zeiger führt den Steuerpunkt,
    /// das Drag-Ende schreibt den Wert in der neuen Größe fest.
    pub fn track_viewport(&mut self, viewport: ViewportSize) {
        if self.viewport.is_none() {
            self.initialize(viewport);
        } else {
            self.viewport = Some(viewport);
        }
    }

    /// Tap: Steuerpunkt auf `(x, h/2)` mit X auf `[0, w]` geklemmt, Wert festschreiben.
    pub fn on_tap(&mut self, position: Vec2, viewport: ViewportSize) -> Commit {
        self.commit_at(position.x, viewport)
    }

    /// Drag-Bewegung: Steuerpunkt folgt dem geklemmten Zeiger, kein Festschreiben.
    pub fn on_drag_update(&mut self, position: Vec2, viewport: ViewportSize) -> Vec2 {
        let control_point = viewport.clamp_point(position);
        self.animation.retarget(control_point);
        control_point
    }

    /// Drag-Ende: Steuerpunkt zurück auf die Mitte, Wert festschreiben.
    pub fn on_drag_end(&mut self, position: Vec2, viewport: ViewportSize) -> Commit {
        self.commit_at(position.x, viewport)
    }

    /// Abgebrochener Drag: zurück zur Ruheposition des festgeschriebenen Werts.
    pub fn on_drag_cancel(&mut self, viewport: ViewportSize) -> Vec2 {
        let x = self.range.x_for_progress(self.progress, viewport);
        let control_point = viewport.rest_point(x);
        self.animation.retarget(control_point);
        control_point
    }

    /// Setzt den Wert programmatisch (geklemmt, animiert).
    pub fn set_progress(&mut self, progress: u32, viewport: ViewportSize) -> Commit {
        let progress = progress.min(self.range.max());
        let control_point = viewport.rest_point(self.range.x_for_progress(progress, viewport));
        self.animation.retarget(control_point);
        self.progress = progress;
        Commit {
            control_point,
            progress,
        }
    }

    /// Wie [`Self::set_progress`], aber ohne Animation.
    pub fn snap_to_progress(&mut self, progress: u32, viewport: ViewportSize) -> Commit {
        let commit = self.set_progress(progress, viewport);
        self.animation.snap_to(commit.control_point);
        commit
    }

    /// Schreitet die Animation um `dt` Sekunden fort.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.animation.advance(dt)
    }

    /// Ob sich der sichtbare Steuerpunkt noch bewegt.
    pub fn is_animating(&self) -> bool {
        !self.animation.is_settled()
    }

    /// Sichtbarer (animierter) Steuerpunkt.
    pub fn control_point(&self) -> Vec2 {
        self.animation.position()
    }

    /// Ziel des Steuerpunkts (letzte Eingabe).
    pub fn target_point(&self) -> Vec2 {
        self.animation.target()
    }

    /// Zuletzt festgeschriebener Fortschrittswert.
    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn max_progress(&self) -> u32 {
        self.range.max()
    }

    /// Kurve für den aktuellen Frame.
    pub fn build_curve(&self, viewport: ViewportSize) -> CurveGeometry {
        build_curve(self.control_point(), viewport)
    }

    /// Fortschritts-Maske für den aktuellen Frame.
    pub fn build_clip_region(&self, viewport: ViewportSize) -> ClipRect {
        build_clip_region(self.control_point(), viewport, self.clip_margins)
    }

    fn commit_at(&mut self, x: f32, viewport: ViewportSize) -> Commit {
        let control_point = viewport.rest_point(x);
        let progress = self.range.progress_for_x(control_point.x, viewport);
        self.animation.retarget(control_point);
        self.progress = progress;
        Commit {
            control_point,
            progress,
        }
    }
}
