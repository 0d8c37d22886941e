//! Einbettbarer Slider: verbindet Gesten-Automat, Engine und Fortschritts-Listener.
//!
//! Der Slider wird vom UI-Thread mit [`SliderIntent`]s gefüttert und liefert pro
//! Frame einen [`SliderFrame`] als reine Zeichen-Beschreibung.

use super::engine::{Commit, CurveSliderEngine};
use super::events::SliderIntent;
use super::gesture::{Gesture, GesturePhase, GestureTracker, PointerEvent};
use crate::core::{ClipRect, ControlPointAnimation, ViewportSize};
use crate::shared::SliderOptions;
use glam::Vec2;

/// Callback für festgeschriebene Werte (Tap und Drag-Ende).
pub type ProgressListener = Box<dyn FnMut(u32)>;

/// Read-only Zeichendaten für einen Frame.
#[derive(Debug, Clone)]
pub struct SliderFrame {
    pub viewport: ViewportSize,
    /// Polylinie der Kurve (Track und Fortschritt teilen sich den Pfad)
    pub curve_points: Vec<Vec2>,
    /// Maske für den eingefärbten Anteil
    pub clip: ClipRect,
    /// Sichtbarer Steuerpunkt
    pub control_point: Vec2,
}

/// Gekrümmter Fortschritts-Slider mit Listener.
pub struct CurvedProgressSlider {
    engine: CurveSliderEngine,
    gestures: GestureTracker,
    viewport: Option<ViewportSize>,
    options: SliderOptions,
    listener: Option<ProgressListener>,
}

impl CurvedProgressSlider {
    /// Slider mit Feder-Animation gemäß Optionen.
    pub fn new(options: SliderOptions) -> Self {
        let engine = CurveSliderEngine::from_options(&options);
        Self::from_engine(options, engine)
    }

    /// Slider mit eigener Animationsstrategie (z.B. sofortiges Einrasten in Tests).
    pub fn with_animation(options: SliderOptions, animation: Box<dyn ControlPointAnimation>) -> Self {
        let engine = CurveSliderEngine::with_animation(&options, animation);
        Self::from_engine(options, engine)
    }

    fn from_engine(options: SliderOptions, engine: CurveSliderEngine) -> Self {
        Self {
            engine,
            gestures: GestureTracker::new(options.drag_threshold),
            viewport: None,
            options,
            listener: None,
        }
    }

    /// Registriert den Listener für festgeschriebene Werte.
    pub fn on_progress_change(mut self, listener: impl FnMut(u32) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Verarbeitet einen Intent. Gibt den festgeschriebenen Wert zurück, falls einer entstand.
    ///
    /// Der Listener wird nur für Tap und Drag-Ende aufgerufen.
    pub fn handle_intent(&mut self, intent: SliderIntent) -> Option<u32> {
        match intent {
            SliderIntent::ViewportResized { size } => {
                self.set_viewport(size);
                None
            }
            SliderIntent::PointerPressed { pos } => self.handle_pointer(PointerEvent::Down(pos)),
            SliderIntent::PointerMoved { pos } => self.handle_pointer(PointerEvent::Move(pos)),
            SliderIntent::PointerReleased { pos } => self.handle_pointer(PointerEvent::Up(pos)),
            SliderIntent::PointerCancelled => self.handle_pointer(PointerEvent::Cancel),
            SliderIntent::FrameAdvanced { dt } => {
                self.engine.advance(dt);
                None
            }
            SliderIntent::ProgressSetRequested { progress } => {
                if let Some(viewport) = self.viewport {
                    self.engine.set_progress(progress, viewport);
                } else {
                    log::debug!("Fortschritt {} vor erstem Layout ignoriert", progress);
                }
                None
            }
            SliderIntent::OptionsChanged { options } => {
                self.apply_options(options);
                None
            }
        }
    }

    fn set_viewport(&mut self, size: ViewportSize) {
        self.viewport = Some(size);
        // Während eines Drags nur merken, das Drag-Ende zentriert ohnehin neu
        if self.gestures.phase() == GesturePhase::Dragging {
            self.engine.track_viewport(size);
        } else {
            self.engine.resize(size);
        }
    }

    fn handle_pointer(&mut self, event: PointerEvent) -> Option<u32> {
        let viewport = self.viewport?;
        let gesture = self.gestures.handle(event)?;
        let commit = match gesture {
            Gesture::Tap(pos) => Some(self.engine.on_tap(pos, viewport)),
            Gesture::DragUpdate(pos) => {
                self.engine.on_drag_update(pos, viewport);
                None
            }
            Gesture::DragEnd(pos) => Some(self.engine.on_drag_end(pos, viewport)),
            Gesture::DragCancel => {
                self.engine.on_drag_cancel(viewport);
                None
            }
        };
        commit.map(|commit| self.notify(commit))
    }

    fn notify(&mut self, commit: Commit) -> u32 {
        if let Some(listener) = self.listener.as_mut() {
            listener(commit.progress);
        }
        commit.progress
    }

    fn apply_options(&mut self, options: SliderOptions) {
        let engine_changed = options.max_progress != self.options.max_progress
            || options.initial_progress != self.options.initial_progress
            || options.damping_ratio != self.options.damping_ratio
            || options.stiffness != self.options.stiffness
            || options.clip_margins() != self.options.clip_margins();

        if engine_changed {
            let keep_progress = options.initial_progress == self.options.initial_progress;
            let progress = self.engine.progress();
            self.engine = CurveSliderEngine::from_options(&options);
            if let Some(viewport) = self.viewport {
                self.engine.initialize(viewport);
                if keep_progress {
                    self.engine.snap_to_progress(progress, viewport);
                }
            }
            log::info!(
                "Slider-Engine neu aufgebaut (max = {}, Fortschritt = {})",
                self.engine.max_progress(),
                self.engine.progress()
            );
        }

        self.gestures.set_drag_threshold(options.drag_threshold);
        self.options = options;
    }

    /// Zeichendaten für den aktuellen Frame (None vor dem ersten Layout).
    pub fn build_frame(&self) -> Option<SliderFrame> {
        let viewport = self.viewport?;
        let curve = self.engine.build_curve(viewport);
        Some(SliderFrame {
            viewport,
            curve_points: curve.sample(self.options.curve_segments),
            clip: self.engine.build_clip_region(viewport),
            control_point: self.engine.control_point(),
        })
    }

    /// Zuletzt festgeschriebener Wert.
    pub fn progress(&self) -> u32 {
        self.engine.progress()
    }

    pub fn max_progress(&self) -> u32 {
        self.engine.max_progress()
    }

    /// Ob weitere Frames nötig sind (Animation läuft oder Zeiger gedrückt).
    pub fn needs_repaint(&self) -> bool {
        self.engine.is_animating() || self.gestures.is_pressed()
    }

    /// Ob gerade ein Zeiger auf dem Slider gedrückt ist.
    pub fn is_pressed(&self) -> bool {
        self.gestures.is_pressed()
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.phase() == GesturePhase::Dragging
    }

    pub fn engine(&self) -> &CurveSliderEngine {
        &self.engine
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn viewport(&self) -> Option<ViewportSize> {
        self.viewport
    }
}

impl std::fmt::Debug for CurvedProgressSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurvedProgressSlider")
            .field("engine", &self.engine)
            .field("gestures", &self.gestures)
            .field("viewport", &self.viewport)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
