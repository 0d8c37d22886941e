//! Curved Progress Slider Library.
//! Slider-Engine, Gesten-Automat und egui-Widget, als Library exportiert für Tests und Einbettung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    AppController, AppIntent, AppState, Commit, CurveSliderEngine, CurvedProgressSlider, Gesture,
    GesturePhase, GestureTracker, PointerEvent, SliderFrame, SliderIntent,
};
pub use core::{
    ClipMargins, ClipRect, ControlPointAnimation, CurveGeometry, InstantAnimation, ProgressRange,
    SpringAnimation, SpringParams, ViewportSize,
};
pub use shared::SliderOptions;
