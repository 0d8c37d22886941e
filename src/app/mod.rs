//! Application-Layer: Slider-Engine, Gesten, Events, Controller und State.

pub mod controller;
pub mod engine;
pub mod events;
pub mod gesture;
pub mod slider;
/// Zustand des Host-Bildschirms
pub mod state;

pub use controller::AppController;
pub use engine::{Commit, CurveSliderEngine};
pub use events::{AppIntent, SliderIntent};
pub use gesture::{Gesture, GesturePhase, GestureTracker, PointerEvent};
pub use slider::{CurvedProgressSlider, ProgressListener, SliderFrame};
pub use state::AppState;
