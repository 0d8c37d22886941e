//! Toolkit-unabhängige Kern-Mathematik des Sliders.
//!
//! - `viewport`  — Zeichenfläche und Koordinaten-Klemmung
//! - `progress`  — Abbildung Zeiger-X ↔ Fortschrittswert
//! - `geometry`  — Bézier-Kurve und Fortschritts-Maske
//! - `animation` — Feder-/Sofort-Animation des Steuerpunkts

pub mod animation;
pub mod geometry;
pub mod progress;
pub mod viewport;

pub use animation::{ControlPointAnimation, InstantAnimation, SpringAnimation, SpringParams};
pub use geometry::{
    build_clip_region, build_curve, quadratic_bezier, ClipMargins, ClipRect, CurveGeometry,
};
pub use progress::ProgressRange;
pub use viewport::ViewportSize;
