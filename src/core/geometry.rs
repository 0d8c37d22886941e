//! Kurven- und Clip-Geometrie des Sliders (quadratische Bézier, Fortschritts-Maske).

use super::ViewportSize;
use glam::Vec2;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Quadratische Bézier-Kurve von `(0, h/2)` über den Steuerpunkt nach `(w, h/2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveGeometry {
    pub start: Vec2,
    pub control: Vec2,
    pub end: Vec2,
}

impl CurveGeometry {
    /// Kurvenpunkt für Parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f32) -> Vec2 {
        quadratic_bezier(self.start, self.control, self.end, t)
    }

    /// Polylinie mit `segments + 1` Punkten, gleichmäßig in `t` verteilt.
    ///
    /// Erster und letzter Punkt sind exakt Start bzw. Ende.
    pub fn sample(&self, segments: usize) -> Vec<Vec2> {
        let segments = segments.max(1);
        let mut points = Vec::with_capacity(segments + 1);
        points.push(self.start);
        for i in 1..segments {
            points.push(self.point_at(i as f32 / segments as f32));
        }
        points.push(self.end);
        points
    }
}

/// Baut die Kurve für den aktuellen Steuerpunkt.
///
/// Start und Ende liegen immer auf der vertikalen Mitte, nur der Steuerpunkt bewegt sich.
pub fn build_curve(control_point: Vec2, viewport: ViewportSize) -> CurveGeometry {
    CurveGeometry {
        start: viewport.curve_start(),
        control: control_point,
        end: viewport.curve_end(),
    }
}

/// Ränder der Fortschritts-Maske jenseits des Viewports (Darstellungskonstanten).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipMargins {
    pub left: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for ClipMargins {
    fn default() -> Self {
        use crate::shared::options::{CLIP_MARGIN_BOTTOM, CLIP_MARGIN_LEFT, CLIP_MARGIN_TOP};
        Self {
            left: CLIP_MARGIN_LEFT,
            top: CLIP_MARGIN_TOP,
            bottom: CLIP_MARGIN_BOTTOM,
        }
    }
}

/// Achsenparalleles Rechteck in Viewport-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ClipRect {
    /// Ob der Punkt innerhalb (inklusive Rand) liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Rechteck um `offset` verschoben (Viewport → Bildschirm).
    pub fn translate(&self, offset: Vec2) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// Maske für den „erledigten" Teil: von `(-left, -top)` bis `(cp.x, h + bottom)`.
///
/// Nur der Anteil der Fortschrittslinie links vom Steuerpunkt wird eingefärbt.
pub fn build_clip_region(
    control_point: Vec2,
    viewport: ViewportSize,
    margins: ClipMargins,
) -> ClipRect {
    ClipRect {
        min: Vec2::new(-margins.left, -margins.top),
        max: Vec2::new(control_point.x, viewport.height + margins.bottom),
    }
}

#[cfg(test)]
mod tests;
