//! Zeichenfläche des Sliders in geräteunabhängigen Pixeln.

use glam::Vec2;

/// Größe der vom Host zugeteilten Zeichenfläche (Breite × Höhe).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    /// Erstellt eine neue Viewport-Größe.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Vertikale Mitte, auf der Start- und Endpunkt der Kurve liegen.
    pub fn center_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Startpunkt der Kurve `(0, h/2)`.
    pub fn curve_start(&self) -> Vec2 {
        Vec2::new(0.0, self.center_y())
    }

    /// Endpunkt der Kurve `(w, h/2)`.
    pub fn curve_end(&self) -> Vec2 {
        Vec2::new(self.width, self.center_y())
    }

    /// Klemmt X auf `[0, w]`. Bei nicht-positiver Breite immer 0.
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.width.max(0.0))
    }

    /// Klemmt einen Punkt auf `[0, w] × [0, h]`.
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            self.clamp_x(point.x),
            point.y.clamp(0.0, self.height.max(0.0)),
        )
    }

    /// Punkt auf der Mittellinie mit geklemmtem X (Ruheposition nach einem Commit).
    pub fn rest_point(&self, x: f32) -> Vec2 {
        Vec2::new(self.clamp_x(x), self.center_y())
    }

    /// Ob die Fläche zum Zeichnen und Abbilden nutzbar ist.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height >= 0.0)
    }
}

impl From<[f32; 2]> for ViewportSize {
    fn from(size: [f32; 2]) -> Self {
        Self::new(size[0], size[1])
    }
}

impl From<Vec2> for ViewportSize {
    fn from(size: Vec2) -> Self {
        Self::new(size.x, size.y)
    }
}
