//! Animation des Steuerpunkts: gedämpfte Feder oder sofortiges Einrasten.
//!
//! Die Animation läuft kooperativ im Render-Loop: jeder Frame ruft
//! [`ControlPointAnimation::advance`] mit der vergangenen Zeit auf. Neue Gesten
//! setzen lediglich ein neues Ziel, ein Abbruch ist nicht nötig.

use crate::shared::options::{self, DAMPING_RATIO_RANGE, STIFFNESS_RANGE};
use glam::Vec2;

/// Maximale Frame-Zeit pro `advance`-Aufruf (s). Längere Pausen werden gekappt.
pub const MAX_FRAME_DT: f32 = 0.1;
/// Maximale Schrittweite des Integrators (s).
pub const MAX_SUBSTEP: f32 = 1.0 / 240.0;
/// Unterhalb dieses Abstands (px) gilt die Feder als eingeschwungen.
pub const SETTLE_DISTANCE: f32 = 0.5;
/// Unterhalb dieser Geschwindigkeit (px/s) gilt die Feder als eingeschwungen.
pub const SETTLE_SPEED: f32 = 0.5;

/// Austauschbare Interpolationsstrategie für den Steuerpunkt.
pub trait ControlPointAnimation: std::fmt::Debug {
    /// Aktuelle (sichtbare) Position.
    fn position(&self) -> Vec2;
    /// Zielposition, der sich die Animation nähert.
    fn target(&self) -> Vec2;
    /// Setzt ein neues Ziel; die aktuelle Position und Geschwindigkeit bleiben erhalten.
    fn retarget(&mut self, target: Vec2);
    /// Setzt Position und Ziel sofort, ohne Animation.
    fn snap_to(&mut self, position: Vec2);
    /// Schreitet um `dt` Sekunden fort und gibt die neue Position zurück.
    fn advance(&mut self, dt: f32) -> Vec2;
    /// Ob Position und Ziel zusammenfallen und keine Bewegung mehr ansteht.
    fn is_settled(&self) -> bool;
}

/// Parameter der Feder (Masse 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Dämpfungsverhältnis ζ (< 1 = unterdämpft, schwingt über)
    pub damping_ratio: f32,
    /// Federsteifigkeit k
    pub stiffness: f32,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            damping_ratio: options::DAMPING_RATIO,
            stiffness: options::STIFFNESS,
        }
    }
}

/// Gedämpfter harmonischer Oszillator, semi-implizit integriert.
///
/// `a = -k·(x - ziel) - 2ζ√k·v`
#[derive(Debug, Clone)]
pub struct SpringAnimation {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    params: SpringParams,
}

impl SpringAnimation {
    /// Erstellt eine ruhende Feder an `position`.
    ///
    /// Die Parameter werden auf den stabilen Bereich des Integrators geklemmt.
    pub fn new(position: Vec2, params: SpringParams) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target: position,
            params: SpringParams {
                damping_ratio: options::clamp_f32(
                    "damping_ratio",
                    params.damping_ratio,
                    options::DAMPING_RATIO,
                    DAMPING_RATIO_RANGE,
                ),
                stiffness: options::clamp_f32(
                    "stiffness",
                    params.stiffness,
                    options::STIFFNESS,
                    STIFFNESS_RANGE,
                ),
            },
        }
    }

    /// Aktuelle Geschwindigkeit (px/s).
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Verwendete Federparameter.
    pub fn params(&self) -> SpringParams {
        self.params
    }

    fn step(&mut self, h: f32) {
        let k = self.params.stiffness;
        let c = 2.0 * self.params.damping_ratio * k.sqrt();
        let accel = -k * (self.position - self.target) - c * self.velocity;
        self.velocity += accel * h;
        self.position += self.velocity * h;
    }
}

impl ControlPointAnimation for SpringAnimation {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn target(&self) -> Vec2 {
        self.target
    }

    fn retarget(&mut self, target: Vec2) {
        self.target = target;
    }

    fn snap_to(&mut self, position: Vec2) {
        self.position = position;
        self.target = position;
        self.velocity = Vec2::ZERO;
    }

    fn advance(&mut self, dt: f32) -> Vec2 {
        if !(dt > 0.0) || self.is_settled() {
            return self.position;
        }
        let dt = dt.min(MAX_FRAME_DT);
        let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as usize;
        let h = dt / substeps as f32;
        for _ in 0..substeps {
            self.step(h);
        }

        if !(self.position.is_finite() && self.velocity.is_finite()) {
            log::warn!("Feder divergiert, rastet auf Ziel {:?} ein", self.target);
            self.snap_to(self.target);
            return self.position;
        }

        if self.position.distance(self.target) < SETTLE_DISTANCE
            && self.velocity.length() < SETTLE_SPEED
        {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
        self.position
    }

    fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == Vec2::ZERO
    }
}

/// Deterministische Variante: die Position folgt dem Ziel ohne Verzögerung.
#[derive(Debug, Clone, Default)]
pub struct InstantAnimation {
    position: Vec2,
}

impl InstantAnimation {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

impl ControlPointAnimation for InstantAnimation {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn target(&self) -> Vec2 {
        self.position
    }

    fn retarget(&mut self, target: Vec2) {
        self.position = target;
    }

    fn snap_to(&mut self, position: Vec2) {
        self.position = position;
    }

    fn advance(&mut self, _dt: f32) -> Vec2 {
        self.position
    }

    fn is_settled(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests;
