//! Gesten-Erkennung: Tap vs. Drag als expliziter Zustandsautomat.
//!
//! `Idle --down--> Idle(gedrückt) --move > Schwelle--> Dragging --up--> Idle`
//!
//! Ein Druck ohne Bewegung über die Schwelle wird beim Loslassen als Tap an der
//! Druckposition gemeldet.

use glam::Vec2;

/// Rohe Zeiger-Ereignisse in Viewport-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
    /// Zeiger verloren (Fenster verlassen, Fokuswechsel)
    Cancel,
}

/// Erkannte Gesten, die die Engine verarbeitet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap(Vec2),
    DragUpdate(Vec2),
    DragEnd(Vec2),
    DragCancel,
}

/// Phase des Automaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging,
}

/// Zustandsautomat für einen einzelnen Zeiger.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    phase: GesturePhase,
    press_origin: Option<Vec2>,
    last_position: Vec2,
    drag_threshold: f32,
}

impl GestureTracker {
    /// Erstellt einen Automaten mit der gegebenen Drag-Schwelle (px).
    pub fn new(drag_threshold: f32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            press_origin: None,
            last_position: Vec2::ZERO,
            drag_threshold: drag_threshold.max(0.0),
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Ob ein Zeiger gedrückt ist (mit oder ohne Drag).
    pub fn is_pressed(&self) -> bool {
        self.press_origin.is_some()
    }

    pub fn set_drag_threshold(&mut self, drag_threshold: f32) {
        self.drag_threshold = drag_threshold.max(0.0);
    }

    /// Verarbeitet ein Zeiger-Ereignis und gibt ggf. eine erkannte Geste zurück.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Gesture> {
        match (self.phase, event) {
            (GesturePhase::Idle, PointerEvent::Down(pos)) => {
                self.press_origin = Some(pos);
                self.last_position = pos;
                None
            }
            (GesturePhase::Idle, PointerEvent::Move(pos)) => {
                let origin = self.press_origin?;
                self.last_position = pos;
                if origin.distance(pos) > self.drag_threshold {
                    self.phase = GesturePhase::Dragging;
                    log::debug!("Drag gestartet bei ({:.1}, {:.1})", pos.x, pos.y);
                    Some(Gesture::DragUpdate(pos))
                } else {
                    None
                }
            }
            (GesturePhase::Idle, PointerEvent::Up(_)) => {
                let origin = self.press_origin.take()?;
                log::debug!("Tap bei ({:.1}, {:.1})", origin.x, origin.y);
                Some(Gesture::Tap(origin))
            }
            (GesturePhase::Idle, PointerEvent::Cancel) => {
                self.press_origin = None;
                None
            }
            (GesturePhase::Dragging, PointerEvent::Move(pos)) => {
                self.last_position = pos;
                Some(Gesture::DragUpdate(pos))
            }
            (GesturePhase::Dragging, PointerEvent::Up(_)) => {
                // Festgeschrieben wird die letzte Drag-Position, nicht die Loslass-Position
                self.reset();
                let pos = self.last_position;
                log::debug!("Drag beendet bei ({:.1}, {:.1})", pos.x, pos.y);
                Some(Gesture::DragEnd(pos))
            }
            (GesturePhase::Dragging, PointerEvent::Cancel) => {
                self.reset();
                log::debug!("Drag abgebrochen");
                Some(Gesture::DragCancel)
            }
            (GesturePhase::Dragging, PointerEvent::Down(pos)) => {
                // Verpasstes Up: laufenden Drag festschreiben, neuer Druck beginnt
                let last = self.last_position;
                self.reset();
                self.press_origin = Some(pos);
                self.last_position = pos;
                Some(Gesture::DragEnd(last))
            }
        }
    }

    fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.press_origin = None;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(crate::shared::options::DRAG_THRESHOLD)
    }
}
