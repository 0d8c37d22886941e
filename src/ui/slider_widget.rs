//! egui-Adapter des Sliders: Zeiger-Input → SliderIntents, SliderFrame → Shapes.

use crate::app::{CurvedProgressSlider, SliderFrame, SliderIntent};
use crate::core::ViewportSize;
use glam::Vec2;

/// Zeigt den Slider über die volle verfügbare Breite.
///
/// Festgeschriebene Werte gehen an den Listener des Sliders; die Response
/// ist in diesem Frame zusätzlich als `changed` markiert.
pub fn show_curved_slider(ui: &mut egui::Ui, slider: &mut CurvedProgressSlider) -> egui::Response {
    let desired = egui::vec2(ui.available_width(), slider.options().slider_height);
    let (rect, mut response) = ui.allocate_exact_size(desired, egui::Sense::click_and_drag());

    slider.handle_intent(SliderIntent::ViewportResized {
        size: ViewportSize::new(rect.width(), rect.height()),
    });

    let mut committed = false;
    for intent in collect_pointer_intents(ui, &response, rect, slider.is_pressed()) {
        committed |= slider.handle_intent(intent).is_some();
    }

    let dt = ui.input(|i| i.stable_dt);
    slider.handle_intent(SliderIntent::FrameAdvanced { dt });

    if let Some(frame) = slider.build_frame() {
        paint_slider(ui.painter(), rect, &frame, slider.options());
    }

    if slider.needs_repaint() {
        ui.ctx().request_repaint();
    }
    if committed {
        response.mark_changed();
    }
    response
}

/// Übersetzt den egui-Zeigerzustand dieses Frames in Slider-Intents (lokale Koordinaten).
fn collect_pointer_intents(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    tracking: bool,
) -> Vec<SliderIntent> {
    let (pressed, released, down, moving, pointer_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
            i.pointer.is_moving(),
            i.pointer.interact_pos(),
        )
    });

    let mut intents = Vec::new();

    let Some(pointer_pos) = pointer_pos else {
        if tracking {
            intents.push(SliderIntent::PointerCancelled);
        }
        return intents;
    };
    let local = Vec2::new(pointer_pos.x - rect.min.x, pointer_pos.y - rect.min.y);

    let started_here = pressed && response.hovered();
    if started_here {
        intents.push(SliderIntent::PointerPressed { pos: local });
    }

    let active = tracking || started_here;
    if !active {
        return intents;
    }

    if moving {
        intents.push(SliderIntent::PointerMoved { pos: local });
    }

    if released {
        intents.push(SliderIntent::PointerReleased { pos: local });
    } else if !down && !started_here {
        // Loslassen verpasst (z.B. Fokuswechsel)
        intents.push(SliderIntent::PointerCancelled);
    }

    intents
}

/// Zeichnet Track und maskierte Fortschrittslinie.
fn paint_slider(
    painter: &egui::Painter,
    rect: egui::Rect,
    frame: &SliderFrame,
    options: &crate::shared::SliderOptions,
) {
    let points: Vec<egui::Pos2> = frame
        .curve_points
        .iter()
        .map(|p| egui::pos2(rect.min.x + p.x, rect.min.y + p.y))
        .collect();

    let track = egui::Stroke::new(options.track_width, to_color32(options.track_color));
    paint_round_stroke(painter, &points, track);

    let clip = frame.clip.translate(Vec2::new(rect.min.x, rect.min.y));
    let clip_rect = egui::Rect::from_min_max(
        egui::pos2(clip.min.x, clip.min.y),
        egui::pos2(clip.max.x, clip.max.y),
    );
    let progress = egui::Stroke::new(options.progress_width, to_color32(options.progress_color));
    paint_round_stroke(&painter.with_clip_rect(clip_rect), &points, progress);
}

/// Polylinie mit runden Enden.
fn paint_round_stroke(painter: &egui::Painter, points: &[egui::Pos2], stroke: egui::Stroke) {
    if points.len() < 2 {
        return;
    }
    painter.add(egui::Shape::line(points.to_vec(), stroke));

    let radius = stroke.width / 2.0;
    if let (Some(first), Some(last)) = (points.first(), points.last()) {
        painter.circle_filled(*first, radius, stroke.color);
        painter.circle_filled(*last, radius, stroke.color);
    }
}

/// RGBA-Float-Farbe aus den Optionen → egui-Farbe.
pub(crate) fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::to_color32;

    #[test]
    fn test_to_color32_opaque() {
        let c = to_color32([1.0, 0.0, 0.0, 1.0]);
        assert_eq!(c, egui::Color32::from_rgba_unmultiplied(255, 0, 0, 255));
    }

    #[test]
    fn test_to_color32_clamps_out_of_range_channels() {
        let c = to_color32([2.0, -1.0, 0.5, 1.5]);
        assert_eq!(c, egui::Color32::from_rgba_unmultiplied(255, 0, 127, 255));
    }
}
