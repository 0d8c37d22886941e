use super::{build_clip_region, build_curve, quadratic_bezier, ClipMargins, ClipRect};
use crate::core::ViewportSize;
use approx::assert_abs_diff_eq;
use glam::Vec2;

// ── Quadratische Bézier ──

#[test]
fn test_quadratic_bezier_endpoints() {
    let p0 = Vec2::new(0.0, 0.0);
    let p1 = Vec2::new(5.0, 10.0);
    let p2 = Vec2::new(10.0, 0.0);

    let start = quadratic_bezier(p0, p1, p2, 0.0);
    let end = quadratic_bezier(p0, p1, p2, 1.0);
    let mid = quadratic_bezier(p0, p1, p2, 0.5);

    assert!((start - p0).length() < 0.001);
    assert!((end - p2).length() < 0.001);
    assert!((mid - Vec2::new(5.0, 5.0)).length() < 0.001);
}

// ── Kurve ──

#[test]
fn test_build_curve_anchors_on_vertical_center() {
    let viewport = ViewportSize::new(300.0, 200.0);
    for control in [
        Vec2::new(0.0, 0.0),
        Vec2::new(150.0, 200.0),
        Vec2::new(-40.0, 90.0),
        Vec2::new(300.0, 100.0),
    ] {
        let curve = build_curve(control, viewport);
        assert_eq!(curve.start, Vec2::new(0.0, 100.0));
        assert_eq!(curve.end, Vec2::new(300.0, 100.0));
        assert_eq!(curve.control, control);
    }
}

#[test]
fn test_curve_sample_hits_endpoints_exactly() {
    let viewport = ViewportSize::new(300.0, 200.0);
    let curve = build_curve(Vec2::new(120.0, 20.0), viewport);

    let points = curve.sample(16);
    assert_eq!(points.len(), 17);
    assert_eq!(points[0], curve.start);
    assert_eq!(points[16], curve.end);
}

#[test]
fn test_curve_sample_zero_segments_yields_line() {
    let viewport = ViewportSize::new(300.0, 200.0);
    let curve = build_curve(Vec2::new(120.0, 20.0), viewport);

    let points = curve.sample(0);
    assert_eq!(points, vec![curve.start, curve.end]);
}

#[test]
fn test_flat_control_point_gives_straight_track() {
    let viewport = ViewportSize::new(300.0, 200.0);
    let curve = build_curve(Vec2::new(150.0, 100.0), viewport);

    for point in curve.sample(10) {
        assert_abs_diff_eq!(point.y, 100.0, epsilon = 1e-4);
    }
}

#[test]
fn test_curve_apex_bends_toward_control_point() {
    let viewport = ViewportSize::new(300.0, 200.0);
    let curve = build_curve(Vec2::new(150.0, 0.0), viewport);

    // B(0.5) = 0.25·P0 + 0.5·P1 + 0.25·P2
    let apex = curve.point_at(0.5);
    assert_abs_diff_eq!(apex.x, 150.0, epsilon = 1e-4);
    assert_abs_diff_eq!(apex.y, 50.0, epsilon = 1e-4);
}

// ── Clip-Region ──

#[test]
fn test_clip_region_uses_default_margins() {
    let viewport = ViewportSize::new(300.0, 200.0);
    let clip = build_clip_region(Vec2::new(90.0, 40.0), viewport, ClipMargins::default());

    assert_eq!(clip.min, Vec2::new(-100.0, -100.0));
    assert_eq!(clip.max, Vec2::new(90.0, 350.0));
}

#[test]
fn test_clip_region_respects_custom_margins() {
    let viewport = ViewportSize::new(300.0, 200.0);
    let margins = ClipMargins {
        left: 10.0,
        top: 20.0,
        bottom: 30.0,
    };
    let clip = build_clip_region(Vec2::new(75.0, 0.0), viewport, margins);

    assert_eq!(clip.min, Vec2::new(-10.0, -20.0));
    assert_eq!(clip.max, Vec2::new(75.0, 230.0));
}

#[test]
fn test_clip_region_masks_only_left_of_control_point() {
    let viewport = ViewportSize::new(300.0, 200.0);
    let clip = build_clip_region(Vec2::new(150.0, 100.0), viewport, ClipMargins::default());

    assert!(clip.contains(Vec2::new(0.0, 100.0)));
    assert!(clip.contains(Vec2::new(150.0, 100.0)));
    assert!(!clip.contains(Vec2::new(150.5, 100.0)));
    assert!(!clip.contains(Vec2::new(300.0, 100.0)));
}

#[test]
fn test_clip_rect_translate() {
    let clip = ClipRect {
        min: Vec2::new(-100.0, -100.0),
        max: Vec2::new(50.0, 350.0),
    };
    let moved = clip.translate(Vec2::new(30.0, 40.0));
    assert_eq!(moved.min, Vec2::new(-70.0, -60.0));
    assert_eq!(moved.max, Vec2::new(80.0, 390.0));
}
