use super::ProgressRange;
use crate::core::ViewportSize;
use approx::assert_abs_diff_eq;

fn viewport() -> ViewportSize {
    ViewportSize::new(300.0, 200.0)
}

#[test]
fn test_progress_for_x_midpoint() {
    let range = ProgressRange::new(100);
    assert_eq!(range.progress_for_x(150.0, viewport()), 50);
}

#[test]
fn test_progress_for_x_endpoints() {
    let range = ProgressRange::new(100);
    assert_eq!(range.progress_for_x(0.0, viewport()), 0);
    assert_eq!(range.progress_for_x(300.0, viewport()), 100);
}

#[test]
fn test_progress_for_x_rounds_to_nearest() {
    let range = ProgressRange::new(100);
    // 1.6 / 300 * 100 = 0.533 → 1
    assert_eq!(range.progress_for_x(1.6, viewport()), 1);
    // 1.4 / 300 * 100 = 0.466 → 0
    assert_eq!(range.progress_for_x(1.4, viewport()), 0);
}

#[test]
fn test_progress_for_x_clamps_outside_viewport() {
    let range = ProgressRange::new(100);
    assert_eq!(range.progress_for_x(-20.0, viewport()), 0);
    assert_eq!(range.progress_for_x(450.0, viewport()), 100);
}

#[test]
fn test_progress_for_x_stays_in_range_across_width() {
    let range = ProgressRange::new(7);
    let vp = viewport();
    for i in 0..=300 {
        let x = i as f32;
        let expected = ((x / vp.width) * 7.0).round() as u32;
        let value = range.progress_for_x(x, vp);
        assert_eq!(value, expected, "x = {x}");
        assert!(value <= 7);
    }
}

#[test]
fn test_degenerate_viewport_maps_to_zero() {
    let range = ProgressRange::new(100);
    let vp = ViewportSize::new(0.0, 200.0);
    assert_eq!(range.progress_for_x(50.0, vp), 0);
    assert_eq!(range.x_for_progress(50, vp), 0.0);
}

#[test]
fn test_zero_max_is_raised_to_one() {
    let range = ProgressRange::new(0);
    assert_eq!(range.max(), 1);
}

#[test]
fn test_normalize_initial_clamps_to_max() {
    let range = ProgressRange::new(100);
    assert_eq!(range.normalize_initial(30), 30);
    assert_eq!(range.normalize_initial(150), 100);
}

#[test]
fn test_x_for_progress_is_proportional() {
    let range = ProgressRange::new(100);
    assert_abs_diff_eq!(range.x_for_progress(10, viewport()), 30.0, epsilon = 1e-4);
    assert_abs_diff_eq!(range.x_for_progress(100, viewport()), 300.0, epsilon = 1e-4);
    assert_abs_diff_eq!(range.x_for_progress(0, viewport()), 0.0, epsilon = 1e-4);
}
