use super::{ControlPointAnimation, InstantAnimation, SpringAnimation, SpringParams};
use glam::Vec2;

const FRAME: f32 = 1.0 / 60.0;

fn spring_at(position: Vec2) -> SpringAnimation {
    SpringAnimation::new(
        position,
        SpringParams {
            damping_ratio: 0.4,
            stiffness: 1500.0,
        },
    )
}

#[test]
fn test_new_spring_is_settled() {
    let spring = spring_at(Vec2::new(10.0, 20.0));
    assert!(spring.is_settled());
    assert_eq!(spring.position(), Vec2::new(10.0, 20.0));
    assert_eq!(spring.target(), Vec2::new(10.0, 20.0));
}

#[test]
fn test_spring_lags_behind_new_target() {
    let mut spring = spring_at(Vec2::new(300.0, 100.0));
    spring.retarget(Vec2::new(0.0, 100.0));

    let after_one_frame = spring.advance(FRAME);
    assert!(after_one_frame.x < 300.0);
    assert!(after_one_frame.x > 0.0);
    assert!(!spring.is_settled());
}

#[test]
fn test_spring_settles_on_target() {
    let mut spring = spring_at(Vec2::new(300.0, 100.0));
    spring.retarget(Vec2::new(30.0, 100.0));

    for _ in 0..180 {
        spring.advance(FRAME);
    }

    assert!(spring.is_settled());
    assert_eq!(spring.position(), Vec2::new(30.0, 100.0));
}

#[test]
fn test_underdamped_spring_overshoots() {
    let mut spring = spring_at(Vec2::new(0.0, 100.0));
    spring.retarget(Vec2::new(100.0, 100.0));

    let mut max_x = f32::MIN;
    for _ in 0..120 {
        max_x = max_x.max(spring.advance(FRAME).x);
    }
    assert!(max_x > 110.0, "max_x = {max_x}");
}

#[test]
fn test_critically_damped_spring_does_not_overshoot() {
    let mut spring = SpringAnimation::new(
        Vec2::ZERO,
        SpringParams {
            damping_ratio: 1.0,
            stiffness: 1500.0,
        },
    );
    spring.retarget(Vec2::new(100.0, 0.0));

    for _ in 0..120 {
        let p = spring.advance(FRAME);
        assert!(p.x <= 100.0 + 1e-3, "p.x = {}", p.x);
    }
}

#[test]
fn test_advance_ignores_non_positive_dt() {
    let mut spring = spring_at(Vec2::ZERO);
    spring.retarget(Vec2::new(50.0, 0.0));

    assert_eq!(spring.advance(0.0), Vec2::ZERO);
    assert_eq!(spring.advance(-1.0), Vec2::ZERO);
    assert_eq!(spring.advance(f32::NAN), Vec2::ZERO);
}

#[test]
fn test_long_frame_is_capped() {
    let mut spring = spring_at(Vec2::ZERO);
    spring.retarget(Vec2::new(100.0, 0.0));

    // 10 s Pause darf nicht explodieren
    let p = spring.advance(10.0);
    assert!(p.is_finite());
    assert!(p.x.abs() < 1000.0);
}

#[test]
fn test_extreme_stiffness_stays_finite_and_settles() {
    let opts: crate::shared::SliderOptions =
        toml::from_str("stiffness = 1000000.0").expect("TOML sollte parsen");
    let mut spring = SpringAnimation::new(Vec2::ZERO, opts.spring_params());
    assert_eq!(spring.params().stiffness, 10_000.0);

    spring.retarget(Vec2::new(300.0, 150.0));
    for _ in 0..60 {
        assert!(spring.advance(FRAME).is_finite());
    }
    assert!(spring.is_settled());
    assert_eq!(spring.position(), Vec2::new(300.0, 150.0));
}

#[test]
fn test_non_finite_params_fall_back_to_defaults() {
    let spring = SpringAnimation::new(
        Vec2::ZERO,
        SpringParams {
            damping_ratio: f32::NAN,
            stiffness: f32::INFINITY,
        },
    );
    assert_eq!(spring.params(), SpringParams::default());
}

#[test]
fn test_snap_to_resets_velocity() {
    let mut spring = spring_at(Vec2::ZERO);
    spring.retarget(Vec2::new(100.0, 0.0));
    spring.advance(FRAME);
    assert_ne!(spring.velocity(), Vec2::ZERO);

    spring.snap_to(Vec2::new(42.0, 7.0));
    assert!(spring.is_settled());
    assert_eq!(spring.velocity(), Vec2::ZERO);
    assert_eq!(spring.position(), Vec2::new(42.0, 7.0));
}

#[test]
fn test_instant_animation_follows_target() {
    let mut anim = InstantAnimation::new(Vec2::ZERO);
    anim.retarget(Vec2::new(12.0, 34.0));

    assert_eq!(anim.position(), Vec2::new(12.0, 34.0));
    assert_eq!(anim.advance(FRAME), Vec2::new(12.0, 34.0));
    assert!(anim.is_settled());
}
