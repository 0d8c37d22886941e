use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curved_progress_slider::{
    ControlPointAnimation, CurvedProgressSlider, SliderIntent, SliderOptions, SpringAnimation,
    SpringParams, ViewportSize,
};
use glam::Vec2;
use std::hint::black_box;

fn bench_curve_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sampling");
    let viewport = ViewportSize::new(1080.0, 300.0);

    for &segments in &[32usize, 64, 256] {
        group.bench_with_input(
            BenchmarkId::new("sample", segments),
            &segments,
            |b, &segments| {
                let curve = curved_progress_slider::core::build_curve(
                    black_box(Vec2::new(400.0, 40.0)),
                    viewport,
                );
                b.iter(|| black_box(curve.sample(segments).len()))
            },
        );
    }

    group.finish();
}

fn bench_spring_frame(c: &mut Criterion) {
    c.bench_function("spring_advance_60hz", |b| {
        let mut spring = SpringAnimation::new(Vec2::ZERO, SpringParams::default());
        let mut flip = false;
        b.iter(|| {
            if spring.is_settled() {
                flip = !flip;
                let x = if flip { 1080.0 } else { 0.0 };
                spring.retarget(Vec2::new(x, 150.0));
            }
            black_box(spring.advance(black_box(1.0 / 60.0)))
        })
    });
}

fn bench_slider_frame(c: &mut Criterion) {
    c.bench_function("slider_drag_frame", |b| {
        let mut slider = CurvedProgressSlider::new(SliderOptions::default());
        slider.handle_intent(SliderIntent::ViewportResized {
            size: ViewportSize::new(1080.0, 300.0),
        });
        slider.handle_intent(SliderIntent::PointerPressed {
            pos: Vec2::new(10.0, 150.0),
        });

        let mut x = 10.0f32;
        b.iter(|| {
            x = if x > 1070.0 { 10.0 } else { x + 7.0 };
            slider.handle_intent(SliderIntent::PointerMoved {
                pos: Vec2::new(x, 90.0),
            });
            slider.handle_intent(SliderIntent::FrameAdvanced { dt: 1.0 / 60.0 });
            black_box(slider.build_frame().map(|frame| frame.curve_points.len()))
        })
    });
}

criterion_group!(
    engine_benches,
    bench_curve_sampling,
    bench_spring_frame,
    bench_slider_frame
);
criterion_main!(engine_benches);
