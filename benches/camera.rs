use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ocean_viewer::camera::{CameraController, CameraSettings};
use ocean_viewer::keyboard::Direction;
use std::time::{Duration, Instant};

/// Benchmark: mouse-driven rotation with clamping and wrapping
fn bench_rotate(c: &mut Criterion) {
    let mut camera = CameraController::new(CameraSettings::default(), Instant::now());
    let mut x = 0.0f32;

    c.bench_function("camera_rotate", |b| {
        b.iter(|| {
            x += 3.0;
            camera.rotate(black_box(x), black_box(x * 0.5));
        })
    });
}

/// Benchmark: per-frame integration with two keys held
fn bench_integrate(c: &mut Criterion) {
    let start = Instant::now();
    let mut camera = CameraController::new(CameraSettings::default(), start);
    camera.set_key_state(Direction::Forward, true);
    camera.set_key_state(Direction::Left, true);
    let mut now = start;

    c.bench_function("camera_integrate", |b| {
        b.iter(|| {
            now += Duration::from_micros(16_667);
            camera.integrate(black_box(now));
            black_box(camera.sight_target())
        })
    });
}

criterion_group!(benches, bench_rotate, bench_integrate);
criterion_main!(benches);
