//! Benchmarks for the background engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use foresight_core::{RecordingCanvas, Size};
use foresight_widgets::{BackgroundConfig, BackgroundEngine, ParticleField, ParticleStyle};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn bench_particle_step(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut field = ParticleField::spawn(
        &mut rng,
        Size::new(1920.0, 1080.0),
        50,
        0.25,
        ParticleStyle::default(),
    );

    c.bench_function("particle_step_50", |b| b.iter(|| field.step()));
}

fn bench_particle_links(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let field = ParticleField::spawn(
        &mut rng,
        Size::new(1920.0, 1080.0),
        50,
        0.25,
        ParticleStyle::default(),
    );

    c.bench_function("particle_links_50", |b| b.iter(|| black_box(field.links())));
}

fn bench_full_frame(c: &mut Criterion) {
    let config = BackgroundConfig::default();
    let viewport = config.viewport(1920.0, 1080.0).expect("viewport");
    let mut engine = BackgroundEngine::new(config, viewport, 7).expect("engine");
    let mut now = 0.0;

    c.bench_function("frame_wide", |b| {
        b.iter(|| {
            now += 16.0;
            engine.update(black_box(now));
            let mut canvas = RecordingCanvas::new();
            engine.paint(&mut canvas, now, true);
            canvas.command_count()
        })
    });
}

criterion_group!(
    benches,
    bench_particle_step,
    bench_particle_links,
    bench_full_frame,
);
criterion_main!(benches);
