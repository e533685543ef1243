use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_rain::core::{SimpleRng, TrailPool};
use matrix_rain::term::{composite, flatten_into, output_len, CellGrid, RainFrame};
use matrix_rain::types::{RainConfig, Viewport};

fn busy_pool(viewport: Viewport) -> TrailPool {
    let config = RainConfig {
        init_chance: 0.2,
        ..RainConfig::default()
    };
    let mut rng = SimpleRng::new(12345);
    let mut pool = TrailPool::default();
    for _ in 0..200 {
        pool.update(viewport, &config, &mut rng);
    }
    pool
}

fn bench_composite(c: &mut Criterion) {
    let viewport = Viewport::new(200, 60);
    let pool = busy_pool(viewport);
    let mut grid = CellGrid::new(viewport);

    c.bench_function("composite_200x60", |b| {
        b.iter(|| {
            grid.clear();
            composite(black_box(&pool), &mut grid);
        })
    });
}

fn bench_flatten(c: &mut Criterion) {
    let viewport = Viewport::new(200, 60);
    let pool = busy_pool(viewport);
    let mut grid = CellGrid::new(viewport);
    composite(&pool, &mut grid);
    let mut out = vec![b' '; output_len(viewport)];

    c.bench_function("flatten_200x60", |b| {
        b.iter(|| flatten_into(black_box(&grid), &mut out, Some(b'\n')))
    });
}

fn bench_full_frame(c: &mut Criterion) {
    let viewport = Viewport::new(200, 60);
    let mut frame = RainFrame::default();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("rain_frame_200x60", |b| {
        b.iter(|| {
            let bytes = frame.render(black_box(viewport), &mut rng).unwrap();
            black_box(bytes.len());
        })
    });
}

criterion_group!(benches, bench_composite, bench_flatten, bench_full_frame);
criterion_main!(benches);
