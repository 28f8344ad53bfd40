use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecosim_core::placement::{Bounds, Placer};
use ecosim_data::Position;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn bench_place_into_crowded_world(c: &mut Criterion) {
    let bounds = Bounds::new(0, 1024, 0, 768);
    let placer = Placer {
        min_distance: 50.0,
        max_attempts: 1000,
        relax_on_exhaustion: true,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut existing: Vec<Position> = Vec::new();
    for _ in 0..100 {
        if let Ok(p) = placer.generate(&bounds, &existing, &mut rng) {
            existing.push(p);
        }
    }

    c.bench_function("placement_generate_100_occupied", |b| {
        b.iter(|| black_box(placer.generate(&bounds, &existing, &mut rng)))
    });
}

fn bench_place_empty_world(c: &mut Criterion) {
    let bounds = Bounds::new(0, 1024, 0, 768);
    let placer = Placer::default();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    c.bench_function("placement_generate_empty", |b| {
        b.iter(|| black_box(placer.generate(&bounds, &[], &mut rng)))
    });
}

criterion_group!(benches, bench_place_into_crowded_world, bench_place_empty_world);
criterion_main!(benches);
