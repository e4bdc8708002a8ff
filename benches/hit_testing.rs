use criterion::{criterion_group, criterion_main, Criterion};
use tree_decorator::decor::{KindId, PlacementStore, Point, TreeShape};

fn bench_contains(c: &mut Criterion) {
    let shape = TreeShape::default();
    let points: Vec<Point> = (0..100)
        .flat_map(|x| (0..110).map(move |y| Point::new(x as f32 * 5.0, y as f32 * 5.0)))
        .collect();
    c.bench_function("tree_contains_11k", |b| {
        b.iter(|| points.iter().filter(|p| shape.contains(**p)).count())
    });
}

fn bench_remove_nearest(c: &mut Criterion) {
    c.bench_function("remove_nearest_1k", |b| {
        b.iter_batched(
            || {
                let mut store = PlacementStore::seeded(10.0, 1);
                for i in 0..1_000 {
                    store.add(KindId(i % 8), Point::new(250.0, 260.0 + (i % 190) as f32));
                }
                store
            },
            |mut store| store.remove_nearest(Point::new(250.0, 380.0), 15.0),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_contains, bench_remove_nearest);
criterion_main!(benches);
