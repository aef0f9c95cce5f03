use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use planar_affine::{Affine2, Vec2F64};
use rand::Rng;
use std::hint::black_box;

fn make_random_affine2(rng: &mut impl Rng) -> Affine2 {
    let mut m = [0.0f64; 6];
    for v in m.iter_mut() {
        *v = rng.random_range(-10.0..10.0);
    }
    Affine2::new(m)
}

fn bench_affine2_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine2_mul");
    let mut rng = rand::rng();

    let m1 = make_random_affine2(&mut rng);
    let m2 = make_random_affine2(&mut rng);

    let g1 = glam::DAffine2::from(m1);
    let g2 = glam::DAffine2::from(m2);

    group.bench_function(BenchmarkId::new("planar", ""), |b| {
        b.iter(|| black_box(m1) * black_box(m2))
    });

    group.bench_function(BenchmarkId::new("glam", ""), |b| {
        b.iter(|| black_box(g2) * black_box(g1))
    });

    group.finish();
}

fn bench_affine2_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine2_inverse");

    let m = Affine2::translation(Vec2F64::new(1.0, 2.0))
        * Affine2::scale(3.0)
        * Affine2::rotation(0.5);

    group.bench_function(BenchmarkId::new("inverse", ""), |b| {
        b.iter(|| black_box(m).inverse())
    });

    group.bench_function(BenchmarkId::new("try_inverse", ""), |b| {
        b.iter(|| black_box(m).try_inverse())
    });

    group.finish();
}

fn bench_affine2_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("affine2_transform");
    let mut rng = rand::rng();

    let m = make_random_affine2(&mut rng);
    let points: Vec<Vec2F64> = (0..1024)
        .map(|_| Vec2F64::new(rng.random(), rng.random()))
        .collect();

    group.bench_function(BenchmarkId::new("transform", points.len()), |b| {
        b.iter(|| {
            points
                .iter()
                .map(|p| black_box(m).transform(*p))
                .fold(Vec2F64::ZERO, |acc, p| acc + p)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_affine2_mul,
    bench_affine2_inverse,
    bench_affine2_transform
);
criterion_main!(benches);
