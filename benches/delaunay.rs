use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polytri::algorithms::Delaunay;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let mut delaunay = Delaunay::new();
  let mut group = c.benchmark_group("delaunay");
  for n in [10, 1_000, 10_000] {
    let points: Vec<f32> = (0..2 * n).map(|_| rng.gen_range(0.0..1.0)).collect();
    group.bench_with_input(BenchmarkId::new("unsorted", n), &points, |b, points| {
      b.iter(|| delaunay.triangulate(points, false))
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
