use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polytri::algorithms::ConvexHull;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

pub fn gen_points<R: Rng>(rng: &mut R, n: usize) -> Vec<f64> {
  (0..2 * n).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let mut hull = ConvexHull::new();
  let mut group = c.benchmark_group("monotone_chain");
  for n in [10, 1_000, 100_000] {
    let points = gen_points(&mut rng, n);
    group.bench_with_input(BenchmarkId::new("hull_indices", n), &points, |b, points| {
      b.iter(|| hull.hull_indices(points, false))
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
