use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use polytri::algorithms::EarClipper;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

// Star-shaped polygon around the origin; one reflex vertex in two on average.
pub fn gen_star<R: Rng>(rng: &mut R, n: usize) -> Vec<f64> {
  let step = TAU / n as f64;
  (0..n)
    .flat_map(|i| {
      let angle = (i as f64 + rng.gen_range(0.0..0.5)) * step;
      let radius = rng.gen_range(1.0..10.0);
      [radius * f64::cos(angle), radius * f64::sin(angle)]
    })
    .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let mut rng = SmallRng::seed_from_u64(0);
  let mut clipper = EarClipper::new();
  let mut group = c.benchmark_group("earclip");
  for n in [10, 100, 1_000] {
    let polygon = gen_star(&mut rng, n);
    group.bench_with_input(BenchmarkId::new("star", n), &polygon, |b, polygon| {
      b.iter(|| clipper.triangulate(polygon))
    });
  }
  group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
