// This module contains strategies and helpers for:
//  * points
//  * point buffers
//  * star-shaped polygons
//  * exact areas
use crate::data::{PointSet, PolygonView, Triangle};

use core::ops::Range;
use num_rational::BigRational;
use num_traits::Zero;
use ordered_float::OrderedFloat;
use proptest::collection::*;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::f64::consts::TAU;

///////////////////////////////////////////////////////////////////////////////
// Points

// Coordinates stay in a range where inexact products are still accurate to
// well below 1e-6.
pub fn any_point() -> impl Strategy<Value = [f64; 2]> {
  (-1000.0..1000.0_f64, -1000.0..1000.0_f64).prop_map(|(x, y)| [x, y])
}

/// Flat buffer of distinct points.
pub fn point_buffer(len: Range<usize>) -> impl Strategy<Value = Vec<f64>> {
  vec((-100.0..100.0_f64, -100.0..100.0_f64), len).prop_map(|pts| {
    let mut seen = BTreeSet::new();
    pts
      .into_iter()
      .filter(|&(x, y)| seen.insert((OrderedFloat(x), OrderedFloat(y))))
      .flat_map(|(x, y)| [x, y])
      .collect()
  })
}

/// The same points, ordered by x and then by y.
pub fn sort_buffer(coords: &[f64]) -> Vec<f64> {
  let set = PointSet::new(coords).unwrap();
  let mut order = Vec::new();
  set.sort_lexicographic(&mut order);
  order.iter().flat_map(|&id| set.point(id)).collect()
}

/// The same polygon with its winding flipped.
pub fn reverse_buffer(coords: &[f64]) -> Vec<f64> {
  coords.chunks_exact(2).rev().flatten().copied().collect()
}

///////////////////////////////////////////////////////////////////////////////
// Polygons

// Vertices at increasing angles around the origin. Consecutive angles are less
// than half a turn apart, so the polygon is simple and star-shaped around the
// origin. Counter-clockwise.
pub fn star_polygon(len: Range<usize>) -> impl Strategy<Value = Vec<f64>> {
  len
    .prop_flat_map(|n| vec((0.0..0.5_f64, 1.0..10.0_f64), n))
    .prop_map(|spokes| {
      let n = spokes.len() as f64;
      spokes
        .iter()
        .enumerate()
        .flat_map(|(i, &(jitter, radius))| {
          let angle = (i as f64 + jitter) * TAU / n;
          [radius * angle.cos(), radius * angle.sin()]
        })
        .collect()
    })
}

///////////////////////////////////////////////////////////////////////////////
// Exact areas

fn exact(val: f64) -> BigRational {
  BigRational::from_float(val).unwrap()
}

fn exact_cross(p: [f64; 2], q: [f64; 2]) -> BigRational {
  exact(p[0]) * exact(q[1]) - exact(q[0]) * exact(p[1])
}

/// Twice the signed area of a triangle, without rounding.
pub fn exact_area_2x(trig: &Triangle<f64>) -> BigRational {
  let [a, b, c] = trig.0;
  exact_cross(a, b) + exact_cross(b, c) + exact_cross(c, a)
}

/// Twice the signed area of a polygon, without rounding.
pub fn exact_polygon_area_2x(coords: &[f64]) -> BigRational {
  let poly = PolygonView::new(coords).unwrap();
  poly
    .iter_edges()
    .fold(BigRational::zero(), |acc, (p, q)| acc + exact_cross(p, q))
}

#[cfg(test)]
mod tests {
  use super::*;
  use test_strategy::proptest;

  #[proptest]
  fn star_polygon_is_ccw(#[strategy(star_polygon(3..30))] coords: Vec<f64>) {
    prop_assert!(exact_polygon_area_2x(&coords) > BigRational::zero());
    prop_assert!(exact_polygon_area_2x(&reverse_buffer(&coords)) < BigRational::zero());
  }

  #[proptest]
  fn point_buffer_is_distinct(#[strategy(point_buffer(0..50))] coords: Vec<f64>) {
    prop_assert_eq!(coords.len() % 2, 0);
    let sorted = sort_buffer(&coords);
    for (p, q) in sorted.chunks_exact(2).zip(sorted.chunks_exact(2).skip(1)) {
      prop_assert_ne!(p, q);
    }
  }

  #[test]
  fn exact_unit_square() {
    let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
    assert_eq!(exact_polygon_area_2x(&square), exact(2.0));
    let trig = Triangle::new([[0.0, 0.0], [0.0, 1.0], [1.0, 0.0]]);
    assert_eq!(exact_area_2x(&trig), exact(-1.0));
  }
}
