use super::{PointLocation, PointSet};
use crate::{Error, Orientation, Scalar};

/// A simple polygon stored as a flat coordinate buffer, one vertex per point,
/// with an implicit closing edge from the last vertex back to the first.
#[derive(Debug, Clone, Copy)]
pub struct PolygonView<'a, T> {
  points: PointSet<'a, T>,
}

impl<'a, T: Scalar> PolygonView<'a, T> {
  pub fn new(coords: &'a [T]) -> Result<PolygonView<'a, T>, Error> {
    Ok(PolygonView {
      points: PointSet::new(coords)?,
    })
  }

  pub fn points(&self) -> &PointSet<'a, T> {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  /// Iterate over `(src, dst)` for every boundary edge, including the closing edge.
  pub fn iter_edges(&self) -> impl Iterator<Item = ([T; 2], [T; 2])> + '_ {
    let n = self.len();
    (0..n).map(move |i| (self.points.point(i), self.points.point((i + 1) % n)))
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2.0)
  }

  /// Twice the shoelace area. Positive for counter-clockwise vertex order.
  pub fn signed_area_2x(&self) -> T {
    self
      .iter_edges()
      .fold(T::zero(), |acc, (p, q)| acc + p[0] * q[1] - q[0] * p[1])
  }

  /// True if the vertices are listed clockwise, i.e. the signed area is negative.
  /// Degenerate polygons with zero area are not clockwise.
  pub fn is_clockwise(&self) -> bool {
    self.signed_area_2x() < T::zero()
  }

  /// Even-odd point-in-polygon test. Points on an edge are `OnBoundary`.
  pub fn locate(&self, pt: &[T; 2]) -> PointLocation {
    let mut inside = false;
    for (p, q) in self.iter_edges() {
      if on_segment(&p, &q, pt) {
        return PointLocation::OnBoundary;
      }
      // Half-open rule on y so that a vertex is counted exactly once.
      if (p[1] > pt[1]) != (q[1] > pt[1]) {
        let x = p[0] + (pt[1] - p[1]) * (q[0] - p[0]) / (q[1] - p[1]);
        if pt[0] < x {
          inside = !inside;
        }
      }
    }
    if inside {
      PointLocation::Inside
    } else {
      PointLocation::Outside
    }
  }
}

fn on_segment<T: Scalar>(p: &[T; 2], q: &[T; 2], pt: &[T; 2]) -> bool {
  Orientation::new(p, q, pt).is_colinear()
    && pt[0] >= p[0].min(q[0])
    && pt[0] <= p[0].max(q[0])
    && pt[1] >= p[1].min(q[1])
    && pt[1] <= p[1].max(q[1])
}
