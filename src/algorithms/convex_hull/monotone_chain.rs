use crate::data::{PointId, PointSet};
use crate::{Error, Orientation, Scalar};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

/// Reusable workspace for [Andrew's monotone chain][wiki] convex hull.
///
/// The scratch buffers are overwritten by every call and carry no state between
/// calls. A workspace is not meant to be shared between threads: give each
/// thread its own.
///
/// # Preconditions
/// The input must not contain duplicate points. Duplicates never cause a panic
/// but the returned polygon is unspecified.
///
/// # Properties
/// * The hull is listed counter-clockwise (y-up) and starts at the
///   lexicographically smallest point. The first vertex is not repeated.
/// * Every consecutive triple of hull vertices turns strictly counter-clockwise.
/// * No input point lies outside the hull.
/// * Fewer than three points are returned as they are, in sorted order.
///   Collinear inputs collapse to their two extreme points.
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
#[derive(Debug, Default, Clone)]
pub struct ConvexHull {
  order: Vec<PointId>,
  chain: Vec<PointId>,
}

impl ConvexHull {
  pub fn new() -> ConvexHull {
    ConvexHull::default()
  }

  /// $O(n \log n)$ Hull vertices as a flat coordinate buffer.
  ///
  /// Pass `sorted = true` only if the points are already ordered by x and then
  /// by y; the internal sort is skipped in that case.
  ///
  /// # Errors
  /// Returns [`Error::OddCoordinateCount`] for a buffer with a dangling coordinate.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polytri::algorithms::ConvexHull;
  /// let mut hull = ConvexHull::new();
  /// let points = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 0.5];
  /// assert_eq!(
  ///   hull.hull_points(&points, false).unwrap(),
  ///   vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]
  /// );
  /// ```
  pub fn hull_points<T: Scalar>(&mut self, points: &[T], sorted: bool) -> Result<Vec<T>, Error> {
    let set = PointSet::new(points)?;
    self.build(&set, sorted);
    let mut out = Vec::with_capacity(self.chain.len() * 2);
    for &id in &self.chain {
      out.extend_from_slice(&set.point(id));
    }
    Ok(out)
  }

  /// $O(n \log n)$ Hull vertices as indices into the caller's point buffer.
  ///
  /// # Errors
  /// Returns [`Error::OddCoordinateCount`] for a buffer with a dangling coordinate.
  pub fn hull_indices<T: Scalar>(
    &mut self,
    points: &[T],
    sorted: bool,
  ) -> Result<Vec<PointId>, Error> {
    let set = PointSet::new(points)?;
    self.build(&set, sorted);
    Ok(self.chain.clone())
  }

  fn build<T: Scalar>(&mut self, points: &PointSet<'_, T>, sorted: bool) {
    if sorted {
      points.identity(&mut self.order);
    } else {
      points.sort_lexicographic(&mut self.order);
    }
    let order = &self.order;
    let chain = &mut self.chain;
    chain.clear();
    log::trace!("monotone chain over {} points", order.len());

    if order.len() < 3 {
      chain.extend_from_slice(order);
      return;
    }

    // Lower hull, left to right.
    for &id in order.iter() {
      pop_non_left_turns(points, chain, 2, id);
      chain.push(id);
    }

    // Upper hull, right to left. The lower hull's last point seeds the chain
    // and must never be popped.
    let floor = chain.len() + 1;
    for &id in order.iter().rev().skip(1) {
      pop_non_left_turns(points, chain, floor, id);
      chain.push(id);
    }

    // The upper hull ends where the lower hull started.
    chain.pop();
  }
}

// Pop until the last two chain points and `candidate` turn strictly
// counter-clockwise, leaving at least `floor - 1` points behind.
fn pop_non_left_turns<T: Scalar>(
  points: &PointSet<'_, T>,
  chain: &mut Vec<PointId>,
  floor: usize,
  candidate: PointId,
) {
  let p = points.point(candidate);
  while chain.len() >= floor {
    let a = points.point(chain[chain.len() - 2]);
    let b = points.point(chain[chain.len() - 1]);
    if Orientation::new(&a, &b, &p).is_ccw() {
      break;
    }
    chain.pop();
  }
}
