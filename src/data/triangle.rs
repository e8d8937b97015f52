use super::{PointId, PointLocation, PointSet};
use crate::{Orientation, Scalar};
use array_init::array_init;

/// A triangle given by three corner points, in either winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T>(pub [[T; 2]; 3]);

impl<T: Scalar> Triangle<T> {
  pub fn new(pts: [[T; 2]; 3]) -> Triangle<T> {
    Triangle(pts)
  }

  pub fn from_ids(points: &PointSet<'_, T>, ids: [PointId; 3]) -> Triangle<T> {
    Triangle(array_init(|i| points.point(ids[i])))
  }

  pub fn orientation(&self) -> Orientation {
    let [a, b, c] = &self.0;
    Orientation::new(a, b, c)
  }

  /// Locate `pt` relative to the triangle. Works for both windings. A
  /// degenerate (flat) triangle has no interior: points on its supporting
  /// line are reported as `OnBoundary`, everything else as `Outside`.
  pub fn locate(&self, pt: &[T; 2]) -> PointLocation {
    use Orientation::*;
    let [a, b, c] = &self.0;
    let ab = Orientation::new(a, b, pt);
    let bc = Orientation::new(b, c, pt);
    let ca = Orientation::new(c, a, pt);
    match self.orientation() {
      CoLinear => {
        if ab == CoLinear && bc == CoLinear && ca == CoLinear {
          PointLocation::OnBoundary
        } else {
          PointLocation::Outside
        }
      }
      winding => {
        let outside = winding.reverse();
        if ab == outside || bc == outside || ca == outside {
          PointLocation::Outside
        } else if ab == CoLinear || bc == CoLinear || ca == CoLinear {
          PointLocation::OnBoundary
        } else {
          PointLocation::Inside
        }
      }
    }
  }

  pub fn signed_area(&self) -> T {
    self.signed_area_2x() / T::from_constant(2.0)
  }

  /// Twice the signed area. Positive for counter-clockwise triangles.
  pub fn signed_area_2x(&self) -> T {
    let [a, b, c] = self.0;
    a[0] * b[1] - b[0] * a[1] + b[0] * c[1] - c[0] * b[1] + c[0] * a[1] - a[0] * c[1]
    // x1*y2 - x2*y1 +
    // x2*y3 - x3*y2 +
    // x3*y1 - x1*y3
  }

  pub fn centroid(&self) -> [T; 2] {
    let [a, b, c] = self.0;
    let three = T::from_constant(3.0);
    [(a[0] + b[0] + c[0]) / three, (a[1] + b[1] + c[1]) / three]
  }

  /// Center and squared radius of the circle through all three corners.
  /// `None` for degenerate triangles.
  pub fn circumcircle(&self) -> Option<([T; 2], T)> {
    let [a, b, c] = self.0;
    let (bx, by) = (b[0] - a[0], b[1] - a[1]);
    let (cx, cy) = (c[0] - a[0], c[1] - a[1]);
    let d = T::from_constant(2.0) * (bx * cy - by * cx);
    if d == T::zero() {
      return None;
    }
    let b2 = bx * bx + by * by;
    let c2 = cx * cx + cy * cy;
    let ux = (cy * b2 - by * c2) / d;
    let uy = (bx * c2 - cx * b2) / d;
    Some(([a[0] + ux, a[1] + uy], ux * ux + uy * uy))
  }
}
