use crate::Scalar;

/// Squared euclidean distance between two points.
pub fn squared_distance<T: Scalar>(p: &[T; 2], q: &[T; 2]) -> T {
  let dx = q[0] - p[0];
  let dy = q[1] - p[1];
  dx * dx + dy * dy
}

/// Inexact cross product of `q - p` and `r - q`.
///
/// Positive for a counter-clockwise turn. Use [`Orientation::new`](crate::Orientation::new)
/// when only the sign matters.
pub fn cross<T: Scalar>(p: &[T; 2], q: &[T; 2], r: &[T; 2]) -> T {
  (q[0] - p[0]) * (r[1] - q[1]) - (q[1] - p[1]) * (r[0] - q[0])
}
