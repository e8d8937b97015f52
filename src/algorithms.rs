use crate::data::PointId;
use crate::{Error, Scalar, TriangleIndex};

pub mod convex_hull;
pub mod triangulation;

#[doc(inline)]
pub use convex_hull::ConvexHull;

#[doc(inline)]
pub use triangulation::{Delaunay, EarClipper};

/// $O(n \log n)$ Convex hull as indices into `points`, counter-clockwise.
///
/// Allocates a fresh [`ConvexHull`] workspace; keep one around for repeated calls.
pub fn convex_hull<T: Scalar>(points: &[T]) -> Result<Vec<PointId>, Error> {
  ConvexHull::new().hull_indices(points, false)
}

/// Delaunay triangulation with the default configuration. See [`Delaunay`].
pub fn delaunay<T: Scalar>(points: &[T]) -> Result<Vec<TriangleIndex>, Error> {
  Delaunay::new().triangulate(points, false)
}

/// $O(n^2)$ Ear-clipping triangulation of a simple polygon. See [`EarClipper`].
pub fn earclip<T: Scalar>(vertices: &[T]) -> Result<Vec<TriangleIndex>, Error> {
  EarClipper::new().triangulate(vertices)
}
