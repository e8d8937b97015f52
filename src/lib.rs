#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Convex hulls and triangulations over flat coordinate buffers.
//!
//! Every algorithm takes points as a flat slice where `2i`/`2i+1` are the x/y
//! coordinates of point `i`, and returns a freshly allocated buffer: hull
//! coordinates, hull indices, or triangle indices with stride 3.
//!
//! Each algorithm is a small workspace struct that keeps its scratch buffers
//! between calls. Reuse one workspace per thread to avoid reallocating.
//!
//! ```rust
//! # use polytri::algorithms::{convex_hull, delaunay, earclip};
//! let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
//! assert_eq!(convex_hull(&square).unwrap(), vec![0, 1, 2, 3]);
//! assert_eq!(earclip(&square).unwrap().len(), 6);
//! assert_eq!(delaunay(&square).unwrap().len(), 6);
//! ```
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt::Debug;

pub mod algorithms;
pub mod data;
mod orientation;

pub use orientation::Orientation;

/// Largest point count accepted by algorithms that emit packed `u16` indices.
pub const MAX_POINTS: usize = i16::MAX as usize;

/// Packed triangle vertex index. Triangle buffers have stride 3.
pub type TriangleIndex = u16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  InsufficientVertices,
  /// A flat coordinate buffer must hold an x and a y for every point.
  OddCoordinateCount,
  /// The input cannot be addressed with packed 16-bit indices.
  TooManyPoints {
    count: usize,
    max: usize,
  },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Insufficient vertices"),
      Error::OddCoordinateCount => write!(f, "Odd number of coordinates"),
      Error::TooManyPoints { count, max } => {
        write!(f, "Too many points: {} (at most {} are supported)", count, max)
      }
    }
  }
}

impl std::error::Error for Error {}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type accepted by every algorithm in this crate.
///
/// Implemented for `f32`, `f64` and their `OrderedFloat` wrappers. Orientation
/// predicates widen coordinates to `f64` and evaluate them exactly, so the
/// conversion must be lossless.
pub trait Scalar: Float + TotalOrd + Debug {
  fn from_constant(val: f64) -> Self;
  fn as_f64(self) -> f64;
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl Scalar for $ty {
        fn from_constant(val: f64) -> Self {
          val as $ty
        }
        fn as_f64(self) -> f64 {
          f64::from(self)
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for OrderedFloat<$ty> {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl Scalar for OrderedFloat<$ty> {
        fn from_constant(val: f64) -> Self {
          OrderedFloat(val as $ty)
        }
        fn as_f64(self) -> f64 {
          f64::from(self.into_inner())
        }
      }
    )*
  };
}

floating_precision!(f32, f64);
wrapped_floating_precision!(f32, f64);

#[cfg(test)]
pub mod testing;
