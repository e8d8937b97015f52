mod point;
mod point_set;
mod polygon;
mod triangle;

pub use point::{cross, squared_distance};
pub use point_set::{PointId, PointSet};
pub use polygon::PolygonView;
pub use triangle::Triangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
