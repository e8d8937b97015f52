use crate::{Error, Scalar, TotalOrd, MAX_POINTS};

/// Position of a point in its [`PointSet`].
pub type PointId = usize;

/// Read-only view of a flat coordinate buffer.
///
/// Point `i` lives at `coords[2 * i]` (x) and `coords[2 * i + 1]` (y).
#[derive(Debug, Clone, Copy)]
pub struct PointSet<'a, T> {
  coords: &'a [T],
}

impl<'a, T: Scalar> PointSet<'a, T> {
  /// # Errors
  /// Returns [`Error::OddCoordinateCount`] if the buffer has a dangling x coordinate.
  pub fn new(coords: &'a [T]) -> Result<PointSet<'a, T>, Error> {
    if coords.len() % 2 != 0 {
      return Err(Error::OddCoordinateCount);
    }
    Ok(PointSet { coords })
  }

  pub fn len(&self) -> usize {
    self.coords.len() / 2
  }

  pub fn is_empty(&self) -> bool {
    self.coords.is_empty()
  }

  pub fn point(&self, id: PointId) -> [T; 2] {
    [self.coords[2 * id], self.coords[2 * id + 1]]
  }

  pub fn iter(&self) -> impl Iterator<Item = [T; 2]> + 'a {
    self.coords.chunks_exact(2).map(|xy| [xy[0], xy[1]])
  }

  /// Rejects sets that cannot be addressed with packed 16-bit indices.
  pub fn check_index_cap(&self) -> Result<(), Error> {
    if self.len() > MAX_POINTS {
      return Err(Error::TooManyPoints {
        count: self.len(),
        max: MAX_POINTS,
      });
    }
    Ok(())
  }

  /// Fill `order` with every point id, sorted by x and then by y.
  ///
  /// The sort is stable: equal points keep their original relative order.
  pub fn sort_lexicographic(&self, order: &mut Vec<PointId>) {
    self.identity(order);
    order.sort_by(|&a, &b| {
      let [ax, ay] = self.point(a);
      let [bx, by] = self.point(b);
      (ax, ay).total_cmp(&(bx, by))
    });
  }

  /// Fill `order` with every point id, sorted by x alone. Ties keep their
  /// original relative order.
  pub fn sort_by_x(&self, order: &mut Vec<PointId>) {
    self.identity(order);
    order.sort_by(|&a, &b| TotalOrd::total_cmp(&self.coords[2 * a], &self.coords[2 * b]));
  }

  /// Fill `order` with `0..len`.
  pub fn identity(&self, order: &mut Vec<PointId>) {
    order.clear();
    order.extend(0..self.len());
  }
}
