use crate::data::{PointId, PointLocation, PointSet, PolygonView, Triangle};
use crate::{Error, Orientation, Scalar, TriangleIndex};

// Walk the polygon in clockwise order. O(n)
// Classify every vertex as convex, tangential or concave. O(n)
// Until three vertices remain:
//   Scan for the first non-concave vertex whose triangle (prev, vertex, next)
//   contains no other non-convex vertex. O(n)
//   If there is none, the polygon has become degenerate. Take the first
//   non-concave vertex anyway so that every step makes progress.
//   Emit (prev, vertex, next), unlink the vertex and reclassify its neighbours.
// Emit the last triangle.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VertexKind {
  Concave,
  Tangential,
  Convex,
}

/// Reusable workspace for ear-clipping triangulation of simple polygons.
///
/// # Properties
/// * An n-gon yields exactly `n - 2` triangles, `3(n - 2)` indices.
/// * Triangles are listed clockwise (negative signed area in a y-up frame),
///   whatever the winding of the input.
/// * For simple polygons the triangles cover the polygon without overlapping.
///
/// # Preconditions
/// The polygon must be simple. Self-intersecting or near-degenerate input still
/// produces `n - 2` triangles, but they may overlap or leave the polygon. Such
/// cases are counted by [`EarClipper::fallback_clips`].
#[derive(Debug, Default, Clone)]
pub struct EarClipper {
  // Slot -> caller vertex id, in clockwise order.
  indices: Vec<PointId>,
  kinds: Vec<VertexKind>,
  ring: Ring,
  fallback_clips: usize,
}

impl EarClipper {
  pub fn new() -> EarClipper {
    EarClipper::default()
  }

  /// $O(n^2)$ Triangulate a simple polygon given as a flat coordinate buffer.
  ///
  /// # Errors
  /// * [`Error::InsufficientVertices`] for fewer than three vertices.
  /// * [`Error::TooManyPoints`] above [`MAX_POINTS`](crate::MAX_POINTS) vertices.
  /// * [`Error::OddCoordinateCount`] for a buffer with a dangling coordinate.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polytri::algorithms::EarClipper;
  /// let mut clipper = EarClipper::new();
  /// let square = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];
  /// assert_eq!(clipper.triangulate(&square).unwrap(), vec![0, 3, 2, 2, 1, 0]);
  /// ```
  pub fn triangulate<T: Scalar>(&mut self, vertices: &[T]) -> Result<Vec<TriangleIndex>, Error> {
    let polygon = PolygonView::new(vertices)?;
    let points = *polygon.points();
    if points.len() < 3 {
      return Err(Error::InsufficientVertices);
    }
    points.check_index_cap()?;

    let n = points.len();
    self.fallback_clips = 0;
    self.indices.clear();
    if polygon.is_clockwise() {
      self.indices.extend(0..n);
    } else {
      self.indices.extend((0..n).rev());
    }
    self.ring.reset(n);
    self.kinds.clear();
    for slot in 0..n {
      let kind = self.classify(&points, slot);
      self.kinds.push(kind);
    }
    log::trace!("ear clipping {} vertices", n);

    let mut triangles = Vec::with_capacity(3 * (n - 2));
    while self.ring.len() > 3 {
      let ear = self.find_ear(&points);
      let prev = self.ring.prev(ear);
      let next = self.ring.next(ear);
      triangles.extend([
        self.indices[prev] as TriangleIndex,
        self.indices[ear] as TriangleIndex,
        self.indices[next] as TriangleIndex,
      ]);
      self.ring.delete(ear);
      self.kinds[prev] = self.classify(&points, prev);
      self.kinds[next] = self.classify(&points, next);
    }
    let a = self.ring.head();
    let b = self.ring.next(a);
    let c = self.ring.next(b);
    triangles.extend([
      self.indices[a] as TriangleIndex,
      self.indices[b] as TriangleIndex,
      self.indices[c] as TriangleIndex,
    ]);

    if self.fallback_clips > 0 {
      log::warn!(
        "ear clipping fell back {} times on a {}-gon; the polygon is degenerate or not simple",
        self.fallback_clips,
        n
      );
    }
    Ok(triangles)
  }

  /// Number of clips in the last call that did not find a proper ear. Zero for
  /// well-formed simple polygons.
  pub fn fallback_clips(&self) -> usize {
    self.fallback_clips
  }

  fn point<T: Scalar>(&self, points: &PointSet<'_, T>, slot: usize) -> [T; 2] {
    points.point(self.indices[slot])
  }

  fn ear_triangle<T: Scalar>(&self, points: &PointSet<'_, T>, slot: usize) -> Triangle<T> {
    Triangle::new([
      self.point(points, self.ring.prev(slot)),
      self.point(points, slot),
      self.point(points, self.ring.next(slot)),
    ])
  }

  fn classify<T: Scalar>(&self, points: &PointSet<'_, T>, slot: usize) -> VertexKind {
    // Processing order is clockwise, so convex corners turn clockwise.
    match self.ear_triangle(points, slot).orientation() {
      Orientation::ClockWise => VertexKind::Convex,
      Orientation::CoLinear => VertexKind::Tangential,
      Orientation::CounterClockWise => VertexKind::Concave,
    }
  }

  fn find_ear<T: Scalar>(&mut self, points: &PointSet<'_, T>) -> usize {
    let head = self.ring.head();
    let mut slot = head;
    loop {
      if self.is_ear(points, slot) {
        return slot;
      }
      slot = self.ring.next(slot);
      if slot == head {
        break;
      }
    }

    self.fallback_clips += 1;
    let mut slot = head;
    loop {
      if self.kinds[slot] != VertexKind::Concave {
        return slot;
      }
      slot = self.ring.next(slot);
      if slot == head {
        return head;
      }
    }
  }

  fn is_ear<T: Scalar>(&self, points: &PointSet<'_, T>, slot: usize) -> bool {
    if self.kinds[slot] == VertexKind::Concave {
      return false;
    }
    let prev = self.ring.prev(slot);
    let next = self.ring.next(slot);
    let trig = self.ear_triangle(points, slot);
    // Convex vertices cannot be inside the ear, but concave ones can, and so
    // can tangential ones when they coincide with a corner.
    let mut focus = self.ring.next(next);
    while focus != prev {
      if self.kinds[focus] != VertexKind::Convex
        && trig.locate(&self.point(points, focus)) != PointLocation::Outside
      {
        return false;
      }
      focus = self.ring.next(focus);
    }
    true
  }
}

///////////////////////////////////////////////////////////////////////////////
// Circular linked list that supports deletions

#[derive(Debug, Default, Clone)]
struct Ring {
  prev: Vec<usize>,
  next: Vec<usize>,
  head: usize,
  len: usize,
}

impl Ring {
  fn reset(&mut self, size: usize) {
    self.prev.clear();
    self.next.clear();
    self.prev.resize(size, 0);
    self.next.resize(size, 0);
    for i in 0..size {
      self.prev[(i + 1) % size] = i;
      self.next[i] = (i + 1) % size;
    }
    self.head = 0;
    self.len = size;
  }

  fn len(&self) -> usize {
    self.len
  }

  fn head(&self) -> usize {
    self.head
  }

  fn prev(&self, vertex: usize) -> usize {
    self.prev[vertex]
  }

  fn next(&self, vertex: usize) -> usize {
    self.next[vertex]
  }

  fn delete(&mut self, vertex: usize) {
    let prev = self.prev[vertex];
    let next = self.next[vertex];
    self.next[prev] = next;
    self.prev[next] = prev;
    if self.head == vertex {
      self.head = next;
    }
    self.len -= 1;
  }
}
