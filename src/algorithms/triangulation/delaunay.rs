// http://paulbourke.net/papers/triangulate/
use crate::data::{PointId, PointLocation, PointSet, PolygonView, Triangle};
use crate::{Error, Orientation, Scalar, TotalOrd, TriangleIndex};

use geometry_predicates::predicates::incircle;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

// Stands in for all three corners of the super-triangle. They sit at infinity,
// so the circumcircle of a triangle touching them degenerates into the
// half-plane beyond its one finite edge.
const GHOST: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
  Active,
  // The sweep has moved past the triangle's circumcircle.
  Complete,
}

/// Where an inserted point falls relative to a triangle's circumcircle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Circumcircle {
  Inside,
  Complete,
  Incomplete,
}

/// Reusable workspace for incremental (Bowyer-Watson) Delaunay triangulation.
///
/// Points are inserted in x order into a super-triangle that encloses them all.
/// Each insertion removes the triangles whose circumcircle contains the new
/// point and re-triangulates the hole from the new point.
///
/// The super-triangle is symbolic: its corners are points at infinity. A
/// triangle with one such corner is bounded by a hull edge, and its
/// circumcircle is the open half-plane beyond that edge together with the
/// edge's interior. Triangles with a corner at infinity are dropped from the
/// output, which leaves exactly the convex hull covered.
///
/// # Properties
/// * No input point lies strictly inside the circumcircle of an emitted
///   triangle. Incircle and orientation tests are exact.
/// * The triangles tile the convex hull of the input without overlap.
/// * Triangles are listed clockwise (negative signed area in a y-up frame).
/// * Every emitted index is below the number of input points. Repeated points
///   are triangulated once; later copies are never referenced.
/// * Input on a single line has no triangulation and gives an empty list.
///
/// Each insertion rescans all triangles not yet marked complete. Sorted
/// insertion prunes most of them in practice, but the worst case is quadratic.
#[derive(Debug, Clone)]
pub struct Delaunay<T> {
  epsilon: T,
  order: Vec<PointId>,
  // Corners are sorted positions or `GHOST`. A ghost is always the last corner.
  triangles: Vec<[usize; 3]>,
  status: Vec<Status>,
  // Unordered edge -> directed edge. A second insertion cancels the first.
  edges: BTreeMap<(usize, usize), (usize, usize)>,
  chain: Vec<usize>,
  conflicts: Vec<usize>,
}

impl<T: Scalar> Default for Delaunay<T> {
  fn default() -> Self {
    Delaunay {
      epsilon: T::from_constant(1e-6),
      order: Vec::new(),
      triangles: Vec::new(),
      status: Vec::new(),
      edges: BTreeMap::new(),
      chain: Vec::new(),
      conflicts: Vec::new(),
    }
  }
}

impl<T: Scalar> Delaunay<T> {
  pub fn new() -> Delaunay<T> {
    Delaunay::default()
  }

  /// Relative slack of the sweep test. A triangle is set aside for good only
  /// once the sweep is past its circumcircle by more than `epsilon` times the
  /// squared radius. The circumcenter behind that test is rounded; the
  /// containment test itself is exact and takes no tolerance.
  pub fn with_epsilon(mut self, epsilon: T) -> Delaunay<T> {
    self.epsilon = epsilon;
    self
  }

  /// Triangulate a flat coordinate buffer. Pass `sorted = true` only if the
  /// points are already ordered by x; the internal sort is skipped.
  ///
  /// Fewer than three points give an empty triangulation.
  ///
  /// # Errors
  /// * [`Error::TooManyPoints`] above [`MAX_POINTS`](crate::MAX_POINTS) points.
  /// * [`Error::OddCoordinateCount`] for a buffer with a dangling coordinate.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use polytri::algorithms::Delaunay;
  /// let mut delaunay = Delaunay::new();
  /// let points = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 0.5];
  /// let triangles = delaunay.triangulate(&points, false).unwrap();
  /// assert_eq!(triangles.len(), 12);
  /// assert!(triangles.chunks(3).all(|t| t.contains(&4)));
  /// ```
  pub fn triangulate(&mut self, points: &[T], sorted: bool) -> Result<Vec<TriangleIndex>, Error> {
    let set = PointSet::new(points)?;
    set.check_index_cap()?;
    let n = set.len();
    if n < 3 {
      return Ok(Vec::new());
    }
    log::trace!("delaunay over {} points", n);

    let Delaunay {
      epsilon,
      order,
      triangles,
      status,
      edges,
      chain,
      conflicts,
    } = self;
    if sorted {
      set.identity(order);
    } else {
      set.sort_by_x(order);
    }
    let epsilon = epsilon.as_f64();
    let vertex = |k: usize| set.point(order[k]);

    triangles.clear();
    status.clear();
    let apex = match seed(&vertex, n, chain, triangles, edges) {
      Some(apex) => apex,
      None => {
        log::debug!("delaunay: all {} points are collinear", n);
        return Ok(Vec::new());
      }
    };
    status.resize(triangles.len(), Status::Active);

    let mut removed = 0;
    let mut completed = 0;
    let mut repeated = 0;
    for p in apex + 1..n {
      let pt = vertex(p);
      conflicts.clear();
      let mut duplicate = false;
      // Conflicts are collected in descending order so that swap_remove below
      // only ever moves a triangle that stays.
      for t in (0..triangles.len()).rev() {
        if status[t] == Status::Complete {
          continue;
        }
        let [a, b, c] = triangles[t];
        let class = if c == GHOST {
          classify_ghost(&vertex(a), &vertex(b), &pt)
        } else {
          let trig = Triangle::new([vertex(a), vertex(b), vertex(c)]);
          let class = classify(&trig, &pt, epsilon);
          duplicate |= class == Circumcircle::Inside && trig.0.contains(&pt);
          class
        };
        match class {
          Circumcircle::Inside => conflicts.push(t),
          Circumcircle::Complete => {
            status[t] = Status::Complete;
            completed += 1;
          }
          Circumcircle::Incomplete => {}
        }
      }
      // A repeated point lies on the circle of every triangle around its twin.
      if duplicate {
        repeated += 1;
        continue;
      }

      edges.clear();
      for &t in conflicts.iter() {
        let [a, b, c] = triangles[t];
        for (u, v) in [(a, b), (b, c), (c, a)] {
          toggle_edge(edges, u, v);
        }
        triangles.swap_remove(t);
        status.swap_remove(t);
      }
      removed += conflicts.len();
      for &(a, b) in edges.values() {
        let tri = if a == GHOST {
          [b, p, GHOST]
        } else if b == GHOST {
          [p, a, GHOST]
        } else {
          [a, b, p]
        };
        triangles.push(tri);
        status.push(Status::Active);
      }
    }

    let mut out = Vec::with_capacity(triangles.len() * 3);
    for tri in triangles.iter() {
      if tri[2] == GHOST {
        continue;
      }
      out.extend(tri.iter().map(|&k| order[k] as TriangleIndex));
    }
    log::debug!(
      "delaunay: {} points, {} repeated, {} triangles removed, {} completed, {} emitted",
      n,
      repeated,
      removed,
      completed,
      out.len() / 3
    );
    Ok(out)
  }

  /// Remove every triangle whose centroid lies outside `polygon`. Carves a
  /// concave outline out of a triangulation of its vertices.
  ///
  /// # Errors
  /// Returns [`Error::OddCoordinateCount`] if either buffer has a dangling
  /// coordinate.
  pub fn trim(
    triangles: &mut Vec<TriangleIndex>,
    points: &[T],
    polygon: &[T],
  ) -> Result<(), Error> {
    let set = PointSet::new(points)?;
    let polygon = PolygonView::new(polygon)?;
    let before = triangles.len() / 3;
    let mut kept = 0;
    for t in 0..before {
      let ids = [
        usize::from(triangles[3 * t]),
        usize::from(triangles[3 * t + 1]),
        usize::from(triangles[3 * t + 2]),
      ];
      let centroid = Triangle::from_ids(&set, ids).centroid();
      if polygon.locate(&centroid) != PointLocation::Outside {
        triangles.copy_within(3 * t..3 * t + 3, 3 * kept);
        kept += 1;
      }
    }
    triangles.truncate(3 * kept);
    log::trace!("trimmed {} of {} triangles", before - kept, before);
    Ok(())
  }
}

// Triangulates the collinear run at the start of the sweep together with the
// first point off its line, and closes every hull edge with a ghost triangle.
// Returns the position of that first point, or `None` if there is none.
fn seed<T, V>(
  vertex: &V,
  n: usize,
  chain: &mut Vec<usize>,
  triangles: &mut Vec<[usize; 3]>,
  edges: &mut BTreeMap<(usize, usize), (usize, usize)>,
) -> Option<usize>
where
  T: Scalar,
  V: Fn(usize) -> [T; 2],
{
  let first = vertex(0);
  let second = (1..n).find(|&k| vertex(k) != first)?;
  let apex = (second + 1..n)
    .find(|&k| !Orientation::new(&first, &vertex(second), &vertex(k)).is_colinear())?;

  // Along a line, lexicographic order is the order of the points on it.
  chain.clear();
  chain.extend(0..apex);
  chain.sort_by(|&a, &b| {
    let [ax, ay] = vertex(a);
    let [bx, by] = vertex(b);
    (ax, ay).total_cmp(&(bx, by))
  });
  chain.dedup_by(|a, b| vertex(*a) == vertex(*b));

  let top = vertex(apex);
  edges.clear();
  for pair in chain.windows(2) {
    let (a, b) = (pair[0], pair[1]);
    let tri = if Orientation::new(&vertex(a), &vertex(b), &top).is_cw() {
      [a, b, apex]
    } else {
      [b, a, apex]
    };
    for (u, v) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
      toggle_edge(edges, u, v);
    }
    triangles.push(tri);
  }
  // Edges seen once are on the hull. The ghost runs along them the other way.
  for &(u, v) in edges.values() {
    triangles.push([v, u, GHOST]);
  }
  log::trace!(
    "seeded with {} triangles from a run of {} collinear points",
    triangles.len(),
    apex
  );
  Some(apex)
}

fn toggle_edge(edges: &mut BTreeMap<(usize, usize), (usize, usize)>, a: usize, b: usize) {
  match edges.entry((a.min(b), a.max(b))) {
    Entry::Occupied(shared) => {
      shared.remove();
    }
    Entry::Vacant(slot) => {
      slot.insert((a, b));
    }
  }
}

fn widen<T: Scalar>(pt: &[T; 2]) -> [f64; 2] {
  [pt[0].as_f64(), pt[1].as_f64()]
}

// `trig` is clockwise. Points on the circle count as inside. The sweep test
// goes through a rounded circumcenter, so it keeps a relative margin.
fn classify<T: Scalar>(trig: &Triangle<T>, pt: &[T; 2], epsilon: f64) -> Circumcircle {
  let [a, b, c] = &trig.0;
  let [a, b, c, p] = [widen(a), widen(b), widen(c), widen(pt)];
  if incircle(a, c, b, p) >= 0.0 {
    return Circumcircle::Inside;
  }
  match Triangle::new([a, b, c]).circumcircle() {
    Some(([xc, _], r2)) if p[0] > xc && (p[0] - xc) * (p[0] - xc) > r2 * (1.0 + epsilon) => {
      Circumcircle::Complete
    }
    _ => Circumcircle::Incomplete,
  }
}

// The ghost triangle (a, b, infinity) borders a hull edge whose inside lies to
// the left of a -> b. Its circle is everything strictly to the right, plus the
// open segment itself. The rest of the line through a and b stays outside, or
// a point there would close a flat triangle.
fn classify_ghost<T: Scalar>(a: &[T; 2], b: &[T; 2], pt: &[T; 2]) -> Circumcircle {
  let inside = match Orientation::new(a, b, pt) {
    Orientation::ClockWise => true,
    Orientation::CounterClockWise => false,
    Orientation::CoLinear => {
      pt != a && pt != b && between(a[0], b[0], pt[0]) && between(a[1], b[1], pt[1])
    }
  };
  if inside {
    Circumcircle::Inside
  } else {
    Circumcircle::Incomplete
  }
}

fn between<T: Scalar>(a: T, b: T, v: T) -> bool {
  a.min(b) <= v && v <= a.max(b)
}
