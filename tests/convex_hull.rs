mod convex_hull {
  use polytri::algorithms::*;
  use polytri::data::*;
  use polytri::*;

  use rand::rngs::SmallRng;
  use rand::{Rng, SeedableRng};

  #[test]
  fn unsorted_square() -> Result<(), Error> {
    let points = [1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    let hull = ConvexHull::new().hull_points(&points, false)?;
    assert_eq!(hull, vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0]);
    assert!(!PolygonView::new(&hull)?.is_clockwise());
    Ok(())
  }

  #[test]
  fn square_with_interior_point() -> Result<(), Error> {
    let points = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.5, 0.5];
    let ids = convex_hull(&points)?;
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert!(!ids.contains(&4));
    Ok(())
  }

  #[test]
  fn ordered_float_input() -> Result<(), Error> {
    use ordered_float::OrderedFloat;
    let points: Vec<OrderedFloat<f32>> = [2.0, 0.0, 0.0, 0.0, 1.0, 3.0, 1.0, 1.0]
      .iter()
      .map(|&v| OrderedFloat(v))
      .collect();
    assert_eq!(convex_hull(&points)?, vec![1, 0, 2]);
    Ok(())
  }

  #[test]
  fn random_disc() -> Result<(), Error> {
    let mut rng = SmallRng::seed_from_u64(7);
    let points: Vec<f64> = (0..5000)
      .flat_map(|_| {
        let angle: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let radius: f64 = rng.gen_range(0.0..1.0_f64).sqrt();
        [radius * angle.cos(), radius * angle.sin()]
      })
      .collect();
    let mut hull = ConvexHull::new();
    let ids = hull.hull_indices(&points, false)?;
    let set = PointSet::new(&points)?;
    assert!(ids.len() >= 3);
    for i in 0..ids.len() {
      let a = set.point(ids[i]);
      let b = set.point(ids[(i + 1) % ids.len()]);
      let c = set.point(ids[(i + 2) % ids.len()]);
      assert!(Orientation::new(&a, &b, &c).is_ccw());
    }
    for pt in set.iter() {
      for i in 0..ids.len() {
        let a = set.point(ids[i]);
        let b = set.point(ids[(i + 1) % ids.len()]);
        assert!(!Orientation::new(&a, &b, &pt).is_cw());
      }
    }
    Ok(())
  }
}
