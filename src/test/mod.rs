//! Fixtures shared by the tests comparing [`KdTree`] against [`BruteForcePointSet`].


use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{BruteForcePointSet, KdTree, Point2D, PointSet, Rect};

/// Points on a 100 x 100 grid over the unit square, so that duplicates and exact distance ties
/// show up.
pub(crate) fn grid_points(rng: &mut StdRng, n: usize) -> Vec<Point2D<f64>> {
    (0..n)
        .map(|_| {
            let x = rng.gen_range(0..100) as f64 / 100.0;
            let y = rng.gen_range(0..100) as f64 / 100.0;
            Point2D::new(x, y)
        })
        .collect()
}

/// Uniformly distributed points over the unit square.
pub(crate) fn uniform_points(rng: &mut StdRng, n: usize) -> Vec<Point2D<f64>> {
    (0..n)
        .map(|_| Point2D::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

pub(crate) fn random_rect(rng: &mut StdRng) -> Rect<f64> {
    let (x0, x1) = (rng.gen::<f64>(), rng.gen::<f64>());
    let (y0, y1) = (rng.gen::<f64>(), rng.gen::<f64>());
    Rect::new(x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1))
}

pub(crate) fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build both sets from the same points.
pub(crate) fn build_both(points: &[Point2D<f64>]) -> (KdTree<f64>, BruteForcePointSet<f64>) {
    let mut tree = KdTree::new();
    let mut oracle = BruteForcePointSet::new();
    for point in points {
        let in_tree = tree.insert(*point).unwrap();
        let in_oracle = oracle.insert(*point).unwrap();
        assert_eq!(in_tree, in_oracle, "both sets agree on novelty of {:?}", point);
    }
    (tree, oracle)
}
