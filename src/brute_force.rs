//! A brute-force point set, used as the reference for [`KdTree`][crate::KdTree].

use std::collections::BTreeSet;

use crate::error::Result;
use crate::geometry::{Point2D, Rect};
use crate::r#trait::PointSet;
use crate::r#type::CoordNum;

/// A set of points answering every query with a linear scan.
///
/// Points are kept in a [`BTreeSet`] ordered by the total order on [`Point2D`]. There is no
/// spatial partitioning: `range` and `nearest` are `O(n)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BruteForcePointSet<N: CoordNum> {
    points: BTreeSet<Point2D<N>>,
}

impl<N: CoordNum> BruteForcePointSet<N> {
    /// Create a new, empty set.
    pub fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Iterate over the points of this set in point order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2D<N>> + '_ {
        self.points.iter()
    }
}

impl<N: CoordNum> PointSet<N> for BruteForcePointSet<N> {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn insert(&mut self, point: Point2D<N>) -> Result<bool> {
        point.validate("insert")?;
        Ok(self.points.insert(point))
    }

    fn contains(&self, point: &Point2D<N>) -> Result<bool> {
        point.validate("contains")?;
        Ok(self.points.contains(point))
    }

    fn range(&self, rect: &Rect<N>) -> Result<Vec<Point2D<N>>> {
        rect.validate("range")?;
        Ok(self
            .points
            .iter()
            .filter(|point| rect.contains(point))
            .copied()
            .collect())
    }

    fn nearest(&self, point: &Point2D<N>) -> Result<Option<Point2D<N>>> {
        point.validate("nearest")?;

        let mut best: Option<(Point2D<N>, N)> = None;
        for candidate in self.points.iter() {
            let dist = candidate.distance_squared_to(point);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((*candidate, dist)),
            }
        }
        Ok(best.map(|(nearest, _)| nearest))
    }
}
