use std::collections::BTreeSet;

use tinyvec::TinyVec;

use crate::error::Result;
use crate::geometry::{Point2D, Rect};
use crate::kdtree::traversal::{KdNode, Orientation};
use crate::kdtree::KdTree;
use crate::r#trait::PointSet;
use crate::r#type::CoordNum;

impl<N: CoordNum> PointSet<N> for KdTree<N> {
    fn len(&self) -> usize {
        self.root().map_or(0, KdNode::len)
    }

    fn insert(&mut self, point: Point2D<N>) -> Result<bool> {
        point.validate("insert")?;
        Ok(Self::insert_at(
            &mut self.root,
            point,
            self.bounds,
            Orientation::Vertical,
        ))
    }

    fn contains(&self, point: &Point2D<N>) -> Result<bool> {
        point.validate("contains")?;

        let mut next = self.root();
        while let Some(node) = next {
            if node.point == *point {
                return Ok(true);
            }
            next = if node.goes_left(point) {
                node.left()
            } else {
                node.right()
            };
        }
        Ok(false)
    }

    fn range(&self, rect: &Rect<N>) -> Result<Vec<Point2D<N>>> {
        rect.validate("range")?;
        let mut visited = 0;
        Ok(self.search_range(rect, &mut visited).into_iter().collect())
    }

    fn nearest(&self, point: &Point2D<N>) -> Result<Option<Point2D<N>>> {
        point.validate("nearest")?;
        let mut visited = 0;
        Ok(self.search_nearest(point, &mut visited))
    }
}

impl<N: CoordNum> KdTree<N> {
    /// Collect the points inside `rect`, counting the nodes whose point was examined in
    /// `visited`.
    pub(crate) fn search_range(
        &self,
        rect: &Rect<N>,
        visited: &mut usize,
    ) -> BTreeSet<Point2D<N>> {
        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[Option<&KdNode<N>>; 32]> = TinyVec::new();
        stack.push(self.root());

        let mut result = BTreeSet::new();

        while let Some(next) = stack.pop() {
            let Some(node) = next else {
                continue;
            };

            // a bounded region holds everything below it
            if node.is_bounded() && !node.rect.intersects(rect) {
                continue;
            }

            *visited += 1;
            if rect.contains(&node.point) {
                result.insert(node.point);
            }

            // Note: these are pushed in backwards order to what gets popped
            stack.push(node.right());
            stack.push(node.left());
        }

        result
    }

    /// Find a point closest to `query`, counting the nodes whose point was examined in
    /// `visited`.
    pub(crate) fn search_nearest(
        &self,
        query: &Point2D<N>,
        visited: &mut usize,
    ) -> Option<Point2D<N>> {
        let root = self.root()?;
        let best = Candidate::new(root.point, query);
        Some(nearest_in(Some(root), query, best, visited).point)
    }
}

/// The closest point found so far, with its squared distance to the query.
#[derive(Debug, Clone, Copy)]
struct Candidate<N: CoordNum> {
    point: Point2D<N>,
    dist: N,
}

impl<N: CoordNum> Candidate<N> {
    fn new(point: Point2D<N>, query: &Point2D<N>) -> Self {
        Self {
            point,
            dist: point.distance_squared_to(query),
        }
    }
}

fn nearest_in<N: CoordNum>(
    node: Option<&KdNode<N>>,
    query: &Point2D<N>,
    mut best: Candidate<N>,
    visited: &mut usize,
) -> Candidate<N> {
    let Some(node) = node else {
        return best;
    };

    // nothing in this region can beat the current best
    if node.is_bounded() && node.rect.distance_squared_to(query) >= best.dist {
        return best;
    }

    *visited += 1;

    // only a strictly closer point replaces the best so far
    let candidate = Candidate::new(node.point, query);
    if candidate.dist < best.dist {
        best = candidate;
    }

    // search the side of the split holding the query first, which tightens `best` early
    let (near, far) = if node.goes_left(query) {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };

    let best = nearest_in(near, query, best, visited);
    nearest_in(far, query, best, visited)
}
