use crate::error::Result;
use crate::geometry::{Point2D, Rect};
use crate::kdtree::traversal::{Iter, KdNode, Link, Orientation};
use crate::r#type::CoordNum;

/// A 2d-tree: a set of points stored in a binary tree that splits alternately on `x` and `y`.
///
/// Points are inserted one at a time. The tree is never rebalanced, so its shape is a
/// function of insertion order: random insertion order gives `O(log n)` expected depth, sorted
/// insertion order degrades it to `O(n)`.
///
/// `insert`, `nearest`, `Clone` and `Drop` recurse once per level of the tree, so a tree
/// built from hundreds of thousands of points in sorted order can exhaust the call stack.
/// `contains`, `range`, `iter` and `height` walk the tree iteratively.
///
/// Points outside the tree bounds are accepted. Subtrees holding such a point are searched
/// node by node, while every other subtree is still skipped by its region.
///
/// Queries go through the [`PointSet`][crate::PointSet] trait.
///
/// ```
/// use kd_pointset::{KdTree, Point2D, PointSet, Rect};
///
/// let mut tree = KdTree::new();
/// tree.insert(Point2D::new(0.7, 0.2)).unwrap();
/// tree.insert(Point2D::new(0.5, 0.4)).unwrap();
/// tree.insert(Point2D::new(0.2, 0.3)).unwrap();
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(
///     tree.nearest(&Point2D::new(0.55, 0.45)).unwrap(),
///     Some(Point2D::new(0.5, 0.4))
/// );
/// assert_eq!(tree.range(&Rect::new(0.0, 0.0, 0.4, 0.4)).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct KdTree<N: CoordNum> {
    pub(crate) root: Link<N>,

    /// The region of the root node.
    pub(crate) bounds: Rect<N>,
}

impl<N: CoordNum> KdTree<N> {
    /// Create a new, empty tree covering the unit square.
    pub fn new() -> Self {
        Self {
            root: None,
            bounds: Rect::unit(),
        }
    }

    /// Create a new, empty tree covering the provided bounds.
    ///
    /// Points outside of the bounds may still be inserted, but queries visit every node of
    /// the subtrees holding them.
    pub fn new_with_bounds(bounds: Rect<N>) -> Result<Self> {
        bounds.validate("KdTree::new_with_bounds")?;
        Ok(Self {
            root: None,
            bounds,
        })
    }

    /// The region covered by the root of this tree.
    pub fn bounds(&self) -> &Rect<N> {
        &self.bounds
    }

    /// Access the root node of the tree for manual traversal.
    pub fn root(&self) -> Option<&KdNode<N>> {
        self.root.as_deref()
    }

    /// The number of levels in this tree, `0` when empty.
    pub fn height(&self) -> usize {
        self.root().map_or(0, KdNode::height)
    }

    /// Iterate over all points depth-first, each node before its children.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(self.root())
    }

    /// Returns `true` if every point lies within the region of its node, so that queries may
    /// skip any subtree by its region.
    pub(crate) fn can_prune(&self) -> bool {
        self.root().map_or(true, KdNode::is_bounded)
    }

    /// Attach `point` below `link`, returning `true` if a node was created.
    ///
    /// `rect` and `orientation` describe the node that would be created at `link`. Counts are
    /// recomputed on the way back up.
    pub(crate) fn insert_at(
        link: &mut Link<N>,
        point: Point2D<N>,
        rect: Rect<N>,
        orientation: Orientation,
    ) -> bool {
        match link {
            None => {
                if !rect.contains(&point) {
                    tracing::debug!(?point, ?rect, "point lies outside of its region");
                }
                *link = Some(Box::new(KdNode::new(point, rect, orientation)));
                true
            }
            Some(node) => {
                if node.point == point {
                    tracing::trace!(?point, "point already present");
                    return false;
                }

                let left = node.goes_left(&point);
                let child_rect = node.child_rect(left);
                let child_orientation = node.orientation.flip();
                let child = if left {
                    &mut node.left
                } else {
                    &mut node.right
                };

                let inserted = Self::insert_at(child, point, child_rect, child_orientation);
                if inserted {
                    node.recount();
                }
                inserted
            }
        }
    }
}

impl<N: CoordNum> Default for KdTree<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, N: CoordNum> IntoIterator for &'a KdTree<N> {
    type Item = &'a Point2D<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
