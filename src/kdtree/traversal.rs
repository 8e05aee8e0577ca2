//! Utilities to traverse the KdTree structure.

use std::cmp::Ordering;

use tinyvec::TinyVec;

use crate::geometry::{Point2D, Rect};
use crate::r#type::CoordNum;

pub(crate) type Link<N> = Option<Box<KdNode<N>>>;

/// Which coordinate a node compares on to split its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Split by `x`: the node's partition line is vertical.
    Vertical,
    /// Split by `y`: the node's partition line is horizontal.
    Horizontal,
}

impl Orientation {
    /// The orientation of this node's children.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// The coordinate of `point` on this axis.
    #[inline]
    pub(crate) fn key<N: CoordNum>(self, point: &Point2D<N>) -> N {
        match self {
            Self::Vertical => point.x(),
            Self::Horizontal => point.y(),
        }
    }

    /// Compare two points on this axis only.
    #[inline]
    pub(crate) fn compare<N: CoordNum>(self, a: &Point2D<N>, b: &Point2D<N>) -> Ordering {
        self.key(a)
            .partial_cmp(&self.key(b))
            .unwrap_or(Ordering::Equal)
    }

    /// Split `rect` along this axis at `at`, returning the lesser and the greater half.
    ///
    /// The split coordinate is clamped into `rect`, so both halves stay well-formed even when
    /// `at` lies outside of it.
    pub(crate) fn split<N: CoordNum>(
        self,
        rect: &Rect<N>,
        at: &Point2D<N>,
    ) -> (Rect<N>, Rect<N>) {
        match self {
            Self::Vertical => {
                let x = at.x().max(rect.min_x()).min(rect.max_x());
                (
                    Rect::new(rect.min_x(), rect.min_y(), x, rect.max_y()),
                    Rect::new(x, rect.min_y(), rect.max_x(), rect.max_y()),
                )
            }
            Self::Horizontal => {
                let y = at.y().max(rect.min_y()).min(rect.max_y());
                (
                    Rect::new(rect.min_x(), rect.min_y(), rect.max_x(), y),
                    Rect::new(rect.min_x(), y, rect.max_x(), rect.max_y()),
                )
            }
        }
    }
}

/// A node in the KdTree.
///
/// Each node owns one point, the region of the plane that point subdivides and both of its
/// subtrees.
#[derive(Debug, Clone)]
pub struct KdNode<N: CoordNum> {
    pub(crate) point: Point2D<N>,

    /// The region split by this node. Every point below this node lies within it when
    /// `escaped` is zero.
    pub(crate) rect: Rect<N>,

    pub(crate) orientation: Orientation,

    /// Points strictly less than `point` on this node's axis.
    pub(crate) left: Link<N>,

    /// Points greater than or equal to `point` on this node's axis.
    pub(crate) right: Link<N>,

    /// Number of points in the subtree rooted here, this node included.
    pub(crate) count: usize,

    /// Number of points in the subtree rooted here lying outside their own node's region.
    pub(crate) escaped: usize,
}

impl<N: CoordNum> KdNode<N> {
    pub(crate) fn new(point: Point2D<N>, rect: Rect<N>, orientation: Orientation) -> Self {
        let escaped = usize::from(!rect.contains(&point));
        Self {
            point,
            rect,
            orientation,
            left: None,
            right: None,
            count: 1,
            escaped,
        }
    }

    /// The point stored in this node.
    #[inline]
    pub fn point(&self) -> &Point2D<N> {
        &self.point
    }

    /// The region of the plane this node subdivides.
    #[inline]
    pub fn rect(&self) -> &Rect<N> {
        &self.rect
    }

    /// The axis this node splits its region on.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The child holding points strictly less than this node's point on its axis.
    #[inline]
    pub fn left(&self) -> Option<&KdNode<N>> {
        self.left.as_deref()
    }

    /// The child holding points greater than or equal to this node's point on its axis.
    #[inline]
    pub fn right(&self) -> Option<&KdNode<N>> {
        self.right.as_deref()
    }

    /// The number of points in the subtree rooted at this node.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this node's region holds every point of its subtree, so that queries
    /// may skip the whole subtree by looking at the region alone.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.escaped == 0
    }

    /// The number of levels in the subtree rooted at this node.
    pub fn height(&self) -> usize {
        let mut stack: TinyVec<[(Option<&KdNode<N>>, usize); 32]> = TinyVec::new();
        stack.push((Some(self), 1));

        let mut height = 0;
        while let Some((next, depth)) = stack.pop() {
            let Some(node) = next else {
                continue;
            };
            height = height.max(depth);
            stack.push((node.left(), depth + 1));
            stack.push((node.right(), depth + 1));
        }
        height
    }

    /// Returns `true` if `point` belongs in the left subtree of this node.
    #[inline]
    pub(crate) fn goes_left(&self, point: &Point2D<N>) -> bool {
        self.orientation.compare(point, &self.point) == Ordering::Less
    }

    /// The region a new child on the given side of this node covers.
    pub(crate) fn child_rect(&self, left: bool) -> Rect<N> {
        let (lesser, greater) = self.orientation.split(&self.rect, &self.point);
        if left {
            lesser
        } else {
            greater
        }
    }

    /// Recompute `count` and `escaped` from the children.
    pub(crate) fn recount(&mut self) {
        let left = self.left().map_or(0, KdNode::len);
        let right = self.right().map_or(0, KdNode::len);
        self.count = 1 + left + right;

        let own = usize::from(!self.rect.contains(&self.point));
        let left = self.left().map_or(0, |node| node.escaped);
        let right = self.right().map_or(0, |node| node.escaped);
        self.escaped = own + left + right;
    }
}

/// A pre-order, depth-first iterator over the points of a KdTree.
#[derive(Debug)]
pub struct Iter<'a, N: CoordNum> {
    stack: TinyVec<[Option<&'a KdNode<N>>; 32]>,
    remaining: usize,
}

impl<'a, N: CoordNum> Iter<'a, N> {
    pub(crate) fn new(root: Option<&'a KdNode<N>>) -> Self {
        let mut stack = TinyVec::new();
        stack.push(root);
        Self {
            stack,
            remaining: root.map_or(0, KdNode::len),
        }
    }
}

impl<'a, N: CoordNum> Iterator for Iter<'a, N> {
    type Item = &'a Point2D<N>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(next) = self.stack.pop() {
            let Some(node) = next else {
                continue;
            };
            // Note: pushed in backwards order to what gets popped
            self.stack.push(node.right());
            self.stack.push(node.left());
            self.remaining -= 1;
            return Some(&node.point);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<N: CoordNum> ExactSizeIterator for Iter<'_, N> {}
