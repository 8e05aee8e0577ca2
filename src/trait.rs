use geo_traits::{CoordTrait, RectTrait};

use crate::error::Result;
use crate::geometry::{Point2D, Rect};
use crate::r#type::CoordNum;

/// A trait for inserting into and querying a set of points.
///
/// Implemented by [`KdTree`][crate::KdTree] and by the reference
/// [`BruteForcePointSet`][crate::BruteForcePointSet]. Both implementations accept and reject
/// the same arguments and return the same results, so either one can validate the other.
///
/// Every fallible operation fails with
/// [`PointSetError::InvalidArgument`][crate::PointSetError::InvalidArgument] when handed a
/// point with non-finite coordinates or a rectangle that is non-finite or inverted. A failed
/// call never modifies the set.
pub trait PointSet<N: CoordNum>: Sized {
    /// The number of distinct points in this set.
    fn len(&self) -> usize;

    /// Returns `true` if this set holds no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a point to the set.
    ///
    /// Returns `true` if the point was not present before. Inserting a point that is already
    /// in the set leaves the set unchanged.
    fn insert(&mut self, point: Point2D<N>) -> Result<bool>;

    /// Returns `true` if the set holds a point exactly equal to `point`.
    fn contains(&self, point: &Point2D<N>) -> Result<bool>;

    /// All points inside `rect`, boundaries included.
    ///
    /// Results are distinct and sorted by the total order on [`Point2D`].
    fn range(&self, rect: &Rect<N>) -> Result<Vec<Point2D<N>>>;

    /// A point of the set closest to `point`, or `None` if the set is empty.
    ///
    /// When several points are equally close, which one is returned depends on the
    /// implementation's traversal order; only a strictly closer point ever replaces the
    /// current best candidate.
    fn nearest(&self, point: &Point2D<N>) -> Result<Option<Point2D<N>>>;

    /// Add every point of an iterator, stopping at the first invalid point.
    ///
    /// Points before the invalid one stay inserted. Returns the number of points that were
    /// newly added.
    fn insert_all(&mut self, points: impl IntoIterator<Item = Point2D<N>>) -> Result<usize> {
        let mut added = 0;
        for point in points {
            if self.insert(point)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Returns `true` if the set holds a point with the same coordinates as `coord`.
    fn contains_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<bool> {
        self.contains(&Point2D::from_coord(coord))
    }

    /// Search the set for points within a given rectangle.
    fn range_rect(&self, rect: &impl RectTrait<T = N>) -> Result<Vec<Point2D<N>>> {
        self.range(&Rect::from_rect(rect))
    }

    /// Search the set for the point closest to a given coordinate.
    fn nearest_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Option<Point2D<N>>> {
        self.nearest(&Point2D::from_coord(coord))
    }
}
