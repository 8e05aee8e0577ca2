use std::fmt;

use geo_traits::{CoordTrait, RectTrait};

use crate::error::{PointSetError, Result};
use crate::geometry::Point2D;
use crate::r#type::CoordNum;

/// An immutable axis-aligned rectangle.
///
/// Bounds are inclusive: a point on the boundary is contained, and two rectangles sharing
/// only an edge intersect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect<N: CoordNum> {
    min_x: N,
    min_y: N,
    max_x: N,
    max_y: N,
}

impl<N: CoordNum> Rect<N> {
    /// Create a new rectangle without validating it.
    ///
    /// Queries validate their rectangle argument, so an inverted or non-finite rectangle is
    /// only reported once it is used. See [`Rect::try_new`] to validate up front.
    pub fn new(min_x: N, min_y: N, max_x: N, max_y: N) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Create a new rectangle, checking that all bounds are finite and that `min <= max` on
    /// both axes.
    pub fn try_new(min_x: N, min_y: N, max_x: N, max_y: N) -> Result<Self> {
        let rect = Self::new(min_x, min_y, max_x, max_y);
        rect.validate("Rect::try_new")?;
        Ok(rect)
    }

    /// The unit square `[0, 1] x [0, 1]`.
    pub fn unit() -> Self {
        Self::new(N::zero(), N::zero(), N::one(), N::one())
    }

    /// Create a rectangle from any [`RectTrait`] implementation.
    pub fn from_rect(rect: &impl RectTrait<T = N>) -> Self {
        Self::new(
            rect.min().x(),
            rect.min().y(),
            rect.max().x(),
            rect.max().y(),
        )
    }

    /// Get the minimum `x` value of this rectangle.
    #[inline]
    pub fn min_x(&self) -> N {
        self.min_x
    }

    /// Get the minimum `y` value of this rectangle.
    #[inline]
    pub fn min_y(&self) -> N {
        self.min_y
    }

    /// Get the maximum `x` value of this rectangle.
    #[inline]
    pub fn max_x(&self) -> N {
        self.max_x
    }

    /// Get the maximum `y` value of this rectangle.
    #[inline]
    pub fn max_y(&self) -> N {
        self.max_y
    }

    /// Returns `true` if the point lies inside or on the boundary of this rectangle.
    #[inline]
    pub fn contains(&self, point: &Point2D<N>) -> bool {
        let (x, y) = (point.x(), point.y());
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Returns `true` if this rectangle intersects another one, boundaries included.
    pub fn intersects(&self, other: &Self) -> bool {
        if self.max_x < other.min_x {
            return false;
        }

        if self.max_y < other.min_y {
            return false;
        }

        if self.min_x > other.max_x {
            return false;
        }

        if self.min_y > other.max_y {
            return false;
        }

        true
    }

    /// Squared Euclidean distance from the closest point of this rectangle to `point`.
    ///
    /// Zero if the point lies inside or on the boundary.
    #[inline]
    pub fn distance_squared_to(&self, point: &Point2D<N>) -> N {
        let dx = axis_dist(point.x(), self.min_x, self.max_x);
        let dy = axis_dist(point.y(), self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Euclidean distance from the closest point of this rectangle to `point`.
    pub fn distance_to(&self, point: &Point2D<N>) -> N {
        self.distance_squared_to(point).sqrt()
    }

    /// Reject rectangles with non-finite bounds or with `min > max` on either axis.
    pub(crate) fn validate(&self, operation: &str) -> Result<()> {
        let finite = self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite();
        if !finite {
            tracing::debug!(%operation, rect = ?self, "rejected non-finite rect");
            return Err(PointSetError::InvalidArgument(format!(
                "{} requires finite bounds, got {:?}",
                operation, self
            )));
        }
        if self.min_x > self.max_x || self.min_y > self.max_y {
            tracing::debug!(%operation, rect = ?self, "rejected inverted rect");
            return Err(PointSetError::InvalidArgument(format!(
                "{} requires min <= max on both axes, got {:?}",
                operation, self
            )));
        }
        Ok(())
    }
}

impl<N: CoordNum + fmt::Display> fmt::Display for Rect<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

impl<N: CoordNum> RectTrait for Rect<N> {
    type T = N;
    type CoordType<'a>
        = Point2D<N>
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Point2D::new(self.min_x, self.min_y)
    }

    fn max(&self) -> Self::CoordType<'_> {
        Point2D::new(self.max_x, self.max_y)
    }
}

/// 1D distance from a value to a range.
#[inline]
fn axis_dist<N: CoordNum>(k: N, min: N, max: N) -> N {
    if k < min {
        min - k
    } else if k <= max {
        N::zero()
    } else {
        k - max
    }
}
