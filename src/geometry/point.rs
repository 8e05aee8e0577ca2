use std::cmp::Ordering;
use std::fmt;

use geo_traits::CoordTrait;

use crate::error::{PointSetError, Result};
use crate::r#type::CoordNum;

/// An immutable point in the plane.
///
/// Equality is exact coordinate equality. Points are totally ordered by `x`, with ties broken
/// by `y`; this order drives iteration of the
/// [`BruteForcePointSet`][crate::BruteForcePointSet] and the order of range query results.
///
/// Every point stored in a set has finite coordinates, which is what makes the [`Ord`]
/// implementation total. A point with a NaN coordinate can be constructed, but all set
/// operations reject it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2D<N: CoordNum> {
    x: N,
    y: N,
}

impl<N: CoordNum> Point2D<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// Create a point from any [`CoordTrait`] implementation.
    pub fn from_coord(coord: &impl CoordTrait<T = N>) -> Self {
        Self::new(coord.x(), coord.y())
    }

    /// The `x` coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The `y` coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// Squared Euclidean distance to another point.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> N {
        sq_dist(self.x, self.y, other.x, other.y)
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Self) -> N {
        self.distance_squared_to(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Reject points that cannot be ordered or measured.
    pub(crate) fn validate(&self, operation: &str) -> Result<()> {
        if self.is_finite() {
            Ok(())
        } else {
            tracing::debug!(%operation, point = ?self, "rejected non-finite point");
            Err(PointSetError::InvalidArgument(format!(
                "{} requires finite coordinates, got {:?}",
                operation, self
            )))
        }
    }
}

impl<N: CoordNum> Eq for Point2D<N> {}

impl<N: CoordNum> Ord for Point2D<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Stored points are finite, so partial_cmp never fails for them
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

impl<N: CoordNum> PartialOrd for Point2D<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: CoordNum> From<(N, N)> for Point2D<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: CoordNum> From<[N; 2]> for Point2D<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: CoordNum + fmt::Display> fmt::Display for Point2D<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<N: CoordNum> CoordTrait for Point2D<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

#[inline]
pub(crate) fn sq_dist<N: CoordNum>(ax: N, ay: N, bx: N, by: N) -> N {
    let dx = ax - bx;
    let dy = ay - by;
    dx * dx + dy * dy
}
