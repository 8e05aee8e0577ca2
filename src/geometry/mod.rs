//! Geometric primitives shared by every point set in this crate.

mod point;
mod rect;

pub use point::Point2D;
pub use rect::Rect;
