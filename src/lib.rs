#![doc = include_str!("../README.md")]

pub mod brute_force;
mod error;
pub mod geometry;
pub mod kdtree;
mod r#trait;
mod r#type;

pub use brute_force::BruteForcePointSet;
pub use error::{PointSetError, Result};
pub use geometry::{Point2D, Rect};
pub use kdtree::KdTree;
pub use r#trait::PointSet;
pub use r#type::CoordNum;

#[cfg(test)]
pub(crate) mod test;
