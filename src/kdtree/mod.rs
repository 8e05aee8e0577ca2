//! An implementation of a mutable, unbalanced 2d-tree with pruned range and nearest-neighbor
//! search.

#![warn(missing_docs)]

mod index;
mod r#trait;
mod traversal;

pub use index::KdTree;
pub use traversal::{Iter, KdNode, Orientation};
