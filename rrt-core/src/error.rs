//! Error types for rrt-core.

use thiserror::Error;

/// Returned by nearest-neighbor queries against a tree with no nodes.
///
/// A tree built through [`crate::tree::Tree::new`] always starts with a
/// root, so this only occurs if the node arena was emptied by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("nearest-neighbor query on an empty tree")]
pub struct EmptyTreeError;
