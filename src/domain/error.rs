//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Traversal failures raised by move and delete.
///
/// `create` and `list` are total over any path string and never fail.
/// A failed operation leaves the tree untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A required path segment has no matching child.
    #[error("Cannot {operation} {path} - {segment} does not exist")]
    SegmentNotFound {
        operation: &'static str,
        path: String,
        segment: String,
    },

    /// The move destination is the moved node itself or one of its
    /// descendants; attaching would detach a cycle from the root.
    #[error("Cannot move {from} to {to} - destination is inside the moved subtree")]
    DestinationInsideSource { from: String, to: String },
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
