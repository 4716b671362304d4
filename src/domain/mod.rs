//! Domain layer: the directory tree and its operations
//!
//! This layer is independent of external concerns (no I/O, no CLI).

pub mod arena;
pub mod error;
pub mod tree;

pub use arena::{Node, NodeArena};
pub use error::{TreeError, TreeResult};
pub use tree::{DirectoryTree, ListEntries};
