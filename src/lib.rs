//! rstree: an in-memory directory tree driven by a line-oriented command
//! script (`CREATE`, `LIST`, `MOVE`, `DELETE`).

pub mod cli;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{DirectoryTree, TreeError};
