//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// In-memory directory tree driven by a line-oriented command script
///
/// Each input line is one command: `CREATE <path>`, `LIST`,
/// `MOVE <from> <to>` or `DELETE <path>`.
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Command script to execute (reads stdin if omitted)
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Turn debugging information on (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,

    /// Print version and author info
    #[arg(long)]
    pub info: bool,
}
