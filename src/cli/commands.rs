//! Line reader and command dispatcher over a [`DirectoryTree`].

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use tracing::{instrument, warn};

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::domain::DirectoryTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.file {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Script {
                path: path.clone(),
                source,
            })?;
            run_script(BufReader::new(file), io::stdout().lock())
        }
        None => run_script(io::stdin().lock(), io::stdout().lock()),
    }
}

/// Feed a command script to a fresh tree.
///
/// Echoes, listings and error reports all go to `out` as line-oriented
/// text, one transcript per script.
pub fn run_script<R: BufRead, W: Write>(input: R, mut out: W) -> CliResult<()> {
    let mut tree = DirectoryTree::new();
    for line in input.lines() {
        let line = line?;
        dispatch(&mut tree, line.trim(), &mut out)?;
    }
    Ok(())
}

/// Execute a single command line: echo the recognized command, run the
/// operation, report any traversal error on the transcript.
#[instrument(level = "debug", skip(tree, out))]
fn dispatch<W: Write>(tree: &mut DirectoryTree, line: &str, out: &mut W) -> CliResult<()> {
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    match verb {
        "CREATE" => {
            writeln!(out, "CREATE {}", rest)?;
            tree.create(rest);
        }
        "LIST" => {
            writeln!(out, "LIST")?;
            for (depth, name) in tree.list() {
                writeln!(out, "{}{}", "  ".repeat(depth), name)?;
            }
        }
        "MOVE" => {
            let mut args = rest.split(' ');
            let from = args.next().unwrap_or_default();
            let to = args.next().unwrap_or_default();
            writeln!(out, "MOVE {} {}", from, to)?;
            if let Err(e) = tree.move_node(from, to) {
                writeln!(out, "{}", e)?;
            }
        }
        "DELETE" => {
            writeln!(out, "DELETE {}", rest)?;
            if let Err(e) = tree.delete(rest) {
                writeln!(out, "{}", e)?;
            }
        }
        _ => {
            warn!("unrecognized command: {:?}", line);
            writeln!(out, "Invalid command")?;
        }
    }
    Ok(())
}
