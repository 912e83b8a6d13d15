//! The §6 diagnostic CLI: `textdiff [-b] [-T <ms>] <file1> <file2>`.
//!
//! Prints the reference diagnostic rendering of `compute_diff`'s output to
//! stdout. `-b` additionally prints wall-clock timing after the result;
//! `-T` overrides the default 5000ms timeout. Exit code 0 on any run that
//! produced output (including a timed-out diff); nonzero only on I/O or
//! argument errors (spec §6).

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use vscode_diff_core::error::DiffError;
use vscode_diff_core::{compute_diff, diagnostic, DiffOptions};

/// Print a structured line-and-character diff between two files.
#[derive(Parser)]
struct Args {
    /// Print wall-clock timing after the result.
    #[arg(short = 'b')]
    timing: bool,

    /// Override the default computation timeout, in milliseconds (0 = unlimited).
    #[arg(short = 'T', value_name = "MS")]
    timeout_ms: Option<u32>,

    /// The original file.
    file1: PathBuf,

    /// The modified file.
    file2: PathBuf,
}

fn read_to_string(path: &PathBuf) -> Result<String, DiffError> {
    let bytes = fs::read(path).map_err(|source| DiffError::ReadFile {
        path: path.clone(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|_| DiffError::InvalidUtf8 { path: path.clone() })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let original_text = read_to_string(&args.file1).with_context(|| "reading file1")?;
    let modified_text = read_to_string(&args.file2).with_context(|| "reading file2")?;

    // Per spec §9 design note, the trailing empty string produced by
    // splitting on '\n' when the input ends with a newline is a real line
    // and must not be stripped.
    let original_lines: Vec<&str> = original_text.split('\n').collect();
    let modified_lines: Vec<&str> = modified_text.split('\n').collect();

    let mut options = DiffOptions::default();
    if let Some(ms) = args.timeout_ms {
        options.max_computation_time_ms = ms;
    }

    let start = Instant::now();
    let diff = compute_diff(&original_lines, &modified_lines, &options);
    let elapsed = start.elapsed();

    print!("{}", diagnostic::render(&diff));
    if args.timing {
        eprintln!("computed in {:.3}ms", elapsed.as_secs_f64() * 1000.0);
    }

    Ok(())
}
