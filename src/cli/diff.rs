//! Diff command - print the edit script used for scoring.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_document, OutputFormat};
use crate::matching::diff::{DiffEngine, DiffKind, MatchingBlocksDiff};
use crate::matching::range::diff_range;
use crate::utils::validation::resolve_window;

#[derive(Args)]
pub struct DiffArgs {
    /// Known license text
    #[arg(required = true)]
    pub known: PathBuf,

    /// Unknown file
    #[arg(required = true)]
    pub unknown: PathBuf,

    /// First token of the unknown file to consider (default: 0)
    #[arg(long)]
    pub start: Option<usize>,

    /// Token after the last one to consider (default: end of file)
    #[arg(long)]
    pub end: Option<usize>,
}

/// Execute the diff command
///
/// # Errors
///
/// Returns an error if inputs cannot be read or the window is invalid.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: DiffArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let known = read_document(&args.known)?;
    let unknown = read_document(&args.unknown)?;
    let window = resolve_window(args.start, args.end, unknown.len())?;

    let ops = MatchingBlocksDiff.diff(unknown.window_tokens(window), known.tokens());
    let (start, end) = diff_range(&ops, known.len());

    if verbose {
        eprintln!("{} operations, core range [{start}-{end})", ops.len());
    }

    match format {
        OutputFormat::Text => {
            for (i, op) in ops.iter().enumerate() {
                let marker = if (start..end).contains(&i) { ' ' } else { '~' };
                let sign = match op.kind {
                    DiffKind::Equal => ' ',
                    DiffKind::Insert => '+',
                    DiffKind::Delete => '-',
                };
                println!("{marker}{sign} {}", op.text);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "core_start": start,
                "core_end": end,
                "ops": ops,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("index\tkind\tcore\ttext");
            for (i, op) in ops.iter().enumerate() {
                println!("{i}\t{}\t{}\t{}", op.kind, (start..end).contains(&i), op.text);
            }
        }
    }

    Ok(())
}
