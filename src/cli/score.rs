//! Score command - score an unknown file against a known license text.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{read_document, OutputFormat};
use crate::core::document::{Document, Window};
use crate::core::types::ScoreResult;
use crate::matching::engine::{Scorer, ScoringConfig};
use crate::utils::trace::TraceFilter;
use crate::utils::validation::resolve_window;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Known license text
    #[arg(required = true)]
    pub known: PathBuf,

    /// Unknown file to score
    #[arg(required = true)]
    pub unknown: PathBuf,

    /// First token of the unknown file to consider (default: 0)
    #[arg(long)]
    pub start: Option<usize>,

    /// Token after the last one to consider (default: end of file)
    #[arg(long)]
    pub end: Option<usize>,

    /// JSON scoring configuration (phrases, clamping, trace origins)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated origins to trace, e.g. 'GPL*,MIT' or '*'
    #[arg(long)]
    pub trace: Option<String>,

    /// Clamp confidence into [0, 1]
    #[arg(long)]
    pub clamp: bool,
}

/// Build the scoring configuration from the config file and flag overrides
///
/// # Errors
///
/// Returns an error if the configuration file cannot be read or parsed.
pub fn resolve_config(args: &ScoreArgs) -> anyhow::Result<ScoringConfig> {
    let mut config = match &args.config {
        Some(path) => ScoringConfig::load_from_file(path)?,
        None => ScoringConfig::default(),
    };
    if let Some(list) = &args.trace {
        config.trace = TraceFilter::parse(list);
    }
    if args.clamp {
        config.clamp_confidence = true;
    }
    Ok(config)
}

/// Execute the score command with a configuration from [`resolve_config`]
///
/// # Errors
///
/// Returns an error if inputs cannot be read or the window lies outside the
/// unknown file.
#[allow(clippy::needless_pass_by_value)]
pub fn run(
    args: ScoreArgs,
    config: ScoringConfig,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let known = read_document(&args.known)?;
    let unknown = read_document(&args.unknown)?;
    let window = resolve_window(args.start, args.end, unknown.len())?;

    if verbose {
        eprintln!(
            "Known: {} ({} tokens), unknown: {} ({} tokens), window {window}",
            known.origin(),
            known.len(),
            unknown.origin(),
            unknown.len(),
        );
    }

    let result = Scorer::new(config).score(&known, &unknown, window);

    match format {
        OutputFormat::Text => print_text_result(&known, &unknown, window, &result),
        OutputFormat::Json => print_json_result(&known, &unknown, window, &result)?,
        OutputFormat::Tsv => print_tsv_result(&known, &unknown, window, &result),
    }

    Ok(())
}

fn print_text_result(known: &Document, unknown: &Document, window: Window, result: &ScoreResult) {
    println!("Scoring: {} vs {} {window}", known.origin(), unknown.origin());
    match (result.rejection, result.matched_window(unknown, window)) {
        (Some(reason), _) => {
            println!("  Rejected:   {reason}");
            println!("  Confidence: {:.1}%", result.confidence * 100.0);
        }
        (None, Some(span)) => {
            println!("  Confidence: {:.1}%", result.confidence * 100.0);
            println!(
                "  Matched:    tokens {span} ({} before, {} after)",
                result.match_start, result.match_end
            );
        }
        (None, None) => {
            println!("  Confidence: {:.1}%", result.confidence * 100.0);
        }
    }
}

fn print_json_result(
    known: &Document,
    unknown: &Document,
    window: Window,
    result: &ScoreResult,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "known": known.origin(),
        "unknown": unknown.origin(),
        "window": window,
        "result": result,
        "matched_window": result.matched_window(unknown, window),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_result(known: &Document, unknown: &Document, window: Window, result: &ScoreResult) {
    println!("known\tunknown\twindow_start\twindow_end\tconfidence\tmatch_start\tmatch_end\trejection");
    println!(
        "{}\t{}\t{}\t{}\t{:.4}\t{}\t{}\t{}",
        known.origin(),
        unknown.origin(),
        window.start,
        window.end,
        result.confidence,
        result.match_start,
        result.match_end,
        result
            .rejection
            .map_or_else(|| "-".to_string(), |r| r.to_string()),
    );
}
