//! Command-line interface for license-scorer.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **score**: Score an unknown file (or a token window of it) against a known license text
//! - **diff**: Show the token-level edit script and the matched core range
//!
//! ## Usage
//!
//! ```text
//! # Score a LICENSE file against a reference text
//! license-scorer score licenses/MIT.txt LICENSE
//!
//! # Only consider tokens 120..310 of the unknown file, JSON output
//! license-scorer score licenses/GPL-2.0.txt src/main.c --start 120 --end 310 --format json
//!
//! # Emit scoring diagnostics for the known text
//! license-scorer score licenses/GPL-2.0.txt COPYING --trace '*'
//!
//! # Inspect the edit script
//! license-scorer diff licenses/MIT.txt LICENSE
//! ```

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::core::document::Document;
use crate::utils::validation::MAX_INPUT_BYTES;

pub mod diff;
pub mod score;

#[derive(Parser)]
#[command(name = "license-scorer")]
#[command(version)]
#[command(about = "Score how closely a document reproduces a known license text")]
#[command(
    long_about = "license-scorer compares a document against a known license text.\n\nIt tolerates reflowing, punctuation and minor wording drift, but rejects edits that change the license:\n- Substituted version numbers\n- Introduced license families or exception clauses\n- Switching between the GPL and the LGPL"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score an unknown file against a known license text
    Score(score::ScoreArgs),

    /// Show the edit script between a known text and an unknown file
    Diff(diff::DiffArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Read and tokenize a text file, using its file stem as the origin
pub(crate) fn read_document(path: &Path) -> anyhow::Result<Document> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    if metadata.len() > MAX_INPUT_BYTES {
        anyhow::bail!(
            "{} is too large: {} bytes exceeds maximum of {MAX_INPUT_BYTES}",
            path.display(),
            metadata.len()
        );
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let origin = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown");
    Ok(Document::from_text(origin, &text))
}
