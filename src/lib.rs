//! # license-scorer
//!
//! A library for deciding whether a span of a document is an acceptable copy
//! of a known license text.
//!
//! License texts found in the wild are rarely byte-identical to the
//! canonical text: they are reflowed, reworded slightly, or embedded in a
//! larger file. Some small edits, however, change the license itself: a new
//! version number, an added exception clause, or "Lesser" turning the GPL
//! into the LGPL.
//!
//! `license-scorer` diffs a window of an unknown document against a known
//! text, rejects legally significant edits outright, and otherwise reports a
//! confidence score with the exact span that matched.
//!
//! ## Example
//!
//! ```rust
//! use license_scorer::{score, Disqualification, Document, Window};
//!
//! let known = Document::from_text("GPL-2.0", "the gnu general public license version 2");
//! let unknown = Document::from_text("COPYING", "The GNU General Public License, version 3");
//!
//! let result = score(&known, &unknown, Window::full(&unknown));
//! assert_eq!(result.rejection, Some(Disqualification::VersionChange));
//! assert_eq!(result.confidence, 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Documents, windows and result types
//! - [`matching`]: Diff engine, range trimming, disqualification rules, scoring
//! - [`utils`]: Trace filtering and input validation
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::document::{Document, Window, WindowError};
pub use crate::core::types::*;
pub use crate::matching::engine::{score, ConfigError, Scorer, ScoringConfig};
