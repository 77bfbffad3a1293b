//! License-text scoring: diffing, trimming, vetoes and confidence.
//!
//! - [`Scorer`]: main entry point, scores one window against one known text
//! - [`DiffEngine`]: produces the token-level edit script
//! - [`diff_range`]: trims unrelated text around the match
//! - [`scan`]: applies the disqualification rules
//!
//! ## Scoring Algorithm
//!
//! 1. **Diff**: edit script from the unknown window to the known text
//! 2. **Trim**: drop leading and trailing deletions that lie outside the
//!    known text; their lengths become the match offsets
//! 3. **Veto**: reject version substitutions, introduced license-family
//!    phrases and GPL/LGPL swaps
//! 4. **Distance**: count word substitutions, a delete/insert pair costing
//!    the larger of its two sides
//! 5. **Confidence**: `1 - distance / known_len`
//!
//! ## Example
//!
//! ```rust
//! use license_scorer::{Document, Scorer, ScoringConfig, Window};
//!
//! let known = Document::from_text("MIT", "Permission is hereby granted, free of charge");
//! let unknown = Document::from_text("README", "Permission is hereby granted free of charge.");
//!
//! let scorer = Scorer::new(ScoringConfig::default());
//! let result = scorer.score(&known, &unknown, Window::full(&unknown));
//! assert_eq!(result.confidence, 1.0);
//! ```

pub mod diff;
pub mod disqualify;
pub mod engine;
pub mod range;
pub mod scoring;

pub use diff::{DiffEngine, DiffKind, DiffOp, MatchingBlocksDiff};
pub use disqualify::{scan, PhraseTable, ScanState};
pub use engine::{score, ConfigError, Scorer, ScoringConfig};
pub use range::diff_range;
pub use scoring::{confidence, word_distance};
