use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::document::{Document, Window};
use crate::core::types::{ScoreResult, Verdict};
use crate::matching::diff::{text_length, DiffEngine, MatchingBlocksDiff};
use crate::matching::disqualify::{scan, PhraseTable};
use crate::matching::range::diff_range;
use crate::matching::scoring::confidence;
use crate::utils::trace::TraceFilter;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration for the scorer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Phrases whose insertion disqualifies a match
    pub phrases: PhraseTable,

    /// Clamp confidence into `[0, 1]` instead of allowing negative values
    pub clamp_confidence: bool,

    /// Origins of known documents to emit scoring diagnostics for
    pub trace: TraceFilter,
}

impl ScoringConfig {
    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Scores windows of unknown documents against known license texts.
///
/// A scorer holds only configuration and is safe to share between threads;
/// every call to [`Scorer::score`] is independent.
#[derive(Debug, Clone)]
pub struct Scorer<E = MatchingBlocksDiff> {
    config: ScoringConfig,
    engine: E,
}

impl Scorer<MatchingBlocksDiff> {
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_engine(config, MatchingBlocksDiff)
    }
}

impl<E: DiffEngine> Scorer<E> {
    pub fn with_engine(config: ScoringConfig, engine: E) -> Self {
        Self { config, engine }
    }

    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score `window` of `unknown` against the whole of `known`.
    ///
    /// The edit script is trimmed to the part that lines up with the known
    /// text before any rule is applied, so unrelated text around the license
    /// affects neither the verdict nor the confidence. The trimmed lengths
    /// are reported as `match_start` and `match_end`.
    #[must_use]
    pub fn score(&self, known: &Document, unknown: &Document, window: Window) -> ScoreResult {
        let origin = known.origin();
        let traced = self.config.trace.should_trace(origin);
        if traced {
            debug!(origin, %window, "Scoring");
        }

        let known_len = known.len();
        let ops = self
            .engine
            .diff(unknown.window_tokens(window), known.tokens());

        let (start, end) = diff_range(&ops, known_len);
        let distance = match scan(&ops[start..end], &self.config.phrases) {
            Verdict::Accepted { distance } => distance,
            Verdict::Rejected(reason) => {
                if traced {
                    debug!(origin, %reason, code = reason.code(), "Rejected match");
                }
                return ScoreResult::rejected(reason);
            }
        };

        let mut conf = confidence(known_len, distance);
        if self.config.clamp_confidence {
            conf = conf.clamp(0.0, 1.0);
        }
        let result = ScoreResult {
            confidence: conf,
            match_start: text_length(&ops[..start]),
            match_end: text_length(&ops[end..]),
            rejection: None,
        };

        if traced {
            debug!(
                origin,
                confidence = result.confidence,
                distance,
                match_start = result.match_start,
                match_end = result.match_end,
                "Score result"
            );
        }
        result
    }
}

/// Score with the default configuration and diff engine
#[must_use]
pub fn score(known: &Document, unknown: &Document, window: Window) -> ScoreResult {
    Scorer::new(ScoringConfig::default()).score(known, unknown, window)
}
