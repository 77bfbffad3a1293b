use serde::{Deserialize, Serialize};

use crate::core::document::{Document, Window};

/// Reason an otherwise similar window is rejected outright.
///
/// Each variant marks an edit that changes which license the text grants,
/// no matter how few words it touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disqualification {
    /// A version number following the word "version" was substituted
    VersionChange,
    /// A license-family name or exception clause was introduced
    IntroducedPhrase,
    /// "Lesser" was added to or removed from a GNU license name
    LesserGplChange,
}

impl Disqualification {
    /// Numeric code used by older callers that multiplexed rejections
    /// into a signed distance.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::VersionChange => -1,
            Self::IntroducedPhrase => -2,
            Self::LesserGplChange => -3,
        }
    }
}

impl std::fmt::Display for Disqualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VersionChange => write!(f, "version change"),
            Self::IntroducedPhrase => write!(f, "introduced phrase"),
            Self::LesserGplChange => write!(f, "lesser GPL change"),
        }
    }
}

/// Outcome of scanning an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No rule fired; carries the word-level edit distance
    Accepted { distance: usize },
    /// A rule fired and scanning stopped
    Rejected(Disqualification),
}

impl Verdict {
    #[must_use]
    pub fn distance(self) -> Option<usize> {
        match self {
            Self::Accepted { distance } => Some(distance),
            Self::Rejected(_) => None,
        }
    }

    #[must_use]
    pub fn rejection(self) -> Option<Disqualification> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// Similarity of a known license to a window of an unknown document.
///
/// `match_start` and `match_end` are the number of tokens trimmed from the
/// front and the back of the window before the known text begins and after
/// it ends. Use [`ScoreResult::matched_window`] to get absolute positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// `1 - distance / known_len`; 0.0 when rejected
    pub confidence: f64,

    /// Tokens of unrelated text before the match
    pub match_start: usize,

    /// Tokens of unrelated text after the match
    pub match_end: usize,

    /// Why the window was rejected, if it was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Disqualification>,
}

impl ScoreResult {
    /// Zero-confidence result for a rejected window
    #[must_use]
    pub fn rejected(reason: Disqualification) -> Self {
        Self {
            confidence: 0.0,
            match_start: 0,
            match_end: 0,
            rejection: Some(reason),
        }
    }

    #[must_use]
    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    /// Absolute span of the matched text inside the unknown document.
    ///
    /// `window` is clamped to `unknown` the same way scoring clamps it, so
    /// the span never extends past the document. Returns `None` for
    /// rejected results, which carry no offsets.
    #[must_use]
    pub fn matched_window(&self, unknown: &Document, window: Window) -> Option<Window> {
        if self.is_rejected() {
            return None;
        }
        let window = unknown.clamp_window(window);
        let start = (window.start + self.match_start).min(window.end);
        let end = window.end.saturating_sub(self.match_end).max(start);
        Some(Window { start, end })
    }
}
