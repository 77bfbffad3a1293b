//! Selects which known documents emit scoring diagnostics.

use serde::{Deserialize, Serialize};

/// Set of origin patterns to trace.
///
/// A pattern is `*` (every origin), `prefix*` (origins starting with
/// `prefix`) or an exact origin. An empty filter traces nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TraceFilter {
    patterns: Vec<String>,
}

impl TraceFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self { patterns }
    }

    /// Parse a comma-separated list such as `"gpl*,mit"`
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Filter that traces every origin
    #[must_use]
    pub fn all() -> Self {
        Self::new(["*"])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether diagnostics should be emitted for `origin`
    #[must_use]
    pub fn should_trace(&self, origin: &str) -> bool {
        self.patterns.iter().any(|p| match p.strip_suffix('*') {
            Some(prefix) => origin.starts_with(prefix),
            None => p == origin,
        })
    }
}

impl From<Vec<String>> for TraceFilter {
    fn from(patterns: Vec<String>) -> Self {
        Self::new(patterns)
    }
}

impl From<TraceFilter> for Vec<String> {
    fn from(filter: TraceFilter) -> Self {
        filter.patterns
    }
}
