use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WindowError {
    #[error("Window start {start} is after its end {end}")]
    Inverted { start: usize, end: usize },

    #[error("Window end {end} exceeds document length {len}")]
    OutOfBounds { end: usize, len: usize },
}

/// Half-open range `[start, end)` of token indices into a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Create a window, rejecting inverted ranges.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::Inverted`] if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// Window covering every token of `doc`
    #[must_use]
    pub fn full(doc: &Document) -> Self {
        Self {
            start: 0,
            end: doc.len(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}-{})", self.start, self.end)
    }
}

/// A tokenized, normalized text.
///
/// Tokens are lowercased and trimmed on construction, so every rule that
/// inspects diff text can compare against lowercase literals. Deserialized
/// documents go through the same normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct Document {
    origin: String,
    tokens: Vec<String>,
}

/// Serialized form of a [`Document`] before normalization
#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    origin: String,
    tokens: Vec<String>,
}

impl From<RawDocument> for Document {
    fn from(raw: RawDocument) -> Self {
        Self::new(raw.origin, raw.tokens)
    }
}

impl Document {
    pub fn new<I, S>(origin: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self {
            origin: origin.into(),
            tokens,
        }
    }

    /// Tokenize raw text into a document.
    ///
    /// Splits on whitespace and strips punctuation surrounding each word;
    /// punctuation inside a word (the dot in `2.0`, the dash in `gpl-2.0`)
    /// is kept.
    pub fn from_text(origin: impl Into<String>, text: &str) -> Self {
        Self::new(
            origin,
            text.split_whitespace()
                .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric())),
        )
    }

    /// Identifier of where this text came from, used to gate tracing
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }

    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces
    #[must_use]
    pub fn normalized(&self) -> String {
        self.tokens.join(" ")
    }

    /// `window` shrunk to fit inside the document
    #[must_use]
    pub fn clamp_window(&self, window: Window) -> Window {
        let end = window.end.min(self.tokens.len());
        let start = window.start.min(end);
        Window { start, end }
    }

    /// Tokens covered by `window`, clamped to the document bounds
    #[must_use]
    pub fn window_tokens(&self, window: Window) -> &[String] {
        let Window { start, end } = self.clamp_window(window);
        &self.tokens[start..end]
    }
}
