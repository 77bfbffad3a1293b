//! Rules that veto a match regardless of how similar the texts are.
//!
//! The scanner walks the core of an edit script once. It remembers the last
//! `Equal` text (the context an edit happens in) and the last `Delete` text
//! since that `Equal` (what an insertion replaced). Three rules can fire:
//!
//! | Rule | Trigger |
//! |------|---------|
//! | Version change | an inserted number right after "... version" |
//! | Introduced phrase | an insertion containing a [`PhraseTable`] entry |
//! | Lesser GPL change | "lesser" added or removed right after "... gnu" |
//!
//! The first rule to fire ends the scan. If none fires, the word distance of
//! the script is returned.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::core::types::{Disqualification, Verdict};
use crate::matching::diff::{DiffKind, DiffOp};
use crate::matching::scoring::word_distance;

/// Phrases whose introduction changes the effective license
pub const DEFAULT_DISQUALIFYING_PHRASES: &[&str] = &[
    "autoconf exception",
    "class path exception",
    "gcc linking exception",
    "bison exception",
    "font exception",
    "imagemagick",
    "x consortium",
    "apache",
    "bsd",
    "affero",
    "sun standards",
];

/// Immutable set of disqualifying phrases.
///
/// Matching is plain substring containment, ignoring ASCII case: "bsd"
/// matches inside "bsd-style" and inside "BSD". Phrases are stored
/// lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct PhraseTable {
    phrases: Vec<String>,
}

impl PhraseTable {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_ascii_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self { phrases }
    }

    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// First phrase contained in `text`, if any
    #[must_use]
    pub fn find_in(&self, text: &str) -> Option<&str> {
        let text: Cow<'_, str> = if text.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(text.to_ascii_lowercase())
        } else {
            Cow::Borrowed(text)
        };
        self.phrases
            .iter()
            .find(|p| text.contains(p.as_str()))
            .map(String::as_str)
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        Self::new(DEFAULT_DISQUALIFYING_PHRASES)
    }
}

impl From<Vec<String>> for PhraseTable {
    fn from(phrases: Vec<String>) -> Self {
        Self::new(phrases)
    }
}

impl From<PhraseTable> for Vec<String> {
    fn from(table: PhraseTable) -> Self {
        table.phrases
    }
}

/// Scanner state between operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState<'a> {
    /// Nothing seen yet
    #[default]
    Initial,
    /// Last context was an `Equal` with this (trimmed) text
    AfterEqual(&'a str),
    /// A `Delete` followed the last `Equal` (empty if none was seen yet)
    AfterDelete { equal: &'a str, deleted: &'a str },
}

impl<'a> ScanState<'a> {
    /// Text of the most recent `Equal`, or "" before the first one
    #[must_use]
    pub fn equal_text(&self) -> &'a str {
        match *self {
            Self::Initial => "",
            Self::AfterEqual(equal) | Self::AfterDelete { equal, .. } => equal,
        }
    }

    /// Text of the most recent `Delete` since the last `Equal`
    #[must_use]
    pub fn deleted_text(&self) -> Option<&'a str> {
        match *self {
            Self::AfterDelete { deleted, .. } => Some(deleted),
            _ => None,
        }
    }

    #[must_use]
    pub fn on_equal(self, text: &'a str) -> Self {
        Self::AfterEqual(text)
    }

    /// Apply a deletion, or reject if it removes "lesser" from a GNU name.
    ///
    /// # Errors
    ///
    /// Returns [`Disqualification::LesserGplChange`] when the rule fires.
    pub fn on_delete(self, text: &'a str) -> Result<Self, Disqualification> {
        let equal = self.equal_text();
        if text == "lesser" && is_gnu_context(equal) {
            return Err(Disqualification::LesserGplChange);
        }
        Ok(Self::AfterDelete {
            equal,
            deleted: text,
        })
    }

    /// Check an insertion against every rule. Insertions do not change state.
    #[must_use]
    pub fn check_insert(&self, text: &str, phrases: &PhraseTable) -> Option<Disqualification> {
        let equal = self.equal_text();
        if is_version_change(equal, text) {
            return Some(Disqualification::VersionChange);
        }
        if phrases.find_in(text).is_some() {
            return Some(Disqualification::IntroducedPhrase);
        }
        if is_lesser_introduction(equal, self.deleted_text(), text) {
            return Some(Disqualification::LesserGplChange);
        }
        None
    }
}

/// A number inserted right after the generic word "version".
///
/// "the standard version" and "the contributor version" are defined terms in
/// some licenses, so numbers after them are not version declarations.
#[must_use]
pub fn is_version_change(equal: &str, inserted: &str) -> bool {
    let leading = inserted.split(' ').next().unwrap_or_default();
    is_decimal_number(leading)
        && equal.ends_with("version")
        && !equal.ends_with("the standard version")
        && !equal.ends_with("the contributor version")
}

/// "lesser" inserted into a GNU license name.
///
/// Replacing "library" with "lesser" is the accepted rename of the LGPL and
/// is allowed.
#[must_use]
pub fn is_lesser_introduction(equal: &str, deleted: Option<&str>, inserted: &str) -> bool {
    inserted == "lesser" && is_gnu_context(equal) && deleted != Some("library")
}

/// Context ending in "gnu", excluding warranty wording.
///
/// LGPL-3.0 headers are often hand-written and refer to the GPL in their
/// warranty sentence; "lesser" edits there are tolerated.
fn is_gnu_context(equal: &str) -> bool {
    equal.ends_with("gnu") && !equal.contains("warranty")
}

fn is_decimal_number(token: &str) -> bool {
    token.parse::<f64>().is_ok_and(f64::is_finite)
}

/// Scan an edit script for disqualifying edits.
///
/// Operation text is trimmed before any rule sees it. The script must follow
/// the [`DiffEngine`](crate::matching::diff::DiffEngine) ordering
/// precondition.
#[must_use]
pub fn scan(ops: &[DiffOp], phrases: &PhraseTable) -> Verdict {
    let mut state = ScanState::Initial;
    for op in ops {
        let text = op.text.trim();
        match op.kind {
            DiffKind::Insert => {
                if let Some(reason) = state.check_insert(text, phrases) {
                    return Verdict::Rejected(reason);
                }
            }
            DiffKind::Delete => match state.on_delete(text) {
                Ok(next) => state = next,
                Err(reason) => return Verdict::Rejected(reason),
            },
            DiffKind::Equal => state = state.on_equal(text),
        }
    }
    Verdict::Accepted {
        distance: word_distance(ops),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(ops: &[DiffOp]) -> Verdict {
        scan(ops, &PhraseTable::default())
    }

    #[test]
    fn test_version_change_after_version() {
        let ops = vec![
            DiffOp::equal("released under version"),
            DiffOp::delete("2"),
            DiffOp::insert("3"),
            DiffOp::equal("of the license"),
        ];
        assert_eq!(
            verdict(&ops),
            Verdict::Rejected(Disqualification::VersionChange)
        );
    }

    #[test]
    fn test_version_exemptions() {
        assert!(!is_version_change("distribute the standard version", "3"));
        assert!(!is_version_change("the contributor version", "2.1 of"));
        assert!(is_version_change("any later version", "2.1 of"));
        assert!(!is_version_change("any later version", "two"));
        assert!(!is_version_change("the license", "3"));
    }

    #[test]
    fn test_version_leading_token_must_be_finite_number() {
        assert!(is_version_change("version", "1.0"));
        assert!(is_version_change("version", "-2"));
        assert!(!is_version_change("version", "nan"));
        assert!(!is_version_change("version", "inf"));
        assert!(!is_version_change("version", ""));
    }

    #[test]
    fn test_introduced_phrase() {
        let ops = vec![
            DiffOp::equal("licensed under the"),
            DiffOp::delete("mit"),
            DiffOp::insert("apache"),
            DiffOp::equal("license"),
        ];
        assert_eq!(
            verdict(&ops),
            Verdict::Rejected(Disqualification::IntroducedPhrase)
        );
    }

    #[test]
    fn test_phrase_table_matching_policy() {
        let table = PhraseTable::default();
        assert_eq!(table.find_in("with the gcc linking exception"), Some("gcc linking exception"));
        assert_eq!(table.find_in("bsd-style"), Some("bsd"));
        assert_eq!(table.find_in("Apache Software Foundation"), Some("apache"));
        assert_eq!(table.find_in("gcc exception"), None);
        assert_eq!(table.find_in(""), None);
    }

    #[test]
    fn test_custom_phrase_table_is_lowercased() {
        let table = PhraseTable::new(["  Commons Clause ", ""]);
        assert_eq!(table.phrases(), ["commons clause"]);
        assert_eq!(table.find_in("the commons clause applies"), Some("commons clause"));
        assert_eq!(table.find_in("apache"), None);
    }

    #[test]
    fn test_lesser_insertion_in_gnu_context() {
        let ops = vec![
            DiffOp::equal("the gnu"),
            DiffOp::insert("lesser"),
            DiffOp::equal("general public license"),
        ];
        assert_eq!(
            verdict(&ops),
            Verdict::Rejected(Disqualification::LesserGplChange)
        );
    }

    #[test]
    fn test_library_to_lesser_is_allowed() {
        let ops = vec![
            DiffOp::equal("the gnu"),
            DiffOp::delete("library"),
            DiffOp::insert("lesser"),
            DiffOp::equal("general public license"),
        ];
        assert_eq!(verdict(&ops), Verdict::Accepted { distance: 1 });
    }

    #[test]
    fn test_lesser_in_warranty_context_is_allowed() {
        let ops = vec![
            DiffOp::equal("without any warranty see the gnu"),
            DiffOp::insert("lesser"),
            DiffOp::equal("general public license"),
        ];
        assert_eq!(verdict(&ops), Verdict::Accepted { distance: 1 });

        let ops = vec![
            DiffOp::equal("without any warranty see the gnu"),
            DiffOp::delete("lesser"),
            DiffOp::equal("general public license"),
        ];
        assert_eq!(verdict(&ops), Verdict::Accepted { distance: 1 });
    }

    #[test]
    fn test_lesser_deletion_in_gnu_context() {
        let ops = vec![
            DiffOp::equal("the gnu"),
            DiffOp::delete("lesser"),
            DiffOp::equal("general public license"),
        ];
        assert_eq!(
            verdict(&ops),
            Verdict::Rejected(Disqualification::LesserGplChange)
        );
    }

    #[test]
    fn test_state_transitions() {
        let state = ScanState::Initial;
        assert_eq!(state.equal_text(), "");
        assert_eq!(state.deleted_text(), None);

        let state = state.on_equal("the gnu");
        assert_eq!(state, ScanState::AfterEqual("the gnu"));

        let state = state.on_delete("library").unwrap();
        assert_eq!(
            state,
            ScanState::AfterDelete {
                equal: "the gnu",
                deleted: "library"
            }
        );

        let state = state.on_delete("old").unwrap();
        assert_eq!(state.deleted_text(), Some("old"));

        let state = state.on_equal("general");
        assert_eq!(state.deleted_text(), None);
    }

    #[test]
    fn test_prior_delete_is_cleared_by_equal() {
        // "library" was deleted before an Equal, so it no longer excuses "lesser"
        let state = ScanState::Initial
            .on_equal("x")
            .on_delete("library")
            .unwrap()
            .on_equal("the gnu");
        assert_eq!(
            state.check_insert("lesser", &PhraseTable::default()),
            Some(Disqualification::LesserGplChange)
        );
    }

    #[test]
    fn test_initial_state_vetoes_only_phrases() {
        let table = PhraseTable::default();
        let state = ScanState::Initial;
        assert_eq!(state.check_insert("3", &table), None);
        assert_eq!(state.check_insert("lesser", &table), None);
        assert_eq!(
            state.check_insert("x consortium", &table),
            Some(Disqualification::IntroducedPhrase)
        );
        assert_eq!(state.on_delete("lesser"), Ok(ScanState::AfterDelete { equal: "", deleted: "lesser" }));
    }

    #[test]
    fn test_first_rule_wins() {
        // Both a version number and a phrase; the version rule is checked first
        let ops = vec![DiffOp::equal("version"), DiffOp::insert("2 apache")];
        assert_eq!(
            verdict(&ops),
            Verdict::Rejected(Disqualification::VersionChange)
        );
    }

    #[test]
    fn test_op_text_is_trimmed() {
        let ops = vec![DiffOp::equal(" the gnu "), DiffOp::insert("  lesser ")];
        assert_eq!(
            verdict(&ops),
            Verdict::Rejected(Disqualification::LesserGplChange)
        );
    }

    #[test]
    fn test_clean_script_returns_distance() {
        let ops = vec![
            DiffOp::equal("a"),
            DiffOp::delete("b c"),
            DiffOp::insert("d"),
            DiffOp::equal("e"),
        ];
        assert_eq!(verdict(&ops), Verdict::Accepted { distance: 2 });
    }
}
