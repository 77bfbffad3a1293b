//! Trimming an edit script down to the part that covers the known text.

use crate::matching::diff::{word_count, DiffKind, DiffOp};

/// Bounds `[start, end)` of the operations that cover the known text.
///
/// An edit script splits into three regions: deletions of unknown text that
/// precede the license, the operations that actually line up with the known
/// text, and deletions of unknown text after it. `start` is the first
/// `Equal` or `Insert`; `end` is the first index at which every known word
/// has been accounted for. Words are counted on the known side only, so
/// `known_len` is the length of the known document in tokens.
#[must_use]
pub fn diff_range(ops: &[DiffOp], known_len: usize) -> (usize, usize) {
    let mut start = None;
    let mut seen = 0usize;
    let mut end = 0usize;

    while end < ops.len() {
        if seen >= known_len {
            break;
        }
        let op = &ops[end];
        if matches!(op.kind, DiffKind::Equal | DiffKind::Insert) {
            start.get_or_insert(end);
            seen += word_count(&op.text);
        }
        end += 1;
    }

    (start.unwrap_or(0), end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_unknown_prefix_and_suffix() {
        let ops = vec![
            DiffOp::delete("copyright 2020 acme"),
            DiffOp::equal("permission is hereby granted"),
            DiffOp::delete("see file"),
        ];
        assert_eq!(diff_range(&ops, 4), (1, 2));
    }

    #[test]
    fn test_inner_deletions_stay_in_range() {
        let ops = vec![
            DiffOp::equal("a"),
            DiffOp::delete("x"),
            DiffOp::insert("b"),
            DiffOp::equal("c d"),
            DiffOp::delete("trailer"),
        ];
        assert_eq!(diff_range(&ops, 4), (0, 4));
    }

    #[test]
    fn test_leading_insert_starts_range() {
        let ops = vec![DiffOp::delete("junk"), DiffOp::insert("a b")];
        assert_eq!(diff_range(&ops, 2), (1, 2));
    }

    #[test]
    fn test_empty_known_text() {
        let ops = vec![DiffOp::delete("everything here")];
        assert_eq!(diff_range(&ops, 0), (0, 0));
        assert_eq!(diff_range(&[], 0), (0, 0));
    }

    #[test]
    fn test_incomplete_script_runs_to_end() {
        let ops = vec![DiffOp::delete("x"), DiffOp::equal("a")];
        assert_eq!(diff_range(&ops, 5), (1, 2));
    }
}
