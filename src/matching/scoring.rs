//! Word-level edit distance and the confidence derived from it.

use crate::matching::diff::{DiffKind, DiffOp};

/// Safely convert usize to f64 for ratio calculations
///
/// Precision loss only starts above 2^53 words, far beyond any license text.
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Word-level edit distance of an edit script.
///
/// Insertions and deletions between two `Equal` operations form one
/// substitution costing the larger of the two word counts, so replacing
/// two words with one costs 2, not 3.
#[must_use]
pub fn word_distance(ops: &[DiffOp]) -> usize {
    let mut distance = 0;
    let mut inserted = 0;
    let mut deleted = 0;

    for op in ops {
        match op.kind {
            DiffKind::Insert => inserted += op.word_count(),
            DiffKind::Delete => deleted += op.word_count(),
            DiffKind::Equal => {
                distance += inserted.max(deleted);
                inserted = 0;
                deleted = 0;
            }
        }
    }

    distance + inserted.max(deleted)
}

/// Confidence that the known text was matched, given its length in words.
///
/// An empty known text is trivially matched. The value is not clamped: a
/// distance larger than the known text gives a negative confidence.
#[must_use]
pub fn confidence(known_len: usize, distance: usize) -> f64 {
    if known_len == 0 {
        return 1.0;
    }
    1.0 - count_to_f64(distance) / count_to_f64(known_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_distance_substitution_costs_max() {
        let ops = vec![
            DiffOp::equal("a"),
            DiffOp::delete("b c"),
            DiffOp::insert("d"),
            DiffOp::equal("e"),
        ];
        assert_eq!(word_distance(&ops), 2);
    }

    #[test]
    fn test_word_distance_flushes_trailing_edits() {
        let ops = vec![
            DiffOp::equal("a"),
            DiffOp::insert("x y z"),
            DiffOp::equal("b"),
            DiffOp::delete("c"),
        ];
        assert_eq!(word_distance(&ops), 4);
    }

    #[test]
    fn test_word_distance_all_equal() {
        assert_eq!(word_distance(&[DiffOp::equal("a b c")]), 0);
        assert_eq!(word_distance(&[]), 0);
    }

    #[test]
    fn test_confidence() {
        assert!((confidence(100, 10) - 0.9).abs() < 1e-12);
        assert!((confidence(4, 1) - 0.75).abs() < 1e-12);
        assert!((confidence(10, 0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_empty_known_text() {
        assert!((confidence(0, 0) - 1.0).abs() < f64::EPSILON);
        assert!((confidence(0, 42) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_confidence_is_not_clamped() {
        assert!((confidence(2, 5) - (-1.5)).abs() < 1e-12);
    }
}
