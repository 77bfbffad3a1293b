//! Token-level edit scripts between an unknown window and a known text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Kind of a diff operation, seen from the unknown side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffKind {
    /// Text present in both documents
    Equal,
    /// Text present only in the known document
    Insert,
    /// Text present only in the unknown window
    Delete,
}

impl std::fmt::Display for DiffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Insert => write!(f, "insert"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A single edit: a kind plus the space-joined tokens it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOp {
    pub kind: DiffKind,
    pub text: String,
}

impl DiffOp {
    pub fn equal(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Equal,
            text: text.into(),
        }
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Insert,
            text: text.into(),
        }
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self {
            kind: DiffKind::Delete,
            text: text.into(),
        }
    }

    /// Number of words this operation covers
    #[must_use]
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }
}

/// Produces an edit script turning an unknown token window into a known text.
///
/// # Ordering precondition
///
/// Between two `Equal` operations an implementation emits at most one
/// `Delete` and at most one `Insert`, and the `Delete` always comes first.
/// The disqualification scanner reads a substitution as "delete, then
/// insert" and relies on this to see what an insertion replaced.
pub trait DiffEngine: Send + Sync {
    fn diff(&self, unknown: &[String], known: &[String]) -> Vec<DiffOp>;
}

/// Diff engine built on longest-common-run matching blocks.
///
/// The longest run of identical tokens is found first, then the regions to
/// its left and right are searched the same way until no common token is
/// left. Gaps between blocks become a `Delete` and/or an `Insert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingBlocksDiff;

impl DiffEngine for MatchingBlocksDiff {
    fn diff(&self, unknown: &[String], known: &[String]) -> Vec<DiffOp> {
        let blocks = matching_blocks(unknown, known);

        let mut ops = Vec::new();
        let (mut i, mut j) = (0usize, 0usize);
        let sentinel = (unknown.len(), known.len(), 0usize);
        for (bi, bj, k) in blocks.into_iter().chain(std::iter::once(sentinel)) {
            if i < bi {
                ops.push(DiffOp::delete(unknown[i..bi].join(" ")));
            }
            if j < bj {
                ops.push(DiffOp::insert(known[j..bj].join(" ")));
            }
            if k > 0 {
                ops.push(DiffOp::equal(unknown[bi..bi + k].join(" ")));
            }
            i = bi + k;
            j = bj + k;
        }
        ops
    }
}

/// Longest run of equal tokens in `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Returns `(i, j, size)`; ties go to the run starting earliest in `a`.
fn find_longest_match(
    a: &[String],
    b2j: &HashMap<&str, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let mut best_i = alo;
    let mut best_j = blo;
    let mut best_size = 0;

    // j2len[j] = length of the run ending at a[i - 1] and b[j]
    let mut j2len: HashMap<usize, usize> = HashMap::new();

    for (i, token) in a.iter().enumerate().take(ahi).skip(alo) {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(positions) = b2j.get(token.as_str()) {
            for &j in positions {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let prev_len = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0)
                } else {
                    0
                };
                let k = prev_len + 1;
                new_j2len.insert(j, k);

                if k > best_size {
                    best_i = i + 1 - k;
                    best_j = j + 1 - k;
                    best_size = k;
                }
            }
        }
        j2len = new_j2len;
    }

    (best_i, best_j, best_size)
}

/// All matching blocks between `a` and `b` as sorted, non-adjacent
/// `(a_pos, b_pos, len)` triples.
fn matching_blocks(a: &[String], b: &[String]) -> Vec<(usize, usize, usize)> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }

    let mut b2j: HashMap<&str, Vec<usize>> = HashMap::new();
    for (j, token) in b.iter().enumerate() {
        b2j.entry(token.as_str()).or_default().push(j);
    }

    let mut queue = vec![(0, a.len(), 0, b.len())];
    let mut blocks = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let (i, j, k) = find_longest_match(a, &b2j, alo, ahi, blo, bhi);
        if k > 0 {
            blocks.push((i, j, k));
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }
    }

    blocks.sort_unstable();

    let mut merged: Vec<(usize, usize, usize)> = Vec::with_capacity(blocks.len());
    for (i, j, k) in blocks {
        match merged.last_mut() {
            Some((pi, pj, pk)) if *pi + *pk == i && *pj + *pk == j => *pk += k,
            _ => merged.push((i, j, k)),
        }
    }
    merged
}

/// Number of whitespace-separated words in `text`
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Total words covered by `ops`, in the same unit as match offsets
#[must_use]
pub fn text_length(ops: &[DiffOp]) -> usize {
    ops.iter().map(DiffOp::word_count).sum()
}
