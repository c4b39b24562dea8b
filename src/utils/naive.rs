//! Reference implementations
//!
//! Slow but obviously correct versions of every index operation. The
//! `verify` command, the tests and the fuzz targets compare the linear-time
//! engine against these.

use crate::index::SuffixArray;
use crate::index::lcp::common_prefix_len;
use memchr::memmem;
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Texts above this length are sorted in parallel
const PARALLEL_THRESHOLD: usize = 100_000;

/// Suffix array by comparison sort
///
/// Time: O(n log n) comparisons of up to O(n) symbols each
pub fn suffix_array<T: Ord + Sync>(text: &[T]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();

    if text.len() > PARALLEL_THRESHOLD {
        sa.par_sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    } else {
        sa.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
    }

    sa
}

/// LCP array by direct comparison of neighbouring suffixes
pub fn lcp_array<T: Eq>(text: &[T], pos: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; pos.len()];
    for i in 1..pos.len() {
        lcp[i] = common_prefix_len(&text[pos[i - 1]..], &text[pos[i]..]);
    }
    lcp
}

/// Substring test by scanning every window
pub fn contains<T: Eq>(text: &[T], pattern: &[T]) -> bool {
    pattern.is_empty() || text.windows(pattern.len()).any(|w| w == pattern)
}

/// Substring test for bytes
pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
    memmem::find(haystack, needle).is_some()
}

/// Length of the longest substring occurring at least twice, by comparing
/// every pair of start positions
pub fn longest_repeat_len<T: Eq>(text: &[T]) -> usize {
    let n = text.len();
    let mut best = 0;
    for i in 0..n {
        for j in i + 1..n {
            best = best.max(common_prefix_len(&text[i..], &text[j..]));
        }
    }
    best
}

/// Number of occurrences of `pattern`, overlapping ones included
pub fn count_occurrences<T: Eq>(text: &[T], pattern: &[T]) -> usize {
    if pattern.is_empty() {
        return text.len();
    }
    text.windows(pattern.len()).filter(|w| *w == pattern).count()
}

/// First disagreement between an index and the reference implementations
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Mismatch {
    #[error("suffix order differs at index {index}: expected {expected}, got {actual}")]
    SuffixOrder {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("rank of position {position} is {actual}, expected {expected}")]
    Rank {
        position: usize,
        expected: usize,
        actual: usize,
    },

    #[error("lcp differs at index {index}: expected {expected}, got {actual}")]
    Lcp {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("suffix tree leaf {index} does not spell suffix {suffix}")]
    TreeLeaf { index: usize, suffix: usize },

    #[error("longest repeat has length {actual}, expected {expected}")]
    LongestRepeat { expected: usize, actual: usize },
}

/// Check every array of `sa` and its suffix tree against the references.
///
/// The quadratic longest-repeat check only runs on texts of at most
/// `quadratic_limit` symbols.
pub fn verify<T: Ord + Copy + Sync>(
    sa: &SuffixArray<T>,
    quadratic_limit: usize,
) -> Result<(), Mismatch> {
    let text = sa.text();

    let expected_pos = suffix_array(text);
    if let Some(index) = first_difference(&expected_pos, sa.pos()) {
        return Err(Mismatch::SuffixOrder {
            index,
            expected: expected_pos[index],
            actual: sa.pos()[index],
        });
    }

    for (i, &p) in sa.pos().iter().enumerate() {
        if sa.rank()[p] != i {
            return Err(Mismatch::Rank {
                position: p,
                expected: i,
                actual: sa.rank()[p],
            });
        }
    }

    let expected_lcp = lcp_array(text, sa.pos());
    if let Some(index) = first_difference(&expected_lcp, sa.lcp()) {
        return Err(Mismatch::Lcp {
            index,
            expected: expected_lcp[index],
            actual: sa.lcp()[index],
        });
    }

    let tree = sa.suffix_tree();
    for (index, (id, suffix)) in tree.leaves().enumerate() {
        if suffix != sa.pos()[index] || tree.path_label(id) != &text[suffix..] {
            return Err(Mismatch::TreeLeaf { index, suffix });
        }
    }

    if text.len() <= quadratic_limit {
        let expected = longest_repeat_len(text);
        let actual = sa.longest_repeat_range().len();
        if expected != actual {
            return Err(Mismatch::LongestRepeat { expected, actual });
        }
    }

    Ok(())
}

fn first_difference(expected: &[usize], actual: &[usize]) -> Option<usize> {
    if expected.len() != actual.len() {
        return Some(expected.len().min(actual.len()));
    }
    expected.iter().zip(actual).position(|(a, b)| a != b)
}
