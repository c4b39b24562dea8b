//! The suffix array value: text, suffix order, rank and LCP arrays

use super::lcp::{lcp_array, rank_array};
use super::skew;
use serde::Serialize;

/// Suffix array of an owned text together with its rank and LCP arrays.
///
/// All arrays are computed once in [`SuffixArray::new`] and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixArray<T> {
    text: Vec<T>,
    pos: Vec<usize>,
    rank: Vec<usize>,
    lcp: Vec<usize>,
}

/// Build the suffix array, rank array and LCP array of `source`
pub fn build_suffix_array<T: Ord + Copy>(source: &[T]) -> SuffixArray<T> {
    SuffixArray::new(source.to_vec())
}

impl<T: Ord + Copy> SuffixArray<T> {
    pub fn new(text: impl Into<Vec<T>>) -> Self {
        let text = text.into();
        let pos = skew::suffix_array(&text);
        let rank = rank_array(&pos);
        let lcp = lcp_array(&text, &pos, &rank);
        Self {
            text,
            pos,
            rank,
            lcp,
        }
    }
}

impl<T> SuffixArray<T> {
    /// The indexed text
    pub fn text(&self) -> &[T] {
        &self.text
    }

    /// Suffix start positions in sorted order
    pub fn pos(&self) -> &[usize] {
        &self.pos
    }

    /// Sorted index of the suffix starting at each text position
    pub fn rank(&self) -> &[usize] {
        &self.rank
    }

    /// `lcp()[i]` is the common prefix length of sorted suffixes `i - 1` and `i`
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The `i`-th smallest suffix
    #[inline]
    pub fn suffix(&self, i: usize) -> &[T] {
        &self.text[self.pos[i]..]
    }

    /// All suffixes in sorted order
    pub fn suffixes(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.pos.iter().map(|&p| &self.text[p..])
    }

    /// Largest LCP value
    pub fn max_lcp(&self) -> usize {
        self.lcp.iter().copied().max().unwrap_or(0)
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<usize>, Vec<usize>, Vec<usize>) {
        (self.text, self.pos, self.rank, self.lcp)
    }
}
