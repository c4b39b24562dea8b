//! Substring search over a suffix array
//!
//! All suffixes starting with a pattern form one contiguous run of the
//! suffix array. Two binary searches find the run in O(m log n).

use crate::index::SuffixArray;
use std::ops::Range;

impl<T: Ord> SuffixArray<T> {
    /// Range of sorted suffixes that start with `pattern`.
    ///
    /// The empty pattern matches every suffix.
    pub fn search(&self, pattern: &[T]) -> Range<usize> {
        let lo = self.lower_bound(pattern);
        let hi = self.upper_bound(pattern, lo);
        lo..hi
    }

    /// Whether `pattern` occurs in the text. The empty pattern always does.
    pub fn contains(&self, pattern: &[T]) -> bool {
        pattern.is_empty() || !self.search(pattern).is_empty()
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &[T]) -> usize {
        self.search(pattern).len()
    }

    /// Text offsets where `pattern` occurs, in increasing order
    pub fn positions(&self, pattern: &[T]) -> Vec<usize> {
        let mut positions = self.pos()[self.search(pattern)].to_vec();
        positions.sort_unstable();
        positions
    }

    /// First index whose suffix is not smaller than `pattern`, comparing
    /// only the first `pattern.len()` symbols
    fn lower_bound(&self, pattern: &[T]) -> usize {
        let mut lo = 0;
        let mut hi = self.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let suffix = self.suffix(mid);
            let cmp_len = pattern.len().min(suffix.len());

            if &suffix[..cmp_len] < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// First index at or after `start` whose suffix does not start with
    /// `pattern`
    fn upper_bound(&self, pattern: &[T], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.suffix(mid).starts_with(pattern) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }
}
