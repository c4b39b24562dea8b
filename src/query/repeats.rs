//! Repeat queries answered from the LCP array

use crate::index::SuffixArray;
use std::ops::Range;

impl<T> SuffixArray<T> {
    /// Text range of the longest substring occurring at least twice.
    ///
    /// Scans the LCP array once; on ties the first maximum in suffix array
    /// order wins. Empty when nothing repeats.
    pub fn longest_repeat_range(&self) -> Range<usize> {
        let mut best = 0..0;
        for (i, &h) in self.lcp().iter().enumerate().skip(1) {
            if h > best.len() {
                let start = self.pos()[i];
                best = start..start + h;
            }
        }
        best
    }

    /// Longest substring occurring at least twice (possibly empty)
    pub fn longest_repeated_substring(&self) -> &[T] {
        &self.text()[self.longest_repeat_range()]
    }

    /// Number of distinct non-empty substrings of the text
    pub fn distinct_substrings(&self) -> u64 {
        let n = self.len();
        let total: u64 = self.pos().iter().map(|&p| (n - p) as u64).sum();
        let shared: u64 = self.lcp().iter().map(|&h| h as u64).sum();
        total - shared
    }
}

#[cfg(test)]
mod tests {
    use crate::index::build_suffix_array;

    #[test]
    fn test_banana() {
        let sa = build_suffix_array(b"banana");
        assert_eq!(sa.longest_repeated_substring(), b"ana");
        assert_eq!(sa.longest_repeat_range(), 1..4);
    }

    #[test]
    fn test_no_repeats() {
        assert_eq!(build_suffix_array(b"abcdef").longest_repeated_substring(), b"");
        assert_eq!(build_suffix_array(b"x").longest_repeated_substring(), b"");
        assert_eq!(build_suffix_array::<u8>(b"").longest_repeated_substring(), b"");
    }

    #[test]
    fn test_overlapping_repeat() {
        assert_eq!(build_suffix_array(b"aaaa").longest_repeated_substring(), b"aaa");
    }

    #[test]
    fn test_first_maximum_wins() {
        let sa = build_suffix_array(b"cdabcdab");
        assert_eq!(sa.longest_repeated_substring(), b"cdab");

        // 'ab' and 'cd' both repeat; suffixes starting with 'ab' sort first
        let sa = build_suffix_array(b"abxcdyab_cd");
        assert_eq!(sa.longest_repeated_substring(), b"ab");
    }

    #[test]
    fn test_distinct_substrings() {
        // a, b, n, an, ba, na, ana, ban, nan, anan, bana, nana, anana, banan, banana
        assert_eq!(build_suffix_array(b"banana").distinct_substrings(), 15);
        assert_eq!(build_suffix_array(b"aaa").distinct_substrings(), 3);
        assert_eq!(build_suffix_array::<u8>(b"").distinct_substrings(), 0);
    }
}
