//! Queries over a suffix array
//!
//! - `search`: binary search for substring containment, counts and positions
//! - `repeats`: longest repeated substring and distinct substring counts
//!
//! The free functions build a throwaway index; build a [`SuffixArray`] once
//! when asking more than one question about the same text.

pub mod repeats;
pub mod search;

use crate::index::SuffixArray;

/// Whether `pattern` occurs as a contiguous substring of `source`
pub fn contains<T: Ord + Copy>(source: &[T], pattern: &[T]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    if pattern.len() > source.len() {
        return false;
    }
    SuffixArray::new(source).contains(pattern)
}

/// Longest substring of `source` occurring at least twice (possibly empty)
pub fn longest_repeated_substring<T: Ord + Copy>(source: &[T]) -> &[T] {
    let range = SuffixArray::new(source).longest_repeat_range();
    &source[range]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        assert!(contains(b"banana", b"nan"));
        assert!(!contains(b"banana", b"xyz"));
        assert!(contains(b"", b""));
        assert!(!contains(b"", b"a"));
        assert!(contains(b"abc", b""));
    }

    #[test]
    fn test_longest_repeated_substring() {
        assert_eq!(longest_repeated_substring(b"banana"), b"ana");
        assert_eq!(longest_repeated_substring(b"mississippi"), b"issi");
        assert_eq!(longest_repeated_substring(b"abc"), b"");

        let text: Vec<char> = "to be or not to be".chars().collect();
        let lrs: String = longest_repeated_substring(&text).iter().collect();
        assert_eq!(lrs, "to be");
    }
}
