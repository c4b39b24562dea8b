//! Property tests checking the linear-time engine against brute force.
//!
//! Texts are drawn from small alphabets so that repeats, runs and shared
//! prefixes (the cases that make the skew recursion and the tree splits
//! interesting) show up constantly.

use proptest::prelude::*;
use sufx::utils::naive;
use sufx::{SuffixArray, build_suffix_array, build_suffix_tree};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Byte texts over a two- to four-letter alphabet, up to 200 bytes
fn small_alphabet_text() -> impl Strategy<Value = Vec<u8>> {
    (2u8..=4).prop_flat_map(|k| prop::collection::vec(b'a'..b'a' + k, 0..200))
}

/// Arbitrary bytes, including the zero byte
fn any_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..120)
}

/// A text together with a pattern that is either cut from it or random
fn text_and_pattern() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    small_alphabet_text().prop_flat_map(|text| {
        let len = text.len();
        let cut = (0..=len, 0..=8usize).prop_map({
            let text = text.clone();
            move |(start, width)| {
                let end = (start + width).min(len);
                text[start..end].to_vec()
            }
        });
        let random = prop::collection::vec(b'a'..b'e', 0..10);
        (Just(text), prop_oneof![cut, random])
    })
}

// ============================================================================
// SUFFIX ARRAY PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The suffix order is a permutation of the text positions.
    #[test]
    fn prop_pos_is_permutation(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        let mut sorted = sa.pos().to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..text.len()).collect::<Vec<_>>());
    }

    /// Suffixes appear in strictly increasing order.
    #[test]
    fn prop_suffixes_sorted(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        for i in 1..sa.len() {
            prop_assert!(sa.suffix(i - 1) < sa.suffix(i));
        }
    }

    /// The engine agrees with a comparison sort on arbitrary bytes.
    #[test]
    fn prop_matches_naive_sort(text in any_bytes()) {
        let sa = build_suffix_array(&text);
        prop_assert_eq!(sa.pos().to_vec(), naive::suffix_array(&text));
    }

    /// Rank and suffix order are inverse permutations.
    #[test]
    fn prop_rank_round_trip(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        for (i, &p) in sa.pos().iter().enumerate() {
            prop_assert_eq!(sa.rank()[p], i);
        }
        for (p, &r) in sa.rank().iter().enumerate() {
            prop_assert_eq!(sa.pos()[r], p);
        }
    }

    /// Every LCP entry equals the brute-force common prefix.
    #[test]
    fn prop_lcp_matches_brute_force(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        prop_assert_eq!(sa.lcp().to_vec(), naive::lcp_array(&text, sa.pos()));
        for i in 1..sa.len() {
            prop_assert!(sa.lcp()[i] <= text.len() - sa.pos()[i]);
            prop_assert!(sa.lcp()[i] <= text.len() - sa.pos()[i - 1]);
        }
    }

    /// Texts of `char`s follow code point order.
    #[test]
    fn prop_char_texts(text in "[aąbż]{0,60}") {
        let chars: Vec<char> = text.chars().collect();
        let sa = build_suffix_array(&chars);
        prop_assert_eq!(sa.pos().to_vec(), naive::suffix_array(&chars));
    }
}

// ============================================================================
// SUFFIX TREE PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The i-th leaf spells the i-th smallest suffix.
    #[test]
    fn prop_tree_round_trip(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        let tree = build_suffix_tree(&text, sa.pos(), sa.lcp()).unwrap();

        let leaves: Vec<_> = tree.leaves().collect();
        prop_assert_eq!(leaves.len(), text.len());
        for (i, (id, start)) in leaves.into_iter().enumerate() {
            prop_assert_eq!(start, sa.pos()[i]);
            prop_assert_eq!(tree.path_label(id), text[start..].to_vec());
        }
    }

    /// String depth is the parent's depth plus the edge length, and only the
    /// root has an empty edge.
    #[test]
    fn prop_tree_depths(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        let tree = sa.suffix_tree();
        for id in tree.preorder().skip(1) {
            let node = tree.node(id);
            let parent = tree.node(node.parent().unwrap());
            prop_assert_eq!(node.depth(), parent.depth() + node.label_len());
            prop_assert!(node.label_len() > 0);
        }
    }

    /// Internal nodes without a suffix of their own branch at least twice.
    #[test]
    fn prop_tree_is_compressed(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        let tree = sa.suffix_tree();
        for id in tree.preorder().skip(1) {
            let node = tree.node(id);
            if node.suffix().is_none() {
                prop_assert!(node.children().len() >= 2);
            }
        }
    }

    /// Walking the tree finds exactly the substrings of the text.
    #[test]
    fn prop_tree_contains((text, pattern) in text_and_pattern()) {
        let sa = build_suffix_array(&text);
        prop_assert_eq!(sa.suffix_tree().contains(&pattern), naive::contains(&text, &pattern));
    }
}

// ============================================================================
// QUERY PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Binary search agrees with a naive scan.
    #[test]
    fn prop_contains_matches_scan((text, pattern) in text_and_pattern()) {
        prop_assert_eq!(sufx::contains(&text, &pattern), naive::contains(&text, &pattern));
        prop_assert_eq!(sufx::contains(&text, &pattern), naive::contains_bytes(&text, &pattern));
    }

    /// Occurrence counts and positions agree with a naive scan.
    #[test]
    fn prop_positions_match_scan((text, pattern) in text_and_pattern()) {
        let sa = SuffixArray::new(text.clone());
        prop_assert_eq!(sa.count(&pattern), naive::count_occurrences(&text, &pattern));

        let positions = sa.positions(&pattern);
        for &p in &positions {
            prop_assert!(text[p..].starts_with(&pattern));
        }
        prop_assert_eq!(positions.len(), naive::count_occurrences(&text, &pattern));
    }

    /// The longest repeated substring repeats, and nothing longer does.
    #[test]
    fn prop_longest_repeat(text in small_alphabet_text()) {
        let lrs = sufx::longest_repeated_substring(&text);
        prop_assert_eq!(lrs.len(), naive::longest_repeat_len(&text));
        if !lrs.is_empty() {
            prop_assert!(naive::count_occurrences(&text, lrs) >= 2);
        }
    }

    /// The deepest repeated tree node spells a longest repeat.
    #[test]
    fn prop_tree_longest_repeat(text in small_alphabet_text()) {
        let sa = build_suffix_array(&text);
        let tree = sa.suffix_tree();
        let deepest = tree.path_label(tree.deepest_repeated());
        prop_assert_eq!(deepest.len(), sa.longest_repeated_substring().len());
    }
}

// ============================================================================
// CONCRETE CASES
// ============================================================================

#[test]
fn test_banana() {
    let sa = build_suffix_array(b"banana");
    assert_eq!(sa.pos(), &[5, 3, 1, 0, 4, 2]);
    assert_eq!(sufx::longest_repeated_substring(b"banana"), b"ana");
    assert!(sufx::contains(b"banana", b"nan"));
    assert!(!sufx::contains(b"banana", b"xyz"));
}

#[test]
fn test_empty_text() {
    let sa = build_suffix_array::<u8>(b"");
    assert!(sa.pos().is_empty());
    assert!(sufx::contains(b"", b""));
    assert!(!sufx::contains(b"", b"a"));
    assert_eq!(sufx::longest_repeated_substring::<u8>(b""), b"");
}

#[test]
fn test_single_symbol() {
    let sa = build_suffix_array(b"z");
    assert_eq!(sa.pos(), &[0]);
    assert_eq!(sa.lcp(), &[0]);
    assert_eq!(sa.longest_repeated_substring(), b"");
    assert_eq!(sa.suffix_tree().leaf_count(), 1);
}

#[test]
fn test_long_periodic_text() {
    // Deep recursion: every triple name collides for several levels
    let text = b"abc".repeat(2_000);
    let sa = build_suffix_array(&text);
    assert_eq!(sa.pos(), naive::suffix_array(&text).as_slice());
    assert_eq!(sa.longest_repeat_range().len(), text.len() - 3);
    assert_eq!(naive::verify(&sa, 0), Ok(()));
}

#[test]
fn test_integer_tokens() {
    let tokens: Vec<u32> = vec![7, 1_000_000, 7, 1_000_000, 7];
    let sa = build_suffix_array(&tokens);
    assert_eq!(sa.pos(), &[4, 2, 0, 3, 1]);
    assert_eq!(sa.longest_repeated_substring(), &[7, 1_000_000, 7]);
}
