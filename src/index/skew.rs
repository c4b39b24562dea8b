//! Linear-time suffix array construction (DC3 / skew)
//!
//! Suffixes are split by their start position modulo 3. The suffixes starting
//! at positions `1` and `2 (mod 3)` are sorted first by naming their leading
//! triples, recursing on the names when they are not unique. The `0 (mod 3)`
//! suffixes are then sorted with a single radix pass using the known ranks,
//! and both lists are merged.
//!
//! Each recursion level works on two thirds of the previous input, so the
//! total work is O(n) and the recursion depth is O(log n).

use super::alphabet::{Alphabet, SENTINEL_PADDING};
use super::radix::radix_pass;
use log::{debug, trace};

/// Build the suffix array of `source`.
///
/// Suffixes are compared as if the text were followed by symbols smaller
/// than any real symbol, so a proper prefix sorts before its extensions.
pub fn suffix_array<T: Ord + Copy>(source: &[T]) -> Vec<usize> {
    let n = source.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let alphabet = Alphabet::of(source);
    let keys = alphabet.encode(source);
    debug!(
        "building suffix array: {} symbols, alphabet of {}",
        n,
        alphabet.len()
    );

    skew(&keys, n, alphabet.max_key(), 0)
}

/// Suffix array of the first `n` keys of `s`.
///
/// `s[..n]` holds keys in `1..=alphabet`, followed by at least three zero
/// keys. Returns exactly `n` positions.
pub(crate) fn skew(s: &[usize], n: usize, alphabet: usize, depth: usize) -> Vec<usize> {
    debug_assert!(s.len() >= n + SENTINEL_PADDING);
    if n <= 1 {
        return (0..n).collect();
    }
    trace!("skew level {}: n = {}, alphabet = {}", depth, n, alphabet);

    let n0 = (n + 2) / 3;
    let n1 = (n + 1) / 3;
    let n2 = n / 3;
    let n02 = n0 + n2;

    // Class 12 positions. When n % 3 == 1 the range reaches position n, a
    // dummy made of sentinels that keeps the mod-1 half at n0 entries.
    let mut s12 = vec![0usize; n02 + SENTINEL_PADDING];
    for (slot, i) in s12
        .iter_mut()
        .zip((0..n + n0 - n1).filter(|i| i % 3 != 0))
    {
        *slot = i;
    }

    // Sort by leading triple: least significant key first
    let sa12 = radix_pass(&s12, n02, &s[2..], alphabet);
    let sa12 = radix_pass(&sa12, n02, &s[1..], alphabet);
    let mut sa12 = radix_pass(&sa12, n02, s, alphabet);

    // Name the triples. Mod-1 names go to the left half, mod-2 names to the
    // right half, so the reduced text lists suffixes 1, 4, 7, .. then 2, 5, ..
    let mut names = vec![0usize; n02 + SENTINEL_PADDING];
    let mut name = 0;
    let mut last: Option<(usize, usize, usize)> = None;
    for &p in &sa12[..n02] {
        let triple = (s[p], s[p + 1], s[p + 2]);
        if last != Some(triple) {
            name += 1;
            last = Some(triple);
        }
        if p % 3 == 1 {
            names[p / 3] = name;
        } else {
            names[p / 3 + n0] = name;
        }
    }

    if name < n02 {
        // Triples collide: sort the reduced text and turn names into ranks
        sa12 = skew(&names, n02, name, depth + 1);
        for (rank, &p) in sa12.iter().enumerate() {
            names[p] = rank + 1;
        }
    } else {
        // Names are already unique ranks
        for (i, &rank) in names[..n02].iter().enumerate() {
            sa12[rank - 1] = i;
        }
    }

    // Class 0, already ordered by the rank of the following suffix; a stable
    // pass on the first key completes the sort
    let s0: Vec<usize> = sa12[..n02]
        .iter()
        .filter(|&&p| p < n0)
        .map(|&p| 3 * p)
        .collect();
    let sa0 = radix_pass(&s0, n0, s, alphabet);

    // Text position of the class-12 suffix at reduced rank t
    let position = |t: usize| {
        let p = sa12[t];
        if p < n0 { 3 * p + 1 } else { 3 * (p - n0) + 2 }
    };

    let mut sa = Vec::with_capacity(n);
    let mut p = 0;
    // Skip the dummy, which always holds reduced rank 0
    let mut t = n0 - n1;
    while p < n0 && t < n02 {
        let i = position(t);
        let j = sa0[p];
        // Ranks past the end of the text read as 0 from the padding
        let class12_first = if sa12[t] < n0 {
            // i = 1 (mod 3): i + 1 is a mod-2 suffix, j + 1 a mod-1 suffix
            (s[i], names[sa12[t] + n0]) <= (s[j], names[j / 3])
        } else {
            // i = 2 (mod 3): i + 2 is a mod-1 suffix, j + 2 a mod-2 suffix
            (s[i], s[i + 1], names[sa12[t] - n0 + 1]) <= (s[j], s[j + 1], names[j / 3 + n0])
        };
        if class12_first {
            sa.push(i);
            t += 1;
        } else {
            sa.push(j);
            p += 1;
        }
    }
    sa.extend_from_slice(&sa0[p..n0]);
    sa.extend((t..n02).map(position));

    debug_assert_eq!(sa.len(), n);
    sa
}
