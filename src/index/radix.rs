//! Stable counting sort over a bounded integer alphabet

/// Sort the first `n` indices of `input` by `keys[index]`.
///
/// Keys must lie in `0..=alphabet`. The sort is stable: indices with equal
/// keys keep their relative order. The result has the same length as `input`;
/// slots past `n` are left as zero so callers can keep their padding.
pub fn radix_pass(input: &[usize], n: usize, keys: &[usize], alphabet: usize) -> Vec<usize> {
    let mut output = vec![0; input.len()];
    let mut offsets = vec![0usize; alphabet + 1];

    for &index in &input[..n] {
        offsets[keys[index]] += 1;
    }

    // Exclusive prefix sums; empty buckets take the running offset and
    // never move later ones
    let mut sum = 0;
    for offset in offsets.iter_mut() {
        let freq = *offset;
        *offset = sum;
        sum += freq;
    }

    for &index in &input[..n] {
        let slot = &mut offsets[keys[index]];
        output[*slot] = index;
        *slot += 1;
    }

    output
}
