//! Rank and LCP arrays
//!
//! The LCP array is computed in linear time with Kasai's method: walking the
//! text in position order, the common prefix with the preceding suffix in
//! sorted order shrinks by at most one per step, so the running length is
//! carried over instead of being recomputed.

/// Inverse permutation of the suffix order: `rank[pos[i]] == i`
pub fn rank_array(pos: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; pos.len()];
    for (i, &p) in pos.iter().enumerate() {
        rank[p] = i;
    }
    rank
}

/// Longest common prefix of each suffix with its predecessor in `pos`.
///
/// `lcp[i]` compares the suffixes at `pos[i - 1]` and `pos[i]`. Entry 0 has no
/// predecessor and is stored as 0.
pub fn lcp_array<T: Eq>(source: &[T], pos: &[usize], rank: &[usize]) -> Vec<usize> {
    let n = source.len();
    let mut lcp = vec![0; n];
    let mut h = 0;

    for i in 0..n {
        if rank[i] == 0 {
            h = 0;
            continue;
        }

        let k = pos[rank[i] - 1];
        while i + h < n && k + h < n && source[i + h] == source[k + h] {
            h += 1;
        }
        lcp[rank[i]] = h;
        h = h.saturating_sub(1);
    }

    lcp
}

/// Length of the common prefix of two slices
#[inline]
pub fn common_prefix_len<T: Eq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
