//! Suffix tree construction from a suffix array and its LCP array
//!
//! Suffixes are inserted in sorted order. The previous leaf is the rightmost
//! path of the tree, so the insertion point for the next suffix is found by
//! walking up from it until the string depth drops to the LCP value. Either
//! a node sits exactly at that depth and gets a new leaf, or the LCP ends
//! inside an edge, which is split by a new internal node.
//!
//! Every upward step retires a node from the rightmost path for good, so the
//! whole construction takes O(n) steps.

use super::SuffixTree;
use super::node::NodeId;
use crate::error::{Error, Result};
use crate::index::lcp::{lcp_array, rank_array};
use log::debug;
use std::cmp::Ordering;

/// Build the suffix tree of `source` from its suffix array and LCP array.
///
/// `pos` must be the suffix array of `source` and `lcp` the LCP array paired
/// with it. Both are checked in linear time; violations are reported as
/// errors.
pub fn build_suffix_tree<'t, T: Ord>(
    source: &'t [T],
    pos: &[usize],
    lcp: &[usize],
) -> Result<SuffixTree<'t, T>> {
    validate(source, pos, lcp)?;
    Ok(build_unchecked(source, pos, lcp))
}

/// Check that `pos` sorts the suffixes of `source` and that `lcp` matches it
fn validate<T: Ord>(source: &[T], pos: &[usize], lcp: &[usize]) -> Result<()> {
    let n = source.len();
    if pos.len() != n {
        return Err(Error::invalid_suffix_array(format!(
            "expected {} positions, got {}",
            n,
            pos.len()
        )));
    }

    let mut seen = vec![false; n];
    for &p in pos {
        if p >= n {
            return Err(Error::invalid_suffix_array(format!(
                "position {} is out of range for a text of length {}",
                p, n
            )));
        }
        if std::mem::replace(&mut seen[p], true) {
            return Err(Error::invalid_suffix_array(format!(
                "position {} appears more than once",
                p
            )));
        }
    }

    // Neighbours are ordered by first symbol, then by the rank of the rest.
    // The empty rest (None) sorts before every suffix.
    let rank = rank_array(pos);
    let rest = |p: usize| (p + 1 < n).then(|| rank[p + 1]);
    for i in 1..n {
        let (a, b) = (pos[i - 1], pos[i]);
        let ordered = match source[a].cmp(&source[b]) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => rest(a) < rest(b),
        };
        if !ordered {
            return Err(Error::invalid_suffix_array(format!(
                "suffix {} at index {} sorts after suffix {} at index {}",
                a,
                i - 1,
                b,
                i
            )));
        }
    }

    if lcp.len() != n {
        return Err(Error::invalid_lcp(
            lcp.len().min(n),
            format!("expected {} entries, got {}", n, lcp.len()),
        ));
    }

    let expected = lcp_array(source, pos, &rank);
    if let Some(i) = (1..n).find(|&i| lcp[i] != expected[i]) {
        return Err(Error::invalid_lcp(
            i,
            format!("expected {}, got {}", expected[i], lcp[i]),
        ));
    }

    Ok(())
}

/// Build from arrays known to be consistent
pub(crate) fn build_unchecked<'t, T>(
    source: &'t [T],
    pos: &[usize],
    lcp: &[usize],
) -> SuffixTree<'t, T> {
    let n = source.len();
    let mut tree = SuffixTree::with_capacity(source, 2 * n);
    if n == 0 {
        return tree;
    }

    let mut current = tree.add_child(NodeId::ROOT, pos[0]..n, Some(pos[0]));

    for i in 1..n {
        let h = lcp[i];

        // Walk up the rightmost path, remembering the edge we came through
        let mut below = None;
        while tree.node(current).depth > h {
            match tree.node(current).parent {
                Some(parent) => {
                    below = Some(current);
                    current = parent;
                }
                None => break,
            }
        }

        let depth = tree.node(current).depth;
        let attach = match below {
            Some(child) if depth < h => {
                let prev = pos[i - 1];
                tree.split_edge(current, child, prev + depth..prev + h)
            }
            _ => current,
        };

        current = tree.add_child(attach, pos[i] + h..n, Some(pos[i]));
    }

    debug!(
        "built suffix tree: {} suffixes, {} nodes",
        n,
        tree.node_count()
    );
    tree
}
