//! Compressed suffix trees
//!
//! A [`SuffixTree`] is rebuilt from a suffix array and its LCP array in linear
//! time (see [`builder`]). Edge labels are offset ranges into the borrowed
//! text, so no substring is ever copied.
//!
//! No terminator symbol is appended to the text. A suffix that is a proper
//! prefix of another suffix therefore ends on a node that may also have
//! children; such nodes still carry the suffix start, and the suffixes read
//! in pre-order come out in suffix array order.

pub mod builder;
pub mod node;
pub mod render;

pub use builder::build_suffix_tree;
pub use node::{Node, NodeId};

use crate::index::SuffixArray;
use std::ops::Range;

/// Suffix tree over a borrowed text
#[derive(Debug, Clone)]
pub struct SuffixTree<'t, T> {
    text: &'t [T],
    nodes: Vec<Node>,
}

impl<'t, T> SuffixTree<'t, T> {
    /// A tree holding only the root
    pub(crate) fn with_capacity(text: &'t [T], capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node::root());
        Self { text, nodes }
    }

    /// Append a child labeled `label` to `parent`
    pub(crate) fn add_child(
        &mut self,
        parent: NodeId,
        label: Range<usize>,
        suffix: Option<usize>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + label.len();
        self.nodes.push(Node {
            label,
            depth,
            parent: Some(parent),
            children: Vec::new(),
            suffix,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Split the edge from `parent` to its last child `child` with a new
    /// internal node labeled `label`. Returns the new node.
    pub(crate) fn split_edge(
        &mut self,
        parent: NodeId,
        child: NodeId,
        label: Range<usize>,
    ) -> NodeId {
        debug_assert_eq!(self.nodes[parent.0].children.last(), Some(&child));
        self.nodes[parent.0].children.pop();

        let middle = self.add_child(parent, label, None);
        let split_depth = self.nodes[middle.0].depth;

        // Keep the tail of the old label below the split point
        let node = &mut self.nodes[child.0];
        let remaining = node.depth - split_depth;
        node.label = node.label.end - remaining..node.label.end;
        node.parent = Some(middle);
        self.nodes[middle.0].children.push(child);

        middle
    }

    /// The text the labels point into
    pub fn text(&self) -> &'t [T] {
        self.text
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Edge label leading into `id`
    pub fn label(&self, id: NodeId) -> &'t [T] {
        let text: &'t [T] = self.text;
        &text[self.nodes[id.0].label.clone()]
    }

    /// Total number of nodes, root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes a suffix ends on (equals the text length)
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.suffix.is_some()).count()
    }

    /// Nodes in pre-order (parents before children, children left to right)
    pub fn preorder(&self) -> Preorder<'_, 't, T> {
        Preorder {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    /// Suffix nodes with their suffix start, in suffix array order
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, usize)> + '_ {
        self.preorder()
            .filter_map(|id| self.nodes[id.0].suffix.map(|s| (id, s)))
    }

    /// Deepest node whose path label occurs at least twice in the text.
    ///
    /// Its path label is a longest repeated substring. Ties go to the first
    /// node in pre-order; the root is returned when nothing repeats.
    pub fn deepest_repeated(&self) -> NodeId {
        let mut best = NodeId::ROOT;
        for id in self.preorder() {
            let node = &self.nodes[id.0];
            if node.branching() >= 2 && node.depth > self.nodes[best.0].depth {
                best = id;
            }
        }
        best
    }
}

impl<'t, T: Clone> SuffixTree<'t, T> {
    /// Concatenated labels from the root down to `id`
    pub fn path_label(&self, id: NodeId) -> Vec<T> {
        let node = &self.nodes[id.0];
        // The path label ends where the edge label ends
        let end = node.label.end;
        self.text[end - node.depth..end].to_vec()
    }
}

impl<'t, T: Eq> SuffixTree<'t, T> {
    /// Whether `pattern` occurs in the text, by walking down from the root
    pub fn contains(&self, pattern: &[T]) -> bool {
        let mut node = NodeId::ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let next = self.nodes[node.0]
                .children
                .iter()
                .copied()
                .find(|&c| self.label(c).first() == pattern.get(matched));
            let Some(child) = next else {
                return false;
            };

            let label = self.label(child);
            let take = label.len().min(pattern.len() - matched);
            if label[..take] != pattern[matched..matched + take] {
                return false;
            }
            matched += take;
            node = child;
        }

        true
    }
}

impl<T: Ord + Copy> SuffixArray<T> {
    /// Build the suffix tree of this suffix array
    pub fn suffix_tree(&self) -> SuffixTree<'_, T> {
        builder::build_unchecked(self.text(), self.pos(), self.lcp())
    }
}

/// Pre-order traversal of a suffix tree
pub struct Preorder<'a, 't, T> {
    tree: &'a SuffixTree<'t, T>,
    stack: Vec<NodeId>,
}

impl<T> Iterator for Preorder<'_, '_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
