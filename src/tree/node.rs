//! Suffix tree nodes
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! [`NodeId`]. A parent owns its children through the arena; the parent link
//! is a plain index used for walking upwards.

use std::ops::Range;

/// Index of a node in its tree's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root is always the first node of the arena
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node of the suffix tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Edge label from the parent, as text offsets (empty for the root)
    pub(crate) label: Range<usize>,
    /// String depth: length of the path label from the root
    pub(crate) depth: usize,
    pub(crate) parent: Option<NodeId>,
    /// Children in suffix array order
    pub(crate) children: Vec<NodeId>,
    /// Start of the suffix whose path ends here
    pub(crate) suffix: Option<usize>,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            label: 0..0,
            depth: 0,
            parent: None,
            children: Vec::new(),
            suffix: None,
        }
    }

    /// Edge label as a half-open range of text offsets
    pub fn label_range(&self) -> Range<usize> {
        self.label.clone()
    }

    pub fn label_len(&self) -> usize {
        self.label.len()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Start position of the suffix spelled by the path to this node
    pub fn suffix(&self) -> Option<usize> {
        self.suffix
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of suffixes sharing this node's path label, counting only the
    /// branches directly below it. A value of two or more means the path
    /// label occurs at least twice in the text.
    pub(crate) fn branching(&self) -> usize {
        self.children.len() + usize::from(self.suffix.is_some())
    }
}
