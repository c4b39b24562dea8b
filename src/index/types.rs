//! Types shared by the index builders

use serde::{Deserialize, Serialize};

/// Configuration for building a byte index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Lowercase ASCII letters before indexing (default: false).
    /// Patterns are folded the same way when searching.
    pub case_insensitive: bool,
    /// Largest accepted input in bytes (default: 64MB)
    pub max_input_size: u64,
    /// Build the suffix tree when reporting statistics (default: true)
    pub build_tree: bool,
    /// Bytes of context shown on each side of a search hit (default: 16)
    pub search_context: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            max_input_size: 64 * 1024 * 1024, // 64MB
            build_tree: true,
            search_context: 16,
        }
    }
}

/// Summary of a built index
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct IndexMeta {
    /// Length of the indexed text
    pub text_size: u64,
    /// Number of suffixes (equals text_size)
    pub suffix_count: u64,
    /// Number of distinct symbols in the text
    pub alphabet_size: u32,
    /// Largest LCP value, the length of the longest repeated substring
    pub max_lcp: u64,
    /// Whether the text was case-folded before indexing
    pub case_insensitive: bool,
}
