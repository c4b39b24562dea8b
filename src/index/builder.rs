//! Configured index builder for byte input
//!
//! Applies an [`IndexConfig`] to raw bytes before building:
//! 1. Rejects input above the configured size limit
//! 2. Lowercases ASCII letters if configured
//! 3. Builds the suffix array, rank and LCP arrays

use super::alphabet::Alphabet;
use super::suffix_array::SuffixArray;
use super::types::*;
use crate::error::{Error, Result};
use crate::tree::SuffixTree;
use log::debug;
use std::borrow::Cow;
use std::ops::Range;

/// Builder for byte indexes
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a new builder with the given configuration
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(IndexConfig::default())
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Build an index over `content`
    pub fn build(&self, content: &[u8]) -> Result<BuiltIndex> {
        let len = content.len() as u64;
        if len > self.config.max_input_size {
            debug!("rejecting {} bytes, limit is {}", len, self.config.max_input_size);
            return Err(Error::InputTooLarge {
                len,
                limit: self.config.max_input_size,
            });
        }

        let text: Vec<u8> = if self.config.case_insensitive {
            debug!("case folding {} bytes", len);
            content.iter().map(|b| b.to_ascii_lowercase()).collect()
        } else {
            content.to_vec()
        };

        let alphabet_size = Alphabet::of(&text).len();
        let suffix_array = SuffixArray::new(text);

        Ok(BuiltIndex {
            suffix_array,
            alphabet_size,
            config: self.config.clone(),
        })
    }
}

/// Result of building a byte index
pub struct BuiltIndex {
    /// Suffix array over the (possibly case-folded) text
    pub suffix_array: SuffixArray<u8>,
    /// Number of distinct bytes in the text
    pub alphabet_size: usize,
    /// Configuration used for building
    pub config: IndexConfig,
}

impl BuiltIndex {
    /// Get metadata about this index
    pub fn meta(&self) -> IndexMeta {
        IndexMeta {
            text_size: self.suffix_array.len() as u64,
            suffix_count: self.suffix_array.pos().len() as u64,
            alphabet_size: self.alphabet_size as u32,
            max_lcp: self.suffix_array.max_lcp() as u64,
            case_insensitive: self.config.case_insensitive,
        }
    }

    /// Indexed text (case-folded if configured)
    pub fn text(&self) -> &[u8] {
        self.suffix_array.text()
    }

    /// Fold a pattern the same way the text was folded
    pub fn fold_pattern<'p>(&self, pattern: &'p [u8]) -> Cow<'p, [u8]> {
        if self.config.case_insensitive {
            Cow::Owned(pattern.to_ascii_lowercase())
        } else {
            Cow::Borrowed(pattern)
        }
    }

    /// Range of sorted suffixes starting with `pattern`
    pub fn search(&self, pattern: &[u8]) -> Range<usize> {
        self.suffix_array.search(&self.fold_pattern(pattern))
    }

    pub fn contains(&self, pattern: &[u8]) -> bool {
        self.suffix_array.contains(&self.fold_pattern(pattern))
    }

    /// Sorted text offsets where `pattern` occurs
    pub fn positions(&self, pattern: &[u8]) -> Vec<usize> {
        self.suffix_array.positions(&self.fold_pattern(pattern))
    }

    pub fn longest_repeated_substring(&self) -> &[u8] {
        self.suffix_array.longest_repeated_substring()
    }

    pub fn suffix_tree(&self) -> SuffixTree<'_, u8> {
        self.suffix_array.suffix_tree()
    }
}
