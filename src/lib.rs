//! # sufx - Linear-time suffix arrays and suffix trees
//!
//! sufx builds the suffix array of a text in O(n) with the DC3 (skew)
//! algorithm, derives the rank and LCP arrays in O(n), and rebuilds the
//! compressed suffix tree from those arrays in O(n).
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Suffix array construction (radix pass, DC3, LCP)
//! - [`tree`] - Suffix tree reconstruction, traversal and rendering
//! - [`query`] - Substring search and repeat queries
//! - [`output`] - Terminal and JSON output for the CLI
//! - [`utils`] - Configuration, logging, progress and reference implementations
//!
//! ## Quick Start
//!
//! ```
//! use sufx::build_suffix_array;
//!
//! let sa = build_suffix_array(b"banana");
//! assert_eq!(sa.pos(), &[5, 3, 1, 0, 4, 2]);
//! assert!(sa.contains(b"nan"));
//! assert_eq!(sa.longest_repeated_substring(), b"ana");
//!
//! let tree = sa.suffix_tree();
//! assert_eq!(tree.leaf_count(), 6);
//! ```
//!
//! Texts can hold any totally ordered symbol type: bytes, `char`s, or
//! integer tokens. Symbols compare by their ordinal value only.

pub mod error;
pub mod index;
pub mod output;
pub mod query;
pub mod tree;
pub mod utils;

pub use error::{Error, Result};
pub use index::{SuffixArray, build_suffix_array};
pub use query::{contains, longest_repeated_substring};
pub use tree::{SuffixTree, build_suffix_tree};
