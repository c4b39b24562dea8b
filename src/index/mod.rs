//! Suffix array construction
//!
//! ## Architecture
//!
//! - `alphabet`: Maps symbols onto dense keys with a sentinel below them all
//! - `radix`: Stable counting sort used by the construction
//! - `skew`: Linear-time DC3 suffix array construction
//! - `lcp`: Rank array and Kasai LCP array
//! - `suffix_array`: The owned [`SuffixArray`] value
//! - `builder`: Configured builder for byte input
//! - `types`: Configuration and metadata types

pub mod alphabet;
pub mod builder;
pub mod lcp;
pub mod radix;
pub mod skew;
pub mod suffix_array;
pub mod types;

pub use builder::{BuiltIndex, IndexBuilder};
pub use suffix_array::{SuffixArray, build_suffix_array};
pub use types::*;
