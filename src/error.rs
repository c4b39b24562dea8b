//! Error types for index construction
//!
//! Only precondition violations are errors. A pattern that does not occur is
//! reported as `false` or an empty result, never through this type.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The supplied suffix order is not a permutation of the text positions
    #[error("invalid suffix array: {reason}")]
    InvalidSuffixArray { reason: String },

    /// An LCP entry does not fit the suffixes it is paired with
    #[error("invalid lcp array at index {index}: {reason}")]
    InvalidLcp { index: usize, reason: String },

    /// Input rejected by the configured size limit
    #[error("input of {len} bytes exceeds the configured limit of {limit} bytes")]
    InputTooLarge { len: u64, limit: u64 },
}

impl Error {
    pub fn invalid_suffix_array(reason: impl Into<String>) -> Error {
        Error::InvalidSuffixArray {
            reason: reason.into(),
        }
    }

    pub fn invalid_lcp(index: usize, reason: impl Into<String>) -> Error {
        Error::InvalidLcp {
            index,
            reason: reason.into(),
        }
    }

    /// Whether this error reports malformed arrays handed to a builder
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::InvalidSuffixArray { .. } | Error::InvalidLcp { .. }
        )
    }
}
