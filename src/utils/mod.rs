//! Utility functions shared by the library and the CLI.
//!
//! ## Modules
//!
//! - [`config`] - Loading and saving [`IndexConfig`](crate::index::IndexConfig)
//! - [`logging`] - Stderr backend for the `log` facade
//! - [`naive`] - Reference implementations for cross-checking
//! - [`progress`] - Progress bars (no-op without the `progress` feature)
//!
//! ## Key Functions
//!
//! ```no_run
//! use sufx::index::SuffixArray;
//! use sufx::utils::naive;
//!
//! let sa = SuffixArray::new(b"mississippi".as_slice());
//! assert!(naive::verify(&sa, 10_000).is_ok());
//! ```

pub mod config;
pub mod logging;
pub mod naive;
pub mod progress;

pub use config::*;
