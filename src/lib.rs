//! Fluent, chainable assertions for tests.
//!
//! Every check starts from a constructor that pairs a value with a
//! [`Reporter`], then chains check methods on the returned wrapper:
//!
//! ```
//! let t = gt::Recorder::new();
//! gt::value(&t, 3).not_equal(4).is_in(&[1, 2, 3]);
//! gt::array(&t, &[1, 2, 3]).length(3).have(2);
//! gt::string(&t, "hello").describe("greeting").has_prefix("he");
//! assert_eq!(t.errors(), 0);
//! ```
//!
//! Inside a `#[test]`, use [`TestReporter`], which panics with every
//! collected failure when it goes out of scope.
//!
//! ## Modules
//!
//! - [`reporter`] - The reporting collaborator and its implementations
//! - [`assertions`] - Typed wrappers for values, collections, errors and files
//! - [`eval`] - Nil checks and error-chain helpers
//! - [`diff`] - Expected/actual rendering
//! - [`formatter`] - Description and location layout
//! - [`config`] - Process-wide rendering settings
//! - [`errors`] - Error types

pub mod assertions;
pub mod config;
pub mod diff;
pub mod errors;
pub mod eval;
pub mod formatter;
mod meta;
pub mod reporter;

// Re-exports so checks read as `gt::value(..)`, `gt::array(..)`, ...
pub use assertions::*;
pub use config::Config;
pub use diff::diff;
pub use errors::{GtError, GtResult};
pub use eval::{dump_error, file_exists, IsNil};
pub use reporter::{FailFast, Recorder, Reporter, TestReporter};

#[cfg(test)]
mod tests;
