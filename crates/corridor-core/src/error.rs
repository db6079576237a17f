//! Core error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `CoreError` via `From` impls, or keep them separate and wrap `CoreError`
//! as one variant.  `corridor-sim` uses the latter pattern.

use thiserror::Error;

/// The top-level error type for `corridor-core`.
///
/// Only construction-time conditions appear here: once a world is built,
/// every runtime condition (occupied cell, sidewalk target, simultaneous
/// collision) is an expected, handled state rather than an error.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `corridor-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
