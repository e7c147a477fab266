//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as a
//! variant via `#[from]`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `court-core`.
pub type CoreResult<T> = Result<T, CoreError>;
