//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `NsError` as one variant
//! via `From`.

use thiserror::Error;

/// The top-level error type for `ns-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum NsError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `ns-*` crates.
pub type NsResult<T> = Result<T, NsError>;
