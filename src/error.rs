//! Error types for the Pilum library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`PilumError`] enum.
//!
//! # Examples
//!
//! ```
//! use pilum::error::{PilumError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PilumError::category_not_found("Spam"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Pilum operations.
#[derive(Error, Debug)]
pub enum PilumError {
    /// Training or untraining referenced a category that was never
    /// registered. Categories are never created implicitly.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// An unrecognized tokenizer mode name was requested.
    #[error("Unsupported tokenizer mode: {0}")]
    UnsupportedTokenizerMode(String),

    /// Analysis-related errors (tokenization, filtering, stemming)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PilumError.
pub type Result<T> = std::result::Result<T, PilumError>;

impl PilumError {
    /// Create a new category-not-found error.
    pub fn category_not_found<S: Into<String>>(name: S) -> Self {
        PilumError::CategoryNotFound(name.into())
    }

    /// Create a new unsupported-tokenizer-mode error.
    pub fn unsupported_tokenizer_mode<S: Into<String>>(mode: S) -> Self {
        PilumError::UnsupportedTokenizerMode(mode.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PilumError::Analysis(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        PilumError::InvalidOperation(msg.into())
    }
}
