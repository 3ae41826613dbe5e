//! # Pilum
//!
//! A trainable naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Category-keyed word-frequency training, with untraining
//! - Plain-text and URI tokenization modes
//! - Word n-gram phrase tokens
//! - Stop-word filtering and Porter stemming
//! - Log-likelihood scoring with additive smoothing
//!
//! ## Quick start
//!
//! ```
//! use pilum::prelude::*;
//!
//! # fn main() -> pilum::error::Result<()> {
//! let mut classifier = BayesClassifier::new(["Interesting", "Uninteresting"]);
//! classifier.train("Interesting", "here are some good words. I hope you love them")?;
//! classifier.train("Uninteresting", "here are some bad words, I hate you")?;
//!
//! assert_eq!(classifier.classify("I hate bad words and you")?, "Uninteresting");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod error;

pub mod prelude {
    //! Convenient re-exports for typical use.

    pub use crate::analysis::ngram::NgramSizes;
    pub use crate::analysis::tokenizer::TokenizerMode;
    pub use crate::classifier::BayesClassifier;
    pub use crate::error::{PilumError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
