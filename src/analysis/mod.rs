//! Text analysis module for Pilum.
//!
//! This module provides the tokenization pipeline the classifier counts
//! with: tokenizers, token filters, n-gram generation, and the token
//! counter that composes them.

pub mod counter;
pub mod ngram;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use counter::*;
pub use ngram::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
