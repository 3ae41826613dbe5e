//! Tokenizer implementations for text analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenStream;
use crate::error::{PilumError, Result};

/// Trait for tokenizers that convert text into tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Selects how the counting pipeline treats input text.
///
/// `Text` is the default and is meant for prose; `Uri` is meant for URIs
/// and URI-like strings (request paths, query strings). Switching the mode
/// on a classifier that has already been trained leaves the trained
/// statistics inconsistent with new documents; the engine does not forbid
/// it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenizerMode {
    /// Plain prose: word tokens plus punctuation-run tokens, filtered and
    /// stemmed before counting.
    #[default]
    Text,
    /// URI segments: percent-decoded and delimiter-split, counted as-is.
    Uri,
}

impl TokenizerMode {
    /// The mode's canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizerMode::Text => "text",
            TokenizerMode::Uri => "uri",
        }
    }
}

impl fmt::Display for TokenizerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TokenizerMode {
    type Err = PilumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(TokenizerMode::Text),
            "uri" => Ok(TokenizerMode::Uri),
            other => Err(PilumError::unsupported_tokenizer_mode(other)),
        }
    }
}

// Individual tokenizer modules
pub mod text;
pub mod uri;

// Re-export all tokenizers for convenient access
pub use text::TextTokenizer;
pub use uri::UriTokenizer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(TokenizerMode::default(), TokenizerMode::Text);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("text".parse::<TokenizerMode>().unwrap(), TokenizerMode::Text);
        assert_eq!("uri".parse::<TokenizerMode>().unwrap(), TokenizerMode::Uri);

        let err = "xml".parse::<TokenizerMode>().unwrap_err();
        assert_eq!(err.to_string(), "Unsupported tokenizer mode: xml");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(TokenizerMode::Text.to_string(), "text");
        assert_eq!(TokenizerMode::Uri.to_string(), "uri");
    }
}
