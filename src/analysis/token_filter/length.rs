//! Minimum-length filter implementation.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum number of characters.
///
/// Very short tokens — single letters, stray punctuation — carry almost no
/// signal for classification and inflate the frequency maps.
///
/// # Examples
///
/// ```
/// use pilum::analysis::token_filter::Filter;
/// use pilum::analysis::token_filter::length::LengthFilter;
/// use pilum::analysis::token::Token;
///
/// let filter = LengthFilter::new();
/// let tokens = vec![Token::new("I", 0), Token::new("am", 1), Token::new("here", 2)];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "here");
/// ```
#[derive(Clone, Debug)]
pub struct LengthFilter {
    /// Minimum token length in characters
    min_chars: usize,
}

impl LengthFilter {
    /// The default minimum token length.
    pub const DEFAULT_MIN_CHARS: usize = 3;

    /// Create a new length filter with the default minimum.
    pub fn new() -> Self {
        Self::with_min_chars(Self::DEFAULT_MIN_CHARS)
    }

    /// Create a new length filter with a custom minimum.
    pub fn with_min_chars(min_chars: usize) -> Self {
        LengthFilter { min_chars }
    }

    /// The minimum number of characters a token must have to survive.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.text.chars().count() >= min_chars)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new();
        let tokens = vec![
            Token::new("a", 0),
            Token::new("is", 1),
            Token::new("the", 2),
            Token::new("word", 3),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "the");
        assert_eq!(result[1].text, "word");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let filter = LengthFilter::new();
        let tokens = vec![Token::new("héé", 0)];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_custom_minimum() {
        let filter = LengthFilter::with_min_chars(5);
        assert_eq!(filter.min_chars(), 5);

        let tokens = vec![Token::new("word", 0), Token::new("words", 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "words");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new().name(), "length");
    }
}
