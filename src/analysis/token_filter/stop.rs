//! Stop filter implementation.
//!
//! Removes corpus skip words — words so common in English prose that their
//! presence carries no signal for classification. The default list is
//! immutable process-wide data; custom lists can be supplied per filter.
//!
//! The match is case-sensitive and runs before any lowercasing in the
//! counting pipeline, so a capitalized `"The"` is not skipped.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default skip words for English training corpora.
const DEFAULT_SKIP_WORDS: &[&str] = &[
    "a", "again", "all", "along", "are", "also", "an", "and", "as", "at", "but", "by", "came",
    "can", "cant", "couldnt", "did", "didn", "didnt", "do", "doesnt", "dont", "ever", "first",
    "from", "have", "her", "here", "him", "how", "i", "if", "in", "into", "is", "isnt", "it",
    "itll", "just", "last", "least", "like", "most", "my", "new", "no", "not", "now", "of", "on",
    "or", "should", "sinc", "so", "some", "th", "than", "this", "that", "the", "their", "then",
    "those", "to", "told", "too", "true", "try", "until", "url", "us", "were", "when", "whether",
    "while", "with", "within", "yes", "you", "youll",
];

/// Default skip words as a HashSet.
pub static DEFAULT_SKIP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| DEFAULT_SKIP_WORDS.iter().map(|&s| s.to_string()).collect());

/// A filter that removes stop words from the token stream.
///
/// # Examples
///
/// ```
/// use pilum::analysis::token_filter::Filter;
/// use pilum::analysis::token_filter::stop::StopFilter;
/// use pilum::analysis::token::Token;
///
/// let filter = StopFilter::new(); // Uses the default skip words
/// let tokens = vec![
///     Token::new("the", 0),
///     Token::new("quick", 1),
///     Token::new("brown", 2),
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// // "the" is removed as a stop word
/// assert_eq!(result.len(), 2);
/// assert_eq!(result[0].text, "quick");
/// assert_eq!(result[1].text, "brown");
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default skip words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_SKIP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use pilum::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
    }

    #[test]
    fn test_stop_match_is_case_sensitive() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("The"));

        let tokens = vec![Token::new("The", 0), Token::new("the", 1)];
        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "The");
    }

    #[test]
    fn test_default_skip_words() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("here"));
        assert!(filter.is_stop_word("you"));
        assert!(!filter.is_stop_word("hello"));
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
