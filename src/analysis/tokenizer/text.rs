//! Plain-text tokenizer implementation.

use std::sync::LazyLock;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Matches characters that are neither word characters nor whitespace.
static SYMBOL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("symbol pattern should be valid"));

/// Matches single word characters.
static WORD_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w").expect("word pattern should be valid"));

/// A tokenizer for plain prose.
///
/// Makes two independent passes over the input. The first strips every
/// character that is neither a word character nor whitespace and splits
/// the remainder on whitespace, yielding word tokens — punctuation removed
/// from between word characters fuses them (`"test's"` becomes `"tests"`).
/// The second replaces every word character with a space and splits again,
/// yielding punctuation-run tokens such as `"!"` or `"..."`. Word tokens
/// precede punctuation tokens in the output; the passes are separate scans
/// of the same input, not one interleaved scan.
///
/// # Examples
///
/// ```
/// use pilum::analysis::tokenizer::text::TextTokenizer;
/// use pilum::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = TextTokenizer::new();
/// let tokens: Vec<_> = tokenizer.tokenize("don't panic!").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["dont", "panic", "'", "!"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TextTokenizer;

impl TextTokenizer {
    /// Create a new text tokenizer.
    pub fn new() -> Self {
        TextTokenizer
    }
}

impl Tokenizer for TextTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let words = SYMBOL_CHARS.replace_all(text, "");
        let symbols = WORD_CHARS.replace_all(text, " ");

        let tokens: Vec<Token> = words
            .split_whitespace()
            .chain(symbols.split_whitespace())
            .enumerate()
            .map(|(position, text)| Token::new(text, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "text"
    }
}
