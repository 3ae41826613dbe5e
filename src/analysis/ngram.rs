//! Word n-gram generation.
//!
//! An n-gram here is a phrase token: `n` consecutive tokens joined with a
//! single space, in their original order. The bigrams of
//! `"Here are some words"` are `"Here are"`, `"are some"`, `"some words"`.
//!
//! [`NgramSizes`] is the normalized set of window sizes a
//! [`TokenCounter`](crate::analysis::counter::TokenCounter) generates.

use std::collections::BTreeSet;
use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::analysis::tokenizer::{TextTokenizer, Tokenizer};
use crate::error::Result;

/// Produce the n-grams of a token sequence.
///
/// Every contiguous window of exactly `n` tokens, sliding by one, becomes
/// one phrase token. The result is empty when `n` is zero or exceeds the
/// sequence length.
///
/// # Examples
///
/// ```
/// use pilum::analysis::ngram::ngrams;
/// use pilum::analysis::token::Token;
///
/// let tokens: Vec<Token> = ["one", "two", "three"]
///     .iter()
///     .enumerate()
///     .map(|(i, t)| Token::new(*t, i))
///     .collect();
///
/// let phrases: Vec<String> = ngrams(&tokens, 2).into_iter().map(|t| t.text).collect();
/// assert_eq!(phrases, vec!["one two", "two three"]);
/// ```
pub fn ngrams(tokens: &[Token], n: usize) -> Vec<Token> {
    if n == 0 || n > tokens.len() {
        return Vec::new();
    }

    tokens
        .windows(n)
        .enumerate()
        .map(|(position, window)| {
            let phrase = window
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            Token::new(phrase, position)
        })
        .collect()
}

/// The n-grams of a plain-text string, over its text-mode token sequence.
pub fn text_ngrams(text: &str, n: usize) -> Result<Vec<Token>> {
    let tokens: Vec<Token> = TextTokenizer::new().tokenize(text)?.collect();
    Ok(ngrams(&tokens, n))
}

/// The set of n-gram window sizes a token counter generates.
///
/// Normalized on construction: duplicates collapse, sizes iterate in
/// ascending order, and the value 1 is always removed — a "1-gram" is just
/// the plain word token stream.
///
/// # Examples
///
/// ```
/// use pilum::analysis::ngram::NgramSizes;
///
/// assert_eq!(NgramSizes::from(5).to_vec(), vec![5]);
/// assert_eq!(NgramSizes::from(2..=4).to_vec(), vec![2, 3, 4]);
/// assert_eq!(NgramSizes::from(vec![3, 5, 7]).to_vec(), vec![3, 5, 7]);
/// assert_eq!(NgramSizes::from(1..=3).to_vec(), vec![2, 3]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgramSizes(BTreeSet<usize>);

impl NgramSizes {
    /// Create an empty size set (n-gram generation disabled).
    pub fn new() -> Self {
        NgramSizes(BTreeSet::new())
    }

    /// Check if n-gram generation is disabled.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of configured sizes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if a size is configured.
    pub fn contains(&self, n: usize) -> bool {
        self.0.contains(&n)
    }

    /// Iterate the sizes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    /// The sizes in ascending order.
    pub fn to_vec(&self) -> Vec<usize> {
        self.0.iter().copied().collect()
    }
}

impl FromIterator<usize> for NgramSizes {
    fn from_iter<I: IntoIterator<Item = usize>>(sizes: I) -> Self {
        let mut set: BTreeSet<usize> = sizes.into_iter().collect();
        set.remove(&1);
        NgramSizes(set)
    }
}

impl From<usize> for NgramSizes {
    fn from(n: usize) -> Self {
        [n].into_iter().collect()
    }
}

impl From<Range<usize>> for NgramSizes {
    fn from(range: Range<usize>) -> Self {
        range.collect()
    }
}

impl From<RangeInclusive<usize>> for NgramSizes {
    fn from(range: RangeInclusive<usize>) -> Self {
        range.collect()
    }
}

impl From<Vec<usize>> for NgramSizes {
    fn from(sizes: Vec<usize>) -> Self {
        sizes.into_iter().collect()
    }
}

impl From<&[usize]> for NgramSizes {
    fn from(sizes: &[usize]) -> Self {
        sizes.iter().copied().collect()
    }
}

impl<const N: usize> From<[usize; N]> for NgramSizes {
    fn from(sizes: [usize; N]) -> Self {
        sizes.into_iter().collect()
    }
}
