//! Token counting pipeline.
//!
//! [`TokenCounter`] composes a tokenizer, n-gram generation, and the
//! text-mode filter chain into the token → occurrence-count mapping the
//! classifier trains and scores with.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::ngram::{self, NgramSizes};
use crate::analysis::token::{IntoTokenStream, Token};
use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::token_filter::{Filter, LengthFilter, LowercaseFilter, StemFilter, StopFilter};
use crate::analysis::tokenizer::{TextTokenizer, Tokenizer, TokenizerMode, UriTokenizer};
use crate::error::Result;

/// Mapping from token text to its occurrence count within one document.
pub type TokenCounts = AHashMap<String, u64>;

/// Turns raw text into a token → occurrence-count mapping.
///
/// In [`TokenizerMode::Text`] the word tokens run through the filter chain
/// — stop words, minimum length, lowercasing, stemming — before counting.
/// Phrase tokens come from the n-gram generator over the *raw* token
/// sequence and bypass the chain entirely. [`TokenizerMode::Uri`] counts
/// raw tokens as-is.
pub struct TokenCounter {
    mode: TokenizerMode,
    ngram_sizes: NgramSizes,
    text_tokenizer: TextTokenizer,
    uri_tokenizer: UriTokenizer,
    filters: Vec<Arc<dyn Filter>>,
}

impl TokenCounter {
    /// Create a counter in text mode with the default filter chain.
    pub fn new() -> Self {
        Self::with_mode(TokenizerMode::Text)
    }

    /// Create a counter in the given mode with the default filter chain.
    pub fn with_mode(mode: TokenizerMode) -> Self {
        TokenCounter {
            mode,
            ngram_sizes: NgramSizes::new(),
            text_tokenizer: TextTokenizer::new(),
            uri_tokenizer: UriTokenizer::new(),
            filters: Self::default_filters(StemFilter::new()),
        }
    }

    fn default_filters(stem: StemFilter) -> Vec<Arc<dyn Filter>> {
        vec![
            Arc::new(StopFilter::new()),
            Arc::new(LengthFilter::new()),
            Arc::new(LowercaseFilter::new()),
            Arc::new(stem),
        ]
    }

    /// Replace the stemmer at the end of the text-mode filter chain.
    pub fn set_stemmer(&mut self, stemmer: Arc<dyn Stemmer>) {
        self.filters = Self::default_filters(StemFilter::with_stemmer(stemmer));
    }

    /// The current tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        self.mode
    }

    /// Set the tokenizer mode.
    pub fn set_mode(&mut self, mode: TokenizerMode) {
        self.mode = mode;
    }

    /// The configured n-gram sizes.
    pub fn ngram_sizes(&self) -> &NgramSizes {
        &self.ngram_sizes
    }

    /// Replace the n-gram size set.
    pub fn set_ngram_sizes(&mut self, sizes: NgramSizes) {
        self.ngram_sizes = sizes;
    }

    /// Count the tokens of one document.
    pub fn count(&self, text: &str) -> Result<TokenCounts> {
        let raw: Vec<Token> = self.tokenizer().tokenize(text)?.collect();

        // Phrase tokens come from the raw sequence, before any filtering.
        let mut phrases = Vec::new();
        for n in self.ngram_sizes.iter() {
            phrases.extend(ngram::ngrams(&raw, n));
        }

        let words: Vec<Token> = match self.mode {
            TokenizerMode::Text => {
                let mut stream = raw.into_token_stream();
                for filter in &self.filters {
                    stream = filter.filter(stream)?;
                }
                stream.collect()
            }
            TokenizerMode::Uri => raw,
        };

        let mut counts = TokenCounts::new();
        for token in words.into_iter().chain(phrases) {
            *counts.entry(token.text).or_insert(0) += 1;
        }
        Ok(counts)
    }

    fn tokenizer(&self) -> &dyn Tokenizer {
        match self.mode {
            TokenizerMode::Text => &self.text_tokenizer,
            TokenizerMode::Uri => &self.uri_tokenizer,
        }
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TokenCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCounter")
            .field("mode", &self.mode)
            .field("ngram_sizes", &self.ngram_sizes)
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
