//! Naive Bayes classifier.
//!
//! [`BayesClassifier`] learns per-category word-frequency statistics from
//! labeled text and assigns unseen text to the category with the highest
//! log-likelihood score.

use std::collections::HashMap;
use std::sync::Arc;

use crate::analysis::counter::{TokenCounter, TokenCounts};
use crate::analysis::ngram::NgramSizes;
use crate::analysis::token_filter::stem::Stemmer;
use crate::analysis::tokenizer::TokenizerMode;
use crate::classifier::category::{CategoryKey, CategoryStore, WordFrequencyMap};
use crate::error::{PilumError, Result};

/// Pseudo-count for a token never seen in a category.
const SMOOTHING: f64 = 0.1;

/// A trainable naive Bayes text classifier.
///
/// # Examples
///
/// ```
/// use pilum::classifier::BayesClassifier;
///
/// # fn main() -> pilum::error::Result<()> {
/// let mut classifier = BayesClassifier::new(["Interesting", "Uninteresting"]);
/// classifier.train("Interesting", "here are some good words. I hope you love them")?;
/// classifier.train("Uninteresting", "here are some bad words, I hate you")?;
///
/// assert_eq!(classifier.classify("I hate bad words and you")?, "Uninteresting");
/// # Ok(())
/// # }
/// ```
///
/// All operations are synchronous in-memory map work. The classifier has
/// no internal locking; sharing one across threads means wrapping the
/// whole value in a single mutual-exclusion boundary.
#[derive(Debug)]
pub struct BayesClassifier {
    store: CategoryStore,
    counter: TokenCounter,
    total_trained: u64,
}

impl BayesClassifier {
    /// Create a classifier with zero or more initial categories.
    ///
    /// Each identifier is canonicalized, so `"the_other"` and
    /// `"The other"` register the same category.
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classifier = BayesClassifier {
            store: CategoryStore::new(),
            counter: TokenCounter::new(),
            total_trained: 0,
        };
        for category in categories {
            classifier.add_category(category.as_ref());
        }
        classifier
    }

    /// Replace the stemmer used by the text-mode pipeline.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.counter.set_stemmer(stemmer);
        self
    }

    /// Register one more category.
    ///
    /// Re-adding an existing category resets its counts to empty. Adding
    /// categories to an already-trained classifier leaves the new category
    /// undertrained, which tends to attract matches; prefer registering
    /// everything up front.
    pub fn add_category(&mut self, identifier: &str) {
        self.store.register(CategoryKey::resolve(identifier));
    }

    /// Train a registered category with a document.
    pub fn train(&mut self, category: &str, text: &str) -> Result<()> {
        let key = self.resolve_registered(category)?;
        for (token, count) in self.counter.count(text)? {
            self.store.increment(&key, &token, count)?;
            self.total_trained += count;
        }
        Ok(())
    }

    /// Remove a document's counts from a registered category.
    ///
    /// Counts clamp at zero, and the grand total drops only by what was
    /// actually trained — untraining text the category never saw leaves
    /// both untouched.
    pub fn untrain(&mut self, category: &str, text: &str) -> Result<()> {
        let key = self.resolve_registered(category)?;
        for (token, count) in self.counter.count(text)? {
            let removed = self.store.decrement(&key, &token, count)?;
            self.total_trained = self.total_trained.saturating_sub(removed);
        }
        Ok(())
    }

    /// Log-likelihood score of `text` against every registered category.
    ///
    /// Each category's score sums `ln(count / category_total)` over the
    /// distinct tokens of `text` — a repeated query token contributes
    /// once. Tokens the category never saw use the 0.1 smoothing
    /// pseudo-count; a category with no training at all scores negative
    /// infinity. Scores are at most zero; higher (closer to zero) is a
    /// better match.
    pub fn classifications(&self, text: &str) -> Result<HashMap<String, f64>> {
        let counts = self.counter.count(text)?;

        let mut scores = HashMap::with_capacity(self.store.len());
        for key in self.store.keys() {
            scores.insert(key.as_str().to_string(), self.score(key, &counts)?);
        }
        Ok(scores)
    }

    /// Classify `text`, returning the best category's display name.
    ///
    /// Ties resolve to the earliest-registered category. Classifying with
    /// no categories registered is an error.
    pub fn classify(&self, text: &str) -> Result<String> {
        let counts = self.counter.count(text)?;

        let mut keys = self.store.keys();
        let first = keys.next().ok_or_else(|| {
            PilumError::invalid_operation("cannot classify without registered categories")
        })?;

        let mut best_key = first;
        let mut best_score = self.score(first, &counts)?;
        for key in keys {
            let score = self.score(key, &counts)?;
            if score > best_score {
                best_key = key;
                best_score = score;
            }
        }
        Ok(best_key.as_str().to_string())
    }

    /// Display names of all registered categories, in registration order.
    pub fn categories(&self) -> Vec<String> {
        self.store.keys().map(|k| k.as_str().to_string()).collect()
    }

    /// Select how input text is tokenized.
    ///
    /// Changing the mode after training leaves the trained statistics
    /// inconsistent with new documents; the engine does not forbid it.
    pub fn tokenize_as(&mut self, mode: TokenizerMode) {
        self.counter.set_mode(mode);
    }

    /// The current tokenizer mode.
    pub fn tokenizer_mode(&self) -> TokenizerMode {
        self.counter.mode()
    }

    /// Set the n-gram window sizes used when counting tokens.
    ///
    /// Accepts a single size, a list, or a range; the value 1 is always
    /// dropped.
    pub fn set_ngram_size(&mut self, sizes: impl Into<NgramSizes>) {
        self.counter.set_ngram_sizes(sizes.into());
    }

    /// The normalized n-gram size set.
    pub fn ngram_sizes(&self) -> &NgramSizes {
        self.counter.ngram_sizes()
    }

    /// Token counts for `text` under the current configuration.
    pub fn token_counts(&self, text: &str) -> Result<TokenCounts> {
        self.counter.count(text)
    }

    /// Per-token trained counts of one category.
    pub fn frequencies(&self, category: &str) -> Result<&WordFrequencyMap> {
        self.store.frequencies(&CategoryKey::resolve(category))
    }

    /// Total tokens ever trained across all categories, less what
    /// untraining removed. Diagnostic only — scoring never reads it.
    pub fn total_trained_tokens(&self) -> u64 {
        self.total_trained
    }

    fn resolve_registered(&self, category: &str) -> Result<CategoryKey> {
        let key = CategoryKey::resolve(category);
        if !self.store.contains(&key) {
            return Err(PilumError::category_not_found(key.as_str()));
        }
        Ok(key)
    }

    fn score(&self, key: &CategoryKey, counts: &TokenCounts) -> Result<f64> {
        let frequencies = self.store.frequencies(key)?;
        let total: u64 = frequencies.values().sum();
        if total == 0 {
            // An untrained category can never win.
            return Ok(f64::NEG_INFINITY);
        }

        let total = total as f64;
        let mut score = 0.0;
        for token in counts.keys() {
            let count = frequencies.get(token).map(|&c| c as f64).unwrap_or(SMOOTHING);
            score += (count / total).ln();
        }
        Ok(score)
    }
}

impl Default for BayesClassifier {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>())
    }
}
