//! Category identity and per-category frequency storage.

use std::fmt;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{PilumError, Result};

/// Canonical identifier for a category.
///
/// Produced exclusively by [`CategoryKey::resolve`], which folds the
/// acceptable spellings of a category name — `"the_other"`,
/// `"The  OTHER"`, `" the other "` — into one key. The key's string form
/// doubles as the category's display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Canonicalize an arbitrary category identifier.
    ///
    /// Underscores become spaces, runs of whitespace collapse to one, the
    /// result is lowercased and its first character capitalized. Total and
    /// deterministic over the identifier's textual form.
    pub fn resolve(identifier: &str) -> Self {
        let lowered = identifier
            .replace('_', " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let mut chars = lowered.chars();
        let name = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        CategoryKey(name)
    }

    /// The key's display form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-category mapping from token to cumulative training count.
///
/// Holds only tokens with a count above zero.
pub type WordFrequencyMap = AHashMap<String, u64>;

/// Registration-ordered store of per-category frequency maps.
#[derive(Clone, Debug, Default)]
pub struct CategoryStore {
    categories: AHashMap<CategoryKey, WordFrequencyMap>,
    order: Vec<CategoryKey>,
}

impl CategoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        CategoryStore::default()
    }

    /// Register a category, resetting it to an empty map if it already
    /// exists. A re-registered key keeps its original position.
    pub fn register(&mut self, key: CategoryKey) {
        if !self.categories.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.categories.insert(key, WordFrequencyMap::new());
    }

    /// Check if a category is registered.
    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.categories.contains_key(key)
    }

    /// The number of registered categories.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no categories are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate the keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.order.iter()
    }

    /// Add `delta` to a token's count in a registered category.
    pub fn increment(&mut self, key: &CategoryKey, token: &str, delta: u64) -> Result<()> {
        let map = self.category_mut(key)?;
        *map.entry(token.to_string()).or_insert(0) += delta;
        Ok(())
    }

    /// Reduce a token's count, removing the entry when it reaches zero.
    ///
    /// Returns the amount actually removed, which is less than `delta`
    /// when the stored count was smaller — the count clamps at zero and
    /// never goes negative. Callers account with the returned amount.
    pub fn decrement(&mut self, key: &CategoryKey, token: &str, delta: u64) -> Result<u64> {
        let map = self.category_mut(key)?;
        let Some(count) = map.get_mut(token) else {
            return Ok(0);
        };

        if *count > delta {
            *count -= delta;
            Ok(delta)
        } else {
            let present = *count;
            if present < delta {
                log::warn!(
                    "untrain clamped for token {token:?} in category {key}: \
                     {present} trained, {delta} requested"
                );
            }
            map.remove(token);
            Ok(present)
        }
    }

    /// Sum of all token counts in a category.
    pub fn total_count(&self, key: &CategoryKey) -> Result<u64> {
        Ok(self.category(key)?.values().sum())
    }

    /// The frequency map of a registered category.
    pub fn frequencies(&self, key: &CategoryKey) -> Result<&WordFrequencyMap> {
        self.category(key)
    }

    fn category(&self, key: &CategoryKey) -> Result<&WordFrequencyMap> {
        self.categories
            .get(key)
            .ok_or_else(|| PilumError::category_not_found(key.as_str()))
    }

    fn category_mut(&mut self, key: &CategoryKey) -> Result<&mut WordFrequencyMap> {
        self.categories
            .get_mut(key)
            .ok_or_else(|| PilumError::category_not_found(key.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_folds_spellings() {
        let key = CategoryKey::resolve("the_other");
        assert_eq!(key.as_str(), "The other");

        assert_eq!(CategoryKey::resolve("The  OTHER"), key);
        assert_eq!(CategoryKey::resolve(" the other "), key);
        assert_eq!(CategoryKey::resolve("the other"), key);
    }

    #[test]
    fn test_resolve_single_word() {
        assert_eq!(CategoryKey::resolve("Interesting").as_str(), "Interesting");
        assert_eq!(CategoryKey::resolve("interesting").as_str(), "Interesting");
        assert_eq!(CategoryKey::resolve("").as_str(), "");
    }

    #[test]
    fn test_register_and_reset() {
        let mut store = CategoryStore::new();
        let key = CategoryKey::resolve("Spam");

        store.register(key.clone());
        store.increment(&key, "viagra", 3).unwrap();
        assert_eq!(store.total_count(&key).unwrap(), 3);

        // Re-registration resets the counts but keeps the position.
        store.register(key.clone());
        assert_eq!(store.total_count(&key).unwrap(), 0);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_registration_order() {
        let mut store = CategoryStore::new();
        store.register(CategoryKey::resolve("First"));
        store.register(CategoryKey::resolve("Second"));
        store.register(CategoryKey::resolve("First"));

        let keys: Vec<&str> = store.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["First", "Second"]);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut store = CategoryStore::new();
        let key = CategoryKey::resolve("Cat");
        store.register(key.clone());

        store.increment(&key, "word", 5).unwrap();
        assert_eq!(store.decrement(&key, "word", 2).unwrap(), 2);
        assert_eq!(store.frequencies(&key).unwrap().get("word"), Some(&3));

        // Dropping to zero removes the entry.
        assert_eq!(store.decrement(&key, "word", 3).unwrap(), 3);
        assert!(!store.frequencies(&key).unwrap().contains_key("word"));
    }

    #[test]
    fn test_decrement_clamps() {
        let mut store = CategoryStore::new();
        let key = CategoryKey::resolve("Cat");
        store.register(key.clone());

        store.increment(&key, "word", 2).unwrap();

        // Only the trained amount comes off.
        assert_eq!(store.decrement(&key, "word", 10).unwrap(), 2);
        assert!(!store.frequencies(&key).unwrap().contains_key("word"));

        // A never-trained token removes nothing.
        assert_eq!(store.decrement(&key, "ghost", 4).unwrap(), 0);
    }

    #[test]
    fn test_unknown_category() {
        let mut store = CategoryStore::new();
        let key = CategoryKey::resolve("Nope");

        assert!(store.increment(&key, "word", 1).is_err());
        assert!(store.decrement(&key, "word", 1).is_err());
        assert!(store.total_count(&key).is_err());
    }
}
