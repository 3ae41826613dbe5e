//! Identity stemmer implementation.

use super::Stemmer;

/// A stemmer that returns every word unchanged.
///
/// Useful for callers that want the counting pipeline without stemming.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    /// Create a new identity stemmer.
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_stemmer() {
        let stemmer = IdentityStemmer::new();
        assert_eq!(stemmer.stem("running"), "running");
        assert_eq!(stemmer.stem("Flies"), "Flies");
        assert_eq!(stemmer.name(), "identity");
    }
}
