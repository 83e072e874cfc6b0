//! Backing stores for dictionary membership
//!
//! The dictionary only needs two operations from its storage: a one-time bulk
//! insert at startup and a membership test during play. Any set-like store
//! that provides both can stand in for the in-process default.

use crate::core::Word;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Failures reported by a backing store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Word store is unavailable: {0}")]
    Unavailable(String),

    #[error("Word store rejected '{0}'")]
    Rejected(String),
}

/// A set of words supporting bulk population and membership tests
///
/// Words passed to both methods are already normalized (trimmed, lowercase).
pub trait WordStore {
    /// Insert every word, returning how many were not already present
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` if the store cannot accept the words. Callers
    /// treat this as fatal; no retry is attempted.
    fn bulk_insert(&mut self, words: &[Word]) -> Result<usize, StoreError>;

    /// Check whether `word` was inserted
    fn contains(&self, word: &str) -> bool;
}

/// In-process hash set store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    words: FxHashSet<String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordStore for MemoryStore {
    fn bulk_insert(&mut self, words: &[Word]) -> Result<usize, StoreError> {
        let before = self.words.len();
        self.words.reserve(words.len());
        self.words
            .extend(words.iter().map(|word| word.text().to_string()));
        Ok(self.words.len() - before)
    }

    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.is_empty());
        assert!(!store.contains("crane"));
    }

    #[test]
    fn bulk_insert_then_contains() {
        let mut store = MemoryStore::new();
        let inserted = store.bulk_insert(&words(&["crane", "slate"])).unwrap();

        assert_eq!(inserted, 2);
        assert_eq!(store.len(), 2);
        assert!(store.contains("crane"));
        assert!(store.contains("slate"));
        assert!(!store.contains("irate"));
    }

    #[test]
    fn bulk_insert_counts_only_new_words() {
        let mut store = MemoryStore::new();
        store.bulk_insert(&words(&["crane"])).unwrap();

        let inserted = store.bulk_insert(&words(&["crane", "slate"])).unwrap();
        assert_eq!(inserted, 1);
        assert_eq!(store.len(), 2);
    }
}
