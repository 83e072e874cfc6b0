//! Dictionary of acceptable words
//!
//! Loaded once at startup from a newline-delimited list, then read-only for
//! the rest of the session. Storage is delegated to a [`WordStore`], which
//! defaults to the in-process [`MemoryStore`].

mod embedded;
pub mod loader;
pub mod selector;
mod store;

pub use embedded::WORDS;
pub use selector::{TargetSelector, UniformSelector};
pub use store::{MemoryStore, StoreError, WordStore};

use crate::core::{WORD_LENGTH, Word, normalize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Fatal problems while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Word list contains no {expected}-letter words", expected = WORD_LENGTH)]
    Empty,

    #[error("Failed to populate word store")]
    Store(#[from] StoreError),
}

/// The set of words accepted as guesses
///
/// Never empty: construction fails with [`DictionaryError::Empty`] instead.
#[derive(Debug)]
pub struct Dictionary<S: WordStore = MemoryStore> {
    store: S,
    words: Vec<Word>,
}

impl Dictionary<MemoryStore> {
    /// Build the default dictionary from the embedded word list
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded list has no usable words.
    ///
    /// # Examples
    /// ```
    /// use wordle::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// assert!(dictionary.contains("CRANE"));
    /// ```
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::from_text(WORDS, MemoryStore::new())
    }
}

impl<S: WordStore> Dictionary<S> {
    /// Build a dictionary from newline-delimited text, populating `store`
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::Empty`] if no line is a valid word
    /// - [`DictionaryError::Store`] if the store refuses the bulk insert
    pub fn from_text(text: &str, mut store: S) -> Result<Self, DictionaryError> {
        let parsed = loader::parse_word_list(text);

        if parsed.skipped > 0 {
            warn!(
                skipped = parsed.skipped,
                "Ignored word list lines that are not {WORD_LENGTH} letters"
            );
        }

        if parsed.words.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let inserted = store.bulk_insert(&parsed.words)?;
        debug!(words = parsed.words.len(), inserted, "Dictionary populated");

        Ok(Self {
            store,
            words: parsed.words,
        })
    }

    /// Build a dictionary from a word list file
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Io`] if the file cannot be read, otherwise
    /// the same errors as [`Dictionary::from_text`].
    pub fn from_file(path: impl AsRef<Path>, store: S) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading word list");

        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_text(&text, store)
    }

    /// Check membership, ignoring case and surrounding whitespace
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.store.contains(&normalize(word))
    }

    /// All words in list order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a constructed dictionary
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
