//! Target word selection
//!
//! Defines the `TargetSelector` trait and the uniform random selector used
//! for normal play.

use super::{Dictionary, WordStore};
use crate::core::Word;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Chooses the secret word for a session
pub trait TargetSelector {
    /// Pick one word from the dictionary
    ///
    /// The result is always a dictionary member.
    fn select<'a, S: WordStore>(&mut self, dictionary: &'a Dictionary<S>) -> &'a Word;
}

/// Uniform random selection over the whole dictionary
///
/// The random source is injectable so tests and `--seed` runs are
/// reproducible.
pub struct UniformSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> UniformSelector<R> {
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformSelector<ThreadRng> {
    /// Selector backed by the thread-local RNG
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng())
    }
}

impl UniformSelector<StdRng> {
    /// Deterministic selector for a given seed
    ///
    /// # Examples
    /// ```
    /// use wordle::dictionary::{Dictionary, TargetSelector, UniformSelector};
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// let first = UniformSelector::seeded(7).select(&dictionary).clone();
    /// let second = UniformSelector::seeded(7).select(&dictionary).clone();
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TargetSelector for UniformSelector<R> {
    fn select<'a, S: WordStore>(&mut self, dictionary: &'a Dictionary<S>) -> &'a Word {
        let words = dictionary.words();
        let index = self.rng.random_range(0..words.len());
        trace!(index, total = words.len(), "Selected target");
        &words[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::MemoryStore;
    use rustc_hash::FxHashSet;

    fn dictionary(text: &str) -> Dictionary {
        Dictionary::from_text(text, MemoryStore::new()).unwrap()
    }

    #[test]
    fn selected_word_is_in_dictionary() {
        let dictionary = dictionary("crane\nslate\nirate\nallow\nllama\n");
        let mut selector = UniformSelector::seeded(42);

        for _ in 0..50 {
            let target = selector.select(&dictionary);
            assert!(dictionary.contains(target.text()));
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let dictionary = Dictionary::embedded().unwrap();
        let mut a = UniformSelector::seeded(2024);
        let mut b = UniformSelector::seeded(2024);

        for _ in 0..10 {
            assert_eq!(a.select(&dictionary), b.select(&dictionary));
        }
    }

    #[test]
    fn single_word_dictionary_always_selects_it() {
        let dictionary = dictionary("crane\n");
        let mut selector = UniformSelector::from_entropy();
        assert_eq!(selector.select(&dictionary).text(), "crane");
    }

    #[test]
    fn selection_covers_every_word() {
        let dictionary = dictionary("crane\nslate\nirate\n");
        let mut selector = UniformSelector::seeded(1);

        let seen: FxHashSet<&str> = (0..200)
            .map(|_| selector.select(&dictionary).text())
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn injected_rng_drives_selection() {
        let dictionary = dictionary("crane\nslate\nirate\n");
        let mut selector = UniformSelector::new(StdRng::seed_from_u64(99));
        let expected = {
            let mut rng = StdRng::seed_from_u64(99);
            dictionary.words()[rng.random_range(0..3)].clone()
        };
        assert_eq!(selector.select(&dictionary), &expected);
    }
}
