//! Guess evaluation and per-letter feedback
//!
//! Each guessed letter is classified as:
//! - Hit (green): same letter at the same position
//! - Present (yellow): letter occurs elsewhere in the target
//! - Miss (gray): letter absent, or every occurrence already accounted for
//!
//! Duplicate letters follow Wordle's multiplicity rule: a letter is marked
//! Hit or Present at most as many times as it occurs in the target.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterResult {
    /// Correct letter in the correct position
    Hit,
    /// Letter is in the target, but at another position
    Present,
    /// Letter is not in the target (or all its occurrences are used up)
    Miss,
}

impl LetterResult {
    /// Emoji marker used in rendered feedback rows
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// Parse a single marker: `G`/🟩, `Y`/🟨 or `-`/`_`/⬜
    #[must_use]
    pub fn from_marker(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Precondition violations when evaluating a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },
}

/// Ordered per-letter outcome of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback {
    results: Vec<LetterResult>,
}

impl Feedback {
    /// Evaluate `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as Hit and consume them
    ///    from a per-letter tally of the target
    /// 2. Second pass: mark remaining letters Present while the tally still
    ///    holds that letter, otherwise Miss
    ///
    /// Characters are compared literally; callers normalize beforehand.
    ///
    /// # Errors
    /// Returns `FeedbackError::LengthMismatch` if the two words differ in
    /// character length. Nothing is truncated or padded.
    ///
    /// # Examples
    /// ```
    /// use wordle::core::Feedback;
    ///
    /// let feedback = Feedback::calculate("slate", "crane").unwrap();
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    ///
    /// assert!(Feedback::calculate("slates", "crane").is_err());
    /// ```
    pub fn calculate(guess: &str, target: &str) -> Result<Self, FeedbackError> {
        let guess: Vec<char> = guess.chars().collect();
        let target: Vec<char> = target.chars().collect();

        if guess.len() != target.len() {
            return Err(FeedbackError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        let mut available: FxHashMap<char, usize> = FxHashMap::default();
        for &ch in &target {
            *available.entry(ch).or_insert(0) += 1;
        }

        let mut results = vec![LetterResult::Miss; guess.len()];

        // First pass: hits
        for (i, (g, t)) in guess.iter().zip(&target).enumerate() {
            if g == t {
                results[i] = LetterResult::Hit;
                if let Some(count) = available.get_mut(g) {
                    *count -= 1;
                }
            }
        }

        // Second pass: present letters from whatever the hits left over
        for (i, g) in guess.iter().enumerate() {
            if results[i] == LetterResult::Hit {
                continue;
            }
            if let Some(count) = available.get_mut(g)
                && *count > 0
            {
                results[i] = LetterResult::Present;
                *count -= 1;
            }
        }

        Ok(Self { results })
    }

    /// Per-letter results in guess order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    /// True when every letter is a Hit
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.results.is_empty() && self.results.iter().all(|&r| r == LetterResult::Hit)
    }

    /// Number of letters with the given classification
    #[must_use]
    pub fn count(&self, kind: LetterResult) -> usize {
        self.results.iter().filter(|&&r| r == kind).count()
    }

    /// Convert to an emoji row such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.results.iter().map(|r| r.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    /// Parse a marker string like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let results = s
            .chars()
            .map(LetterResult::from_marker)
            .collect::<Option<Vec<_>>>()
            .filter(|r| !r.is_empty())
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        Ok(Self { results })
    }
}
