//! Game session state machine
//!
//! A session moves `AwaitingGuess → (Evaluating) → AwaitingGuess | Won | Lost`.
//! Evaluation happens inside [`Session::submit`]; only guesses of the right
//! length that are in the dictionary consume an attempt.

use crate::core::{Feedback, FeedbackError, Word, WordError};
use crate::dictionary::{Dictionary, TargetSelector, WordStore};
use thiserror::Error;
use tracing::debug;

/// Attempts allowed when nothing else is configured
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Configuration for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
}

impl GameConfig {
    #[must_use]
    pub const fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuess,
    Won,
    Lost,
}

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub guess: Word,
    pub feedback: Feedback,
}

/// Problems starting a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Target '{0}' is not in the dictionary")]
    TargetNotInDictionary(String),

    #[error("A game needs at least one attempt")]
    NoAttempts,
}

/// Rejected guesses
///
/// `WrongLength` and `NotInDictionary` are user-input errors: the caller
/// re-prompts and no attempt is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Enter only {expected} letter words")]
    WrongLength { expected: usize, actual: usize },

    #[error("'{0}' is not in the word list, enter a valid word")]
    NotInDictionary(String),

    #[error("The game is already over")]
    GameOver,

    #[error(transparent)]
    Evaluation(#[from] FeedbackError),
}

impl GuessError {
    /// True for errors the player fixes by simply guessing again
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::WrongLength { .. } | Self::NotInDictionary(_))
    }
}

/// A single game against one target word
pub struct Session<'a, S: WordStore> {
    dictionary: &'a Dictionary<S>,
    target: Word,
    max_attempts: usize,
    remaining: usize,
    state: SessionState,
    history: Vec<Turn>,
}

impl<'a, S: WordStore> Session<'a, S> {
    /// Create a session with an explicit target
    ///
    /// # Errors
    ///
    /// - [`SessionError::TargetNotInDictionary`] if the dictionary lacks `target`
    /// - [`SessionError::NoAttempts`] if `config.max_attempts` is zero
    pub fn new(
        dictionary: &'a Dictionary<S>,
        target: Word,
        config: GameConfig,
    ) -> Result<Self, SessionError> {
        if !dictionary.contains(target.text()) {
            return Err(SessionError::TargetNotInDictionary(target.text().to_string()));
        }
        if config.max_attempts == 0 {
            return Err(SessionError::NoAttempts);
        }

        debug!(max_attempts = config.max_attempts, "Session started");

        Ok(Self {
            dictionary,
            target,
            max_attempts: config.max_attempts,
            remaining: config.max_attempts,
            state: SessionState::AwaitingGuess,
            history: Vec::with_capacity(config.max_attempts),
        })
    }

    /// Create a session whose target is picked by `selector`
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoAttempts`] if `config.max_attempts` is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle::dictionary::{Dictionary, UniformSelector};
    /// use wordle::game::{GameConfig, Session, SessionState};
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// let mut selector = UniformSelector::seeded(1);
    /// let mut session = Session::start(&dictionary, &mut selector, GameConfig::default()).unwrap();
    ///
    /// let target = session.target().text().to_string();
    /// let turn = session.submit(&target).unwrap();
    /// assert!(turn.feedback.is_win());
    /// assert_eq!(session.state(), SessionState::Won);
    /// ```
    pub fn start<T: TargetSelector>(
        dictionary: &'a Dictionary<S>,
        selector: &mut T,
        config: GameConfig,
    ) -> Result<Self, SessionError> {
        let target = selector.select(dictionary).clone();
        Self::new(dictionary, target, config)
    }

    /// Submit a raw guess
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    ///
    /// - [`GuessError::GameOver`] once the session is won or lost
    /// - [`GuessError::WrongLength`] if the guess length differs from the target
    /// - [`GuessError::NotInDictionary`] if the guess is not a known word
    ///
    /// None of these consume an attempt.
    pub fn submit(&mut self, input: &str) -> Result<&Turn, GuessError> {
        if self.is_over() {
            return Err(GuessError::GameOver);
        }

        let expected = self.target.len();
        let guess = Word::new(input).map_err(|WordError::InvalidLength(actual)| {
            GuessError::WrongLength { expected, actual }
        })?;

        if !self.dictionary.contains(guess.text()) {
            return Err(GuessError::NotInDictionary(guess.text().to_string()));
        }

        let feedback = Feedback::calculate(guess.text(), self.target.text())?;
        self.remaining -= 1;

        self.state = if feedback.is_win() {
            SessionState::Won
        } else if self.remaining == 0 {
            SessionState::Lost
        } else {
            SessionState::AwaitingGuess
        };

        debug!(
            attempt = self.attempts_used(),
            remaining = self.remaining,
            state = ?self.state,
            "Guess evaluated"
        );

        let index = self.history.len();
        self.history.push(Turn { guess, feedback });
        Ok(&self.history[index])
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.state, SessionState::AwaitingGuess)
    }

    /// Attempts left before the session is lost
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Evaluated guesses so far
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        self.max_attempts - self.remaining
    }

    /// Every evaluated guess in order
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// The secret word
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }
}
