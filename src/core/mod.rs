//! Core domain types for Wordle
//!
//! Words and guess evaluation. Everything here is pure and independent of
//! the dictionary and the terminal.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, LetterResult};
pub use word::{WORD_LENGTH, Word, WordError, normalize};
