//! Wordle
//!
//! A terminal Wordle game: guess a secret five-letter word with per-letter
//! feedback after every attempt.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle::core::{Feedback, LetterResult};
//!
//! // Evaluate a guess against the target
//! let feedback = Feedback::calculate("llama", "allow").unwrap();
//!
//! // Only two L's are marked, matching the two in ALLOW
//! assert_eq!(feedback.count(LetterResult::Hit), 1);
//! assert_eq!(feedback.count(LetterResult::Present), 2);
//! ```

// Core domain types
pub mod core;

// Word list, backing store and target selection
pub mod dictionary;

// Session state machine and game loop
pub mod game;

// Terminal output formatting
pub mod output;
