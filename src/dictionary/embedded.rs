//! Embedded word list
//!
//! The default dictionary, compiled into the binary as newline-delimited text.

/// Default word list, one word per line
pub const WORDS: &str = include_str!("../../data/words.txt");
