//! Word list parsing utilities
//!
//! Turns newline-delimited text into a deduplicated list of words.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Result of parsing a word list
#[derive(Debug, Default)]
pub struct ParsedList {
    /// Valid words in first-seen order, without duplicates
    pub words: Vec<Word>,
    /// Non-blank lines that were not valid words
    pub skipped: usize,
}

/// Parse a newline-delimited word list
///
/// Blank lines (including trailing ones) are ignored and not counted as
/// skipped. Lines are normalized, so `"CRANE\r"` and `"crane"` are the same
/// word.
///
/// # Examples
/// ```
/// use wordle::dictionary::loader::parse_word_list;
///
/// let parsed = parse_word_list("crane\nslate\n\n");
/// assert_eq!(parsed.words.len(), 2);
/// assert_eq!(parsed.skipped, 0);
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> ParsedList {
    let mut seen = FxHashSet::default();
    let mut parsed = ParsedList::default();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        match Word::new(line) {
            Ok(word) => {
                if seen.insert(word.text().to_string()) {
                    parsed.words.push(word);
                }
            }
            Err(_) => parsed.skipped += 1,
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(parsed: &ParsedList) -> Vec<&str> {
        parsed.words.iter().map(Word::text).collect()
    }

    #[test]
    fn parses_valid_words() {
        let parsed = parse_word_list("crane\nslate\nirate");
        assert_eq!(texts(&parsed), ["crane", "slate", "irate"]);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let parsed = parse_word_list("\ncrane\n\n   \nslate\n\n\n");
        assert_eq!(texts(&parsed), ["crane", "slate"]);
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn crlf_and_case_are_normalized() {
        let parsed = parse_word_list("CRANE\r\nSlate\r\n");
        assert_eq!(texts(&parsed), ["crane", "slate"]);
    }

    #[test]
    fn wrong_length_lines_are_skipped() {
        let parsed = parse_word_list("crane\ntoolong\nabc\nslate\n");
        assert_eq!(texts(&parsed), ["crane", "slate"]);
        assert_eq!(parsed.skipped, 2);
    }

    #[test]
    fn duplicates_collapse() {
        let parsed = parse_word_list("crane\nCRANE\nslate\ncrane\n");
        assert_eq!(texts(&parsed), ["crane", "slate"]);
    }

    #[test]
    fn empty_input() {
        let parsed = parse_word_list("");
        assert!(parsed.words.is_empty());
        assert_eq!(parsed.skipped, 0);
    }
}
