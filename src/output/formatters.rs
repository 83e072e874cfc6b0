//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterResult, Word};
use colored::{ColoredString, Colorize};

/// Color a single guessed letter by its result
#[must_use]
pub fn colored_letter(letter: char, result: LetterResult) -> ColoredString {
    let text = letter.to_uppercase().to_string();
    match result {
        LetterResult::Hit => text.black().on_green().bold(),
        LetterResult::Present => text.black().on_yellow().bold(),
        LetterResult::Miss => text.white().on_bright_black(),
    }
}

/// Render a guess as colored letters followed by its emoji row
///
/// The emoji row keeps the three results distinguishable when the terminal
/// has no color support.
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    let letters: String = guess
        .chars()
        .iter()
        .zip(feedback.results())
        .map(|(&ch, &result)| format!("{}", colored_letter(ch, result)))
        .collect::<Vec<_>>()
        .join(" ");

    format!("{letters}   {}", feedback.to_emoji())
}

/// "1 attempt" / "3 attempts"
#[must_use]
pub fn plural_attempts(count: usize) -> String {
    if count == 1 {
        "1 attempt".to_string()
    } else {
        format!("{count} attempts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_row_ends_with_emoji() {
        let guess = Word::new("llama").unwrap();
        let feedback = Feedback::calculate("llama", "allow").unwrap();

        let row = feedback_row(&guess, &feedback);
        assert!(row.ends_with("🟨🟩🟨⬜⬜"));
    }

    #[test]
    fn colored_letter_is_uppercase() {
        let letter = colored_letter('a', LetterResult::Miss);
        assert_eq!(&*letter, "A");
    }

    #[test]
    fn plural_attempts_wording() {
        assert_eq!(plural_attempts(1), "1 attempt");
        assert_eq!(plural_attempts(0), "0 attempts");
        assert_eq!(plural_attempts(4), "4 attempts");
    }
}
