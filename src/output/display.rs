//! Display functions for game events

use super::formatters::{feedback_row, plural_attempts};
use crate::game::{GuessError, Turn};
use colored::Colorize;
use std::io::{self, Write};

/// Print the rules shown once at the start of a game
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_rules(out: &mut impl Write, max_attempts: usize) -> io::Result<()> {
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(out, " {}", "WORDLE RULES".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        "  1. You have {max_attempts} chances to guess the word correctly."
    )?;
    writeln!(
        out,
        "  2. Letters in the correct position turn {}.",
        "green".green().bold()
    )?;
    writeln!(
        out,
        "  3. Letters in the word but at the wrong position turn {}.",
        "yellow".yellow().bold()
    )?;
    writeln!(
        out,
        "  4. Letters not in the word turn {}.",
        "gray".bright_black()
    )?;
    writeln!(
        out,
        "  5. Use the clues from previous guesses to make your next guess."
    )?;
    writeln!(out)?;
    writeln!(out, "Type your guess and press enter")
}

/// Print the feedback for an evaluated guess
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_turn(out: &mut impl Write, turn: &Turn) -> io::Result<()> {
    writeln!(out, "{}", feedback_row(&turn.guess, &turn.feedback))
}

/// Print the attempts left after a non-winning guess
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_remaining(out: &mut impl Write, remaining: usize) -> io::Result<()> {
    writeln!(out, "{}", format!("{} left", plural_attempts(remaining)).bright_black())
}

/// Print why a guess was rejected
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_rejection(out: &mut impl Write, error: &GuessError) -> io::Result<()> {
    writeln!(out, "{}", error.to_string().yellow())
}

/// Print the victory banner with the guess history
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_win(out: &mut impl Write, history: &[Turn]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Congratulations you won!".bright_green().bold())?;
    writeln!(
        out,
        "Solved in {} {}",
        history.len().to_string().bright_cyan().bold(),
        if history.len() == 1 { "guess" } else { "guesses" }
    )?;
    print_history(out, history)
}

/// Print the loss message, revealing the target
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_loss(out: &mut impl Write, target: &str, history: &[Turn]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} The word was {}",
        "Out of attempts!".red().bold(),
        target.to_uppercase().bright_yellow().bold()
    )?;
    print_history(out, history)
}

fn print_history(out: &mut impl Write, history: &[Turn]) -> io::Result<()> {
    writeln!(out, "\n  Guess history:")?;
    for (i, turn) in history.iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            i + 1,
            turn.guess.text().to_uppercase(),
            turn.feedback.to_emoji()
        )?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Word};

    fn turn(guess: &str, target: &str) -> Turn {
        Turn {
            guess: Word::new(guess).unwrap(),
            feedback: Feedback::calculate(guess, target).unwrap(),
        }
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn rules_mention_attempt_count() {
        let text = render(|out| print_rules(out, 6));
        assert!(text.contains("You have 6 chances"));
        assert!(text.contains("Type your guess"));
    }

    #[test]
    fn win_lists_history() {
        let history = [turn("slate", "crane"), turn("crane", "crane")];
        let text = render(|out| print_win(out, &history));

        assert!(text.contains("Congratulations you won!"));
        assert!(text.contains("1. SLATE ⬜⬜🟩⬜🟩"));
        assert!(text.contains("2. CRANE 🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn loss_reveals_target() {
        let history = [turn("slate", "crane")];
        let text = render(|out| print_loss(out, "crane", &history));

        assert!(text.contains("Out of attempts!"));
        assert!(text.contains("CRANE"));
    }

    #[test]
    fn rejection_shows_message() {
        let error = GuessError::WrongLength {
            expected: 5,
            actual: 3,
        };
        let text = render(|out| print_rejection(out, &error));
        assert!(text.contains("Enter only 5 letter words"));
    }
}
