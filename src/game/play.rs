//! Interactive game loop
//!
//! Reads one guess per line, renders feedback, and stops on a win, a loss, or
//! end of input. Input and output are generic so the loop runs the same
//! against a terminal or in-memory buffers.

use super::session::{Session, SessionState};
use crate::dictionary::WordStore;
use crate::output;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

/// Prompt printed before each guess
pub const PROMPT: &str = "-->";

/// How a played game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won { attempts: usize },
    Lost,
    /// Input ended before the game finished
    Abandoned,
}

/// Play `session` to completion
///
/// Rejected guesses print a message and re-prompt without costing an attempt.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// session reports a non-recoverable guess error.
pub fn play<S, R, W>(session: &mut Session<'_, S>, mut input: R, out: &mut W) -> Result<GameOutcome>
where
    S: WordStore,
    R: BufRead,
    W: Write,
{
    output::print_rules(out, session.max_attempts())?;

    let mut line = String::new();
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            info!(
                attempts = session.attempts_used(),
                "Input closed before the game finished"
            );
            return Ok(GameOutcome::Abandoned);
        }

        match session.submit(&line) {
            Ok(turn) => output::print_turn(out, turn)?,
            Err(error) if error.is_recoverable() => {
                output::print_rejection(out, &error)?;
                continue;
            }
            Err(error) => return Err(error.into()),
        }

        match session.state() {
            SessionState::Won => {
                output::print_win(out, session.history())?;
                info!(attempts = session.attempts_used(), "Game won");
                return Ok(GameOutcome::Won {
                    attempts: session.attempts_used(),
                });
            }
            SessionState::Lost => {
                output::print_loss(out, session.target().text(), session.history())?;
                info!("Game lost");
                return Ok(GameOutcome::Lost);
            }
            SessionState::AwaitingGuess => output::print_remaining(out, session.remaining())?,
        }
    }
}
