//! Game session and interactive loop

mod play;
mod session;

pub use play::{GameOutcome, PROMPT, play};
pub use session::{
    DEFAULT_MAX_ATTEMPTS, GameConfig, GuessError, Session, SessionError, SessionState, Turn,
};
