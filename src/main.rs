//! Wordle - CLI
//!
//! Terminal Wordle: guess the secret word in a limited number of attempts.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle::{
    dictionary::{Dictionary, MemoryStore, UniformSelector},
    game::{DEFAULT_MAX_ATTEMPTS, GameConfig, GameOutcome, Session, play},
};

/// Exit code when input ends before the game is decided
const EXIT_ABANDONED: u8 = 2;

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the hidden five-letter word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    /// Word list file with one word per line (default: built-in list)
    #[arg(short = 'w', long, env = "WORDLE_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Number of guesses allowed
    #[arg(
        short,
        long,
        env = "WORDLE_ATTEMPTS",
        default_value_t = DEFAULT_MAX_ATTEMPTS as u8,
        value_parser = clap::value_parser!(u8).range(1..=20)
    )]
    attempts: u8,

    /// Seed for a reproducible target word
    #[arg(long, env = "WORDLE_SEED")]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Log to stderr so diagnostics never mix with the board on stdout
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

/// Load the dictionary from `--wordlist`, or the built-in list when unset
fn load_dictionary(wordlist: Option<&Path>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => Dictionary::from_file(path, MemoryStore::new())
            .with_context(|| format!("Cannot load word list from {}", path.display())),
        None => Dictionary::embedded().context("Built-in word list is unusable"),
    }
}

fn run(cli: &Cli) -> Result<GameOutcome> {
    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    info!(words = dictionary.len(), "Dictionary ready");

    let config = GameConfig::new(usize::from(cli.attempts));
    let mut session = match cli.seed {
        Some(seed) => Session::start(&dictionary, &mut UniformSelector::seeded(seed), config),
        None => Session::start(&dictionary, &mut UniformSelector::from_entropy(), config),
    }
    .context("Failed to start game")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play(&mut session, stdin.lock(), &mut stdout)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = run(&cli)?;

    Ok(match outcome {
        GameOutcome::Won { .. } | GameOutcome::Lost => ExitCode::SUCCESS,
        GameOutcome::Abandoned => ExitCode::from(EXIT_ABANDONED),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["wordle"]).unwrap();
        assert_eq!(usize::from(cli.attempts), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn attempts_must_be_positive() {
        assert!(Cli::try_parse_from(["wordle", "--attempts", "0"]).is_err());
        assert!(Cli::try_parse_from(["wordle", "--attempts", "21"]).is_err());

        let cli = Cli::try_parse_from(["wordle", "-a", "6", "-vv", "--seed", "9"]).unwrap();
        assert_eq!(cli.attempts, 6);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn missing_wordlist_is_fatal() {
        let result = load_dictionary(Some(Path::new("/nonexistent/words.txt")));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Cannot load word list"));
    }

    #[test]
    fn builtin_wordlist_loads() {
        assert!(load_dictionary(None).unwrap().contains("crane"));
    }
}
