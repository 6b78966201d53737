//! Play commands
//!
//! Loads the word list, picks the secret and hands off to the text loop or
//! the TUI.

use crate::error::SourceError;
use crate::game::{GameOptions, MAX_ATTEMPTS, Outcome, Session, run_game};
use crate::interactive::{App, run_tui};
use crate::wordlists::WordList;
use crate::wordlists::loader::load_from_file;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use tracing::debug;

/// Configuration for a game
#[derive(Debug, Clone)]
pub struct PlayConfig {
    pub words: PathBuf,
    /// Fixed RNG seed for a reproducible secret
    pub seed: Option<u64>,
    /// Reject guesses that are not in the word list
    pub strict: bool,
    pub options: GameOptions,
}

/// Build the secret-word RNG
///
/// A given seed is used directly; otherwise the RNG is seeded from
/// `rand::rng()`.
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}

/// Load the word list and announce its size
///
/// # Errors
///
/// Returns a `SourceError` if the list is missing, unreadable or empty.
pub fn load_words(config: &PlayConfig) -> Result<WordList, SourceError> {
    let words = load_from_file(&config.words)?;
    println!(
        "{} 5-letter words loaded from '{}'.",
        words.len(),
        config.words.display()
    );
    Ok(words)
}

/// Play one text game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or terminal I/O fails.
pub fn run_play(config: &PlayConfig) -> Result<Outcome> {
    let words = load_words(config)?;
    let mut rng = make_rng(config.seed);

    let secret = words
        .choose(&mut rng)
        .cloned()
        .ok_or_else(|| SourceError::EmptyWordList(config.words.clone()))?;
    debug!(%secret, seed = ?config.seed, "Chose secret word");

    let mut session = Session::new(secret, MAX_ATTEMPTS);
    if config.strict {
        session = session.with_dictionary(&words);
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_game(&mut session, &mut input, &mut out, config.options).context("Terminal I/O failed")
}

/// Play in the full-screen TUI
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or the terminal cannot
/// be driven.
pub fn run_tui_play(config: &PlayConfig) -> Result<()> {
    let words = load_words(config)?;
    let app = App::new(&words, config.strict, make_rng(config.seed))
        .ok_or_else(|| SourceError::EmptyWordList(config.words.clone()))?;
    run_tui(app)
}
