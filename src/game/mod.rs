//! The guessing game
//!
//! A [`Session`] holds the rules; [`run_game`] drives it over stdin/stdout.

mod runner;
mod session;

pub use runner::{GameOptions, Outcome, run_game};
pub use session::{GameStatus, GuessError, MAX_ATTEMPTS, Session, Turn};
