//! Line-oriented game loop
//!
//! Drives a [`Session`] from any buffered reader, so the same loop serves
//! stdin and tests.

use super::session::{GameStatus, Session};
use crate::output::formatters::{FeedbackStyle, format_feedback, legend};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// How a game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Won { attempts: usize },
    Lost { secret: String },
    /// Input ran out before the game finished
    Abandoned { secret: String },
}

/// Options for the text game loop
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    pub style: FeedbackStyle,
    /// Print the secret before the first guess
    pub reveal: bool,
}

/// Play one game, reading guesses line by line from `input`
///
/// Rejected guesses are reported and re-prompted without costing an attempt.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_game<R: BufRead, W: Write>(
    session: &mut Session<'_>,
    input: &mut R,
    out: &mut W,
    options: GameOptions,
) -> io::Result<Outcome> {
    writeln!(out, "\nWelcome to Termo!")?;
    writeln!(
        out,
        "Guess the {}-letter word. You have {} attempts.",
        session.secret().text().len(),
        session.max_attempts()
    )?;
    writeln!(out, "{}", legend(options.style))?;
    if options.reveal {
        writeln!(
            out,
            "(Debug: The secret word is '{}')",
            session.secret().text().to_uppercase()
        )?;
    }
    debug!(secret = %session.secret(), "Session started");

    let mut feedback_lines: Vec<String> = Vec::new();

    while session.status() == GameStatus::InProgress {
        writeln!(out, "{}", "-".repeat(30))?;
        writeln!(
            out,
            "Attempt {} of {}",
            session.attempts() + 1,
            session.max_attempts()
        )?;

        let Some(line) = read_guess(input, out)? else {
            info!("Input closed before the game ended");
            writeln!(
                out,
                "\nGame abandoned. The secret word was: {}",
                session.secret().text().to_uppercase()
            )?;
            return Ok(Outcome::Abandoned {
                secret: session.secret().text().to_string(),
            });
        };

        match session.submit(&line) {
            Ok(turn) => {
                feedback_lines.push(format_feedback(&turn.guess, &turn.feedback, options.style));
                writeln!(out, "\nHistory:")?;
                for feedback_line in &feedback_lines {
                    writeln!(out, "{feedback_line}")?;
                }
            }
            Err(err) => {
                debug!(%err, "Rejected guess");
                writeln!(out, "❌ {err}. Try again.")?;
            }
        }
    }

    writeln!(out, "\n{}", "=".repeat(30))?;
    let outcome = if session.status() == GameStatus::Won {
        let attempts = session.attempts();
        writeln!(out, "{}", "YOU GUESSED THE WORD!".bright_green().bold())?;
        writeln!(
            out,
            "Solved in {attempts} {}.",
            if attempts == 1 { "guess" } else { "guesses" }
        )?;
        Outcome::Won { attempts }
    } else {
        writeln!(out, "{}", "You used all attempts!".bright_black())?;
        Outcome::Lost {
            secret: session.secret().text().to_string(),
        }
    };
    writeln!(
        out,
        "The secret word was: {}",
        session.secret().text().to_uppercase()
    )?;
    writeln!(out, "{}", "=".repeat(30))?;

    info!(?outcome, attempts = session.attempts(), "Game finished");
    Ok(outcome)
}

/// Prompt for a guess; `None` at end of input
fn read_guess<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "Your guess: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
