//! Game session state machine
//!
//! A session owns the secret word and counts attempts. Only guesses that pass
//! validation are scored; rejected guesses leave the session untouched.

use crate::core::{Feedback, LetterFeedback, WORD_LENGTH, Word};
use crate::normalize::fold_word;
use crate::wordlists::WordList;
use derive_more::Display;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Why a guess was rejected
///
/// None of these consume an attempt.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GuessError {
    #[display("Guess must have {expected} letters, got {got}")]
    InvalidGuessLength { expected: usize, got: usize },
    #[display("Guess must contain only letters")]
    InvalidCharacters,
    #[display("'{}' is not in the word list", _0.to_uppercase())]
    NotInWordList(String),
    #[display("The game is already over")]
    GameOver,
}

impl std::error::Error for GuessError {}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub attempt: usize,
    pub guess: Word,
    pub feedback: Feedback,
}

/// One game against a fixed secret word
#[derive(Debug, Clone)]
pub struct Session<'a> {
    secret: Word,
    max_attempts: usize,
    history: Vec<Turn>,
    status: GameStatus,
    dictionary: Option<&'a WordList>,
}

impl<'a> Session<'a> {
    /// Start a session that accepts any five-letter guess
    #[must_use]
    pub fn new(secret: Word, max_attempts: usize) -> Self {
        Self {
            secret,
            max_attempts,
            history: Vec::with_capacity(max_attempts),
            status: GameStatus::InProgress,
            dictionary: None,
        }
    }

    /// Only accept guesses that appear in `words`
    #[must_use]
    pub fn with_dictionary(mut self, words: &'a WordList) -> Self {
        self.dictionary = Some(words);
        self
    }

    /// Submit a raw guess
    ///
    /// The length is checked on the trimmed input, then the guess is folded,
    /// so "LÁPIS" plays as "lapis".
    ///
    /// # Errors
    ///
    /// Returns a `GuessError` when the guess is rejected or the game has
    /// already ended. A rejected guess does not count as an attempt.
    #[instrument(skip(self))]
    pub fn submit(&mut self, raw: &str) -> Result<Turn, GuessError> {
        if self.status != GameStatus::InProgress {
            return Err(GuessError::GameOver);
        }

        let len = raw.trim().chars().count();
        if len != WORD_LENGTH {
            return Err(GuessError::InvalidGuessLength {
                expected: WORD_LENGTH,
                got: len,
            });
        }

        // Only letters pass; the board and keyboard index by a-z
        let guess = Word::new(fold_word(raw)).map_err(|_| GuessError::InvalidCharacters)?;

        if let Some(words) = self.dictionary
            && !words.contains(&guess)
        {
            return Err(GuessError::NotInWordList(guess.text().to_string()));
        }

        let feedback = Feedback::calculate(&guess, &self.secret);
        let turn = Turn {
            attempt: self.history.len() + 1,
            guess,
            feedback,
        };
        self.history.push(turn.clone());

        if feedback.is_perfect() {
            self.status = GameStatus::Won;
        } else if self.history.len() >= self.max_attempts {
            self.status = GameStatus::Lost;
        }

        debug!(
            guess = %turn.guess,
            feedback = %feedback.to_emoji(),
            status = ?self.status,
            "Scored guess"
        );
        Ok(turn)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Number of scored guesses so far
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Best grade seen so far for every guessed letter
    ///
    /// Exact beats present beats absent; used to color the keyboard.
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<u8, LetterFeedback> {
        let mut states: FxHashMap<u8, LetterFeedback> = FxHashMap::default();
        for turn in &self.history {
            for (&letter, &grade) in turn.guess.chars().iter().zip(turn.feedback.letters()) {
                states
                    .entry(letter)
                    .and_modify(|best| *best = (*best).max(grade))
                    .or_insert(grade);
            }
        }
        states
    }
}
