//! Score command
//!
//! Grades one guess against a given secret without starting a game.

use crate::core::{Feedback, Word, WordError};
use crate::normalize::fold_word;

/// Fold and validate both words, then grade `guess` against `secret`
///
/// # Errors
///
/// Returns a `WordError` if either word is not five letters a-z after folding.
///
/// # Examples
/// ```
/// use termo::commands::score_words;
///
/// let (guess, feedback) = score_words("Roupa", "APOIO").unwrap();
/// assert_eq!(guess.text(), "apoio");
/// assert_eq!(feedback.to_emoji(), "🟨🟨🟨⬜⬜");
/// ```
pub fn score_words(secret: &str, guess: &str) -> Result<(Word, Feedback), WordError> {
    let secret = Word::new(fold_word(secret))?;
    let guess = Word::new(fold_word(guess))?;
    let feedback = Feedback::calculate(&guess, &secret);
    Ok((guess, feedback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_folds_accents() {
        let (guess, feedback) = score_words("lápis", "LÁPIS").unwrap();
        assert_eq!(guess.text(), "lapis");
        assert!(feedback.is_perfect());
    }

    #[test]
    fn score_rejects_bad_length() {
        assert_eq!(
            score_words("roupa", "rapido"),
            Err(WordError::InvalidLength(6))
        );
    }
}
