//! Termo word representation
//!
//! A Word is a validated five-letter, lowercase, accent-free word.

use derive_more::Display;
use rustc_hash::FxHashMap;
use std::fmt;

/// Number of letters in every Termo word
pub const WORD_LENGTH: usize = 5;

/// A five-letter Termo word
///
/// Stores the word both as text and as a byte array for feedback calculation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum WordError {
    #[display("Word must be exactly 5 letters, got {_0}")]
    InvalidLength(usize),
    #[display("Word must contain only the letters a-z")]
    InvalidCharacters,
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// The text is lowercased but not folded: accented input is rejected here,
    /// callers strip diacritics first with [`crate::normalize::fold_word`].
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5 characters
    /// - Contains anything other than `a-z`
    ///
    /// # Examples
    /// ```
    /// use termo::core::Word;
    ///
    /// let word = Word::new("LAPIS").unwrap();
    /// assert_eq!(word.text(), "lapis");
    ///
    /// assert!(Word::new("rapido").is_err());
    /// assert!(Word::new("l4pis").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        // Count characters, not bytes, so "lápis" reports 5
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(WordError::InvalidLength(len));
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidCharacters)?;

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used by feedback calculation so each secret letter is claimed once.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("lapis").unwrap();
        assert_eq!(word.text(), "lapis");
        assert_eq!(word.chars(), b"lapis");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("ROUPA").unwrap();
        assert_eq!(word.text(), "roupa");

        let word2 = Word::new("RoUpA").unwrap();
        assert_eq!(word2.text(), "roupa");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("rapido"),
            Err(WordError::InvalidLength(6))
        ));
        assert!(matches!(Word::new("casa"), Err(WordError::InvalidLength(4))));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // Five characters, six bytes: length passes, the accent does not
        assert_eq!(Word::new("lápis"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("rou3a").is_err()); // Number
        assert!(Word::new("rou a").is_err()); // Space
        assert!(Word::new("guard-").is_err()); // Wrong length and hyphen
        assert_eq!(Word::new("bem-t"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("roupa").unwrap();
        assert_eq!(word.char_at(0), b'r');
        assert_eq!(word.char_at(4), b'a');
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("arara").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts.get(&b'a'), Some(&3));
        assert_eq!(counts.get(&b'r'), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words = vec![
            Word::new("zebra").unwrap(),
            Word::new("abrir").unwrap(),
            Word::new("lapis").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["abrir", "lapis", "zebra"]);
    }

    #[test]
    fn word_display() {
        let word = Word::new("lapis").unwrap();
        assert_eq!(format!("{word}"), "lapis");
    }

    #[test]
    fn word_error_display() {
        assert_eq!(
            WordError::InvalidLength(6).to_string(),
            "Word must be exactly 5 letters, got 6"
        );
    }
}
