//! Termo feedback calculation and representation
//!
//! Each guessed letter is graded against the secret:
//! - Exact: same letter at the same position (green)
//! - Present: letter occurs elsewhere in the secret, unclaimed (yellow)
//! - Absent: no unclaimed occurrence left (gray)

use super::word::{WORD_LENGTH, Word};

/// Grade of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterFeedback {
    Absent,
    Present,
    Exact,
}

impl LetterFeedback {
    /// Emoji square for this grade
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a full guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters in place
    pub const PERFECT: Self = Self([LetterFeedback::Exact; WORD_LENGTH]);

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// Each occurrence of a letter in the secret can be claimed only once.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the available pool
    /// 2. Second pass, left to right: mark present letters while the pool has
    ///    an unclaimed occurrence, claiming it
    ///
    /// # Examples
    /// ```
    /// use termo::core::{Feedback, LetterFeedback::*, Word};
    ///
    /// let guess = Word::new("apoio").unwrap();
    /// let secret = Word::new("roupa").unwrap();
    /// let feedback = Feedback::calculate(&guess, &secret);
    ///
    /// assert_eq!(feedback.letters(), &[Present, Present, Present, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; WORD_LENGTH];
        let mut available = secret.letter_counts();

        // Allow: Index needed to compare guess[i] with secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == secret.char_at(i) {
                result[i] = LetterFeedback::Exact;
                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == LetterFeedback::Exact {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = LetterFeedback::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-letter grades, in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is exact
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count exact letters
    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.0
            .iter()
            .filter(|&&l| l == LetterFeedback::Exact)
            .count()
    }

    /// Count present-elsewhere letters
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0
            .iter()
            .filter(|&&l| l == LetterFeedback::Present)
            .count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|l| l.to_emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Absent, Exact, Present};
    use super::*;

    fn grade(guess: &str, secret: &str) -> [LetterFeedback; WORD_LENGTH] {
        let guess = Word::new(guess).unwrap();
        let secret = Word::new(secret).unwrap();
        *Feedback::calculate(&guess, &secret).letters()
    }

    #[test]
    fn feedback_perfect_constant() {
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.count_exact(), 5);
        assert_eq!(Feedback::PERFECT.count_present(), 0);
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(grade("fumou", "lapis"), [Absent; 5]);
    }

    #[test]
    fn feedback_same_word_is_perfect() {
        for word in ["roupa", "lapis", "arara", "aaaaa"] {
            let w = Word::new(word).unwrap();
            assert!(Feedback::calculate(&w, &w).is_perfect());
        }
    }

    #[test]
    fn feedback_repeated_guess_letter_claims_once() {
        // Only one 'o' in roupa: the first unmatched 'o' takes it
        assert_eq!(
            grade("apoio", "roupa"),
            [Present, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_exact_claims_before_present() {
        // The exact 'o' at position 1 consumes the only 'o', so the
        // earlier 'o' at position 0 is absent
        assert_eq!(
            grade("oorar", "roupa"),
            [Absent, Exact, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_repeated_secret_letters() {
        // arara has three 'a' and two 'r', none lined up with radar
        assert_eq!(
            grade("radar", "arara"),
            [Present, Present, Absent, Present, Present]
        );
    }

    #[test]
    fn feedback_counts() {
        // r in place; a, p and o elsewhere
        let guess = Word::new("rapto").unwrap();
        let secret = Word::new("roupa").unwrap();
        let feedback = Feedback::calculate(&guess, &secret);
        assert_eq!(feedback.count_exact(), 1);
        assert_eq!(feedback.count_present(), 3);
    }

    #[test]
    fn feedback_to_emoji() {
        let guess = Word::new("roxas").unwrap();
        let secret = Word::new("rosas").unwrap();
        assert_eq!(Feedback::calculate(&guess, &secret).to_emoji(), "🟩🟩⬜🟩🟩");
    }
}
