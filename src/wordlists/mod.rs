//! Word lists for Termo
//!
//! The game plays against a sorted, deduplicated set of five-letter words
//! loaded from the normalizer's output file.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Default raw input read by the normalizer
pub const RAW_WORDS_FILE: &str = "palavras.txt";

/// Default normalized list written by the normalizer and read by the game
pub const WORDS_FILE: &str = "palavras_5letras.txt";

/// Sorted, duplicate-free list of words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Build a list, sorting and removing duplicates
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words in ascending order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Check whether `word` is in the list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(word).is_ok()
    }

    /// Pick a word uniformly at random
    ///
    /// Returns `None` only for an empty list.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words_from_slice(words))
    }

    #[test]
    fn word_list_sorts_and_dedupes() {
        let words = list(&["roupa", "lapis", "roupa", "abrir"]);
        let texts: Vec<&str> = words.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["abrir", "lapis", "roupa"]);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn word_list_contains() {
        let words = list(&["roupa", "lapis"]);
        assert!(words.contains(&Word::new("lapis").unwrap()));
        assert!(!words.contains(&Word::new("zebra").unwrap()));
    }

    #[test]
    fn choose_from_empty_list_is_none() {
        let words = WordList::default();
        assert!(words.is_empty());
        assert!(words.choose(&mut StdRng::seed_from_u64(1)).is_none());
    }

    #[test]
    fn choose_is_deterministic_for_a_seed() {
        let words = list(&["abrir", "lapis", "roupa", "zebra", "termo", "fumou"]);

        let first = words.choose(&mut StdRng::seed_from_u64(42)).cloned();
        let second = words.choose(&mut StdRng::seed_from_u64(42)).cloned();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn choose_always_returns_a_member() {
        let words = list(&["abrir", "lapis", "roupa"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pick = words.choose(&mut rng).unwrap();
            assert!(words.contains(pick));
        }
    }
}
