//! Word list loading utilities
//!
//! Provides functions to load the game's word list from a file.

use super::WordList;
use crate::core::Word;
use crate::error::{SourceError, read_source};
use crate::normalize::normalize_word;
use std::path::Path;
use tracing::{info, instrument, warn};

/// Load a word list from a file
///
/// Every line is folded the same way the normalizer folds it, so a raw list
/// works too; lines that do not yield a five-letter word are skipped.
///
/// # Errors
///
/// Returns `MissingInputFile`, `UnreadableEncoding` or `Io` if the file cannot
/// be read, and `EmptyWordList` if no line yields a valid word.
///
/// # Examples
/// ```no_run
/// use termo::wordlists::loader::load_from_file;
///
/// let words = load_from_file("palavras_5letras.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, SourceError> {
    let path = path.as_ref();
    let content = read_source(path)?;

    let mut skipped = 0usize;
    let words: Vec<Word> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let word = normalize_word(line).and_then(|w| Word::new(w).ok());
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .collect();

    if skipped > 0 {
        warn!(skipped, "Skipped lines that are not five-letter words");
    }

    let list = WordList::new(words);
    if list.is_empty() {
        return Err(SourceError::EmptyWordList(path.to_path_buf()));
    }

    info!(words = list.len(), "Loaded word list");
    Ok(list)
}

/// Convert a string slice to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use termo::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["roupa", "rapido", "lapis"]);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
