//! Case and diacritic folding for single words

use crate::core::WORD_LENGTH;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Fold a raw line into its comparable form
///
/// Trims surrounding whitespace, lowercases, decomposes to NFD and drops the
/// combining marks, so "Ação" becomes "acao".
///
/// # Examples
/// ```
/// use termo::normalize::fold_word;
///
/// assert_eq!(fold_word("  Lápis\r\n"), "lapis");
/// assert_eq!(fold_word("PÊSSEGO"), "pessego");
/// ```
#[must_use]
pub fn fold_word(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect()
}

/// Fold a raw line and keep it only if it is a valid five-letter word
///
/// The length is checked on the trimmed line before folding; the folded
/// result must then be plain `a-z`.
#[must_use]
pub fn normalize_word(raw: &str) -> Option<String> {
    if raw.trim().chars().count() != WORD_LENGTH {
        return None;
    }
    let folded = fold_word(raw);
    folded
        .bytes()
        .all(|b| b.is_ascii_lowercase())
        .then_some(folded)
}
