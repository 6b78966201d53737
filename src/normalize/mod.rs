//! Word list normalizer
//!
//! Turns a raw, mixed-case, accented list into the clean list the game loads.

mod fold;
mod pipeline;

pub use fold::{fold_word, normalize_word};
pub use pipeline::{NormalizeReport, NormalizedWords, normalize_file, normalize_words, write_words};
