//! Core domain types for Termo
//!
//! Contains the fundamental types: words and feedback.

pub mod feedback;
pub mod word;

pub use feedback::{Feedback, LetterFeedback};
pub use word::{WORD_LENGTH, Word, WordError};
