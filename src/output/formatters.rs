//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterFeedback, Word};
use colored::Colorize;

/// How feedback is drawn on a plain terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackStyle {
    /// Uppercase letters colored green, yellow or gray
    #[default]
    Colors,
    /// An emoji square before each letter, for terminals without color
    Symbols,
}

/// Format one guessed letter with its grade
#[must_use]
pub fn format_letter(letter: u8, grade: LetterFeedback, style: FeedbackStyle) -> String {
    let letter = char::from(letter).to_ascii_uppercase().to_string();
    match style {
        FeedbackStyle::Colors => match grade {
            LetterFeedback::Exact => letter.bright_green().bold().to_string(),
            LetterFeedback::Present => letter.bright_yellow().bold().to_string(),
            LetterFeedback::Absent => letter.bright_black().to_string(),
        },
        FeedbackStyle::Symbols => format!("{} {letter}", grade.to_emoji()),
    }
}

/// Format a whole guess, letters separated by spaces
#[must_use]
pub fn format_feedback(guess: &Word, feedback: &Feedback, style: FeedbackStyle) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.letters())
        .map(|(&letter, &grade)| format_letter(letter, grade, style))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line explanation of the symbols
#[must_use]
pub fn legend(style: FeedbackStyle) -> String {
    match style {
        FeedbackStyle::Colors => format!(
            "Feedback: {} = correct position, {} = letter exists, {} = letter absent",
            "GREEN".bright_green().bold(),
            "YELLOW".bright_yellow().bold(),
            "GRAY".bright_black()
        ),
        FeedbackStyle::Symbols => format!(
            "Feedback: {}=Correct Position, {}=Letter Exists, {}=Letter Absent",
            LetterFeedback::Exact.to_emoji(),
            LetterFeedback::Present.to_emoji(),
            LetterFeedback::Absent.to_emoji()
        ),
    }
}
