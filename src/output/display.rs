//! Display functions for command results

use super::formatters::{FeedbackStyle, format_feedback};
use crate::core::{Feedback, Word};
use crate::normalize::NormalizeReport;
use colored::Colorize;
use std::path::Path;

/// Print the result of a normalizer run
pub fn print_normalize_report(report: &NormalizeReport, output: &Path) {
    println!(
        "Processing complete. {} unique 5-letter words found.",
        report.unique_words.to_string().bright_yellow().bold()
    );
    println!(
        "   Lines read:      {}\n   Lines kept:      {}\n   Duplicates:      {}",
        report.lines_read,
        report.lines_kept,
        report.lines_kept - report.unique_words
    );
    println!(
        "{}",
        format!("File '{}' created successfully!", output.display())
            .green()
            .bold()
    );
}

/// Print the feedback for a single scored guess
pub fn print_score(guess: &Word, feedback: &Feedback, style: FeedbackStyle) {
    println!("{}", format_feedback(guess, feedback, style));
    if feedback.is_perfect() {
        println!("{}", "✅ Perfect match!".green().bold());
    } else {
        println!(
            "   {} in place, {} elsewhere",
            feedback.count_exact(),
            feedback.count_present()
        );
    }
}
