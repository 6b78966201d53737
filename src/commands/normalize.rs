//! Normalize command
//!
//! Turns the raw word list into the clean five-letter list the game reads.

use crate::error::SourceError;
use crate::normalize::{NormalizeReport, normalize_file};
use crate::output::print_normalize_report;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for a normalizer run
#[derive(Debug, Clone)]
pub struct NormalizeConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Show a spinner while working
    pub progress: bool,
}

/// Run the normalizer and print a summary
///
/// # Errors
///
/// Returns a `SourceError` if the input cannot be read or the output cannot
/// be written.
pub fn run_normalize(config: &NormalizeConfig) -> Result<NormalizeReport, SourceError> {
    println!("Reading file '{}'...", config.input.display());

    let spinner = if config.progress {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message("Normalizing words...");
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let result = normalize_file(&config.input, &config.output);
    spinner.finish_and_clear();

    let report = result?;
    print_normalize_report(&report, &config.output);
    Ok(report)
}
