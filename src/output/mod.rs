//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_normalize_report, print_score};
pub use formatters::FeedbackStyle;
