//! Termo
//!
//! A five-letter word list normalizer and a terminal word-guessing game.
//!
//! # Quick Start
//!
//! ```rust
//! use termo::core::{Feedback, Word};
//! use termo::normalize::normalize_words;
//!
//! // Clean a raw list
//! let clean = normalize_words("Lápis\nRápido\nROUPA\n");
//! assert_eq!(clean.words, ["lapis", "roupa"]);
//!
//! // Grade a guess
//! let guess = Word::new("apoio").unwrap();
//! let secret = Word::new("roupa").unwrap();
//! println!("{}", Feedback::calculate(&guess, &secret).to_emoji());
//! ```

// Core domain types
pub mod core;

// Fatal file errors
pub mod error;

// Word list normalizer
pub mod normalize;

// Word lists
pub mod wordlists;

// Game rules and text loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
