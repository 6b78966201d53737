//! Termo - CLI
//!
//! Normalizes a raw word list and plays a five-letter guessing game against it.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use termo::{
    commands::{NormalizeConfig, PlayConfig, run_normalize, run_play, run_tui_play, score_words},
    game::GameOptions,
    output::{FeedbackStyle, print_score},
    wordlists::{RAW_WORDS_FILE, WORDS_FILE},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "termo",
    about = "Five-letter word list normalizer and terminal guessing game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the clean five-letter list from a raw word list
    Normalize {
        /// Raw word list, one word per line
        #[arg(short, long, default_value = RAW_WORDS_FILE)]
        input: PathBuf,

        /// Destination for the normalized list (overwritten)
        #[arg(short, long, default_value = WORDS_FILE)]
        output: PathBuf,

        /// Hide the progress spinner
        #[arg(short, long)]
        quiet: bool,
    },

    /// Play in the terminal (default)
    Play {
        #[command(flatten)]
        game: GameArgs,

        /// Show emoji squares instead of colored letters
        #[arg(long)]
        symbols: bool,

        /// Print the secret word before the first guess
        #[arg(long)]
        reveal: bool,
    },

    /// Play in the full-screen TUI
    Tui {
        #[command(flatten)]
        game: GameArgs,
    },

    /// Grade one guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to grade
        guess: String,

        /// Show emoji squares instead of colored letters
        #[arg(long)]
        symbols: bool,
    },
}

#[derive(Args, Default)]
struct GameArgs {
    /// Normalized word list to draw the secret from
    #[arg(short, long, default_value = WORDS_FILE)]
    words: PathBuf,

    /// Seed for a reproducible secret word
    #[arg(long)]
    seed: Option<u64>,

    /// Only accept guesses that are in the word list
    #[arg(long)]
    strict: bool,
}

impl GameArgs {
    fn into_config(self, options: GameOptions) -> PlayConfig {
        PlayConfig {
            words: self.words,
            seed: self.seed,
            strict: self.strict,
            options,
        }
    }
}

const fn feedback_style(symbols: bool) -> FeedbackStyle {
    if symbols {
        FeedbackStyle::Symbols
    } else {
        FeedbackStyle::Colors
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        game: GameArgs {
            words: PathBuf::from(WORDS_FILE),
            ..GameArgs::default()
        },
        symbols: false,
        reveal: false,
    });

    match command {
        Commands::Normalize {
            input,
            output,
            quiet,
        } => {
            let config = NormalizeConfig {
                input,
                output,
                progress: !quiet,
            };
            run_normalize(&config)?;
            Ok(())
        }
        Commands::Play {
            game,
            symbols,
            reveal,
        } => {
            let options = GameOptions {
                style: feedback_style(symbols),
                reveal,
            };
            run_play(&game.into_config(options))?;
            Ok(())
        }
        Commands::Tui { game } => run_tui_play(&game.into_config(GameOptions::default())),
        Commands::Score {
            secret,
            guess,
            symbols,
        } => {
            let (guess, feedback) = score_words(&secret, &guess)?;
            print_score(&guess, &feedback, feedback_style(symbols));
            Ok(())
        }
    }
}
