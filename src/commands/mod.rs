//! Command implementations

pub mod normalize;
pub mod play;
pub mod score;

pub use normalize::{NormalizeConfig, run_normalize};
pub use play::{PlayConfig, load_words, make_rng, run_play, run_tui_play};
pub use score::score_words;
