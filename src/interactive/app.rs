//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameStatus, MAX_ATTEMPTS, Session};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info};

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub strict: bool,
    pub session: Session<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    rng: StdRng,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// Returns `None` if the word list is empty.
    pub fn new(words: &'a WordList, strict: bool, mut rng: StdRng) -> Option<Self> {
        let session = new_session(words, strict, &mut rng)?;

        Some(Self {
            words,
            strict,
            session,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!(
                    "Welcome! Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries."
                ),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            rng,
        })
    }

    pub fn push_char(&mut self, c: char) {
        if !c.is_alphabetic() || self.input_buffer.chars().count() >= WORD_LENGTH {
            return;
        }
        // One key, one tile: 'İ' lowercases to two code points
        if let Some(lower) = c.to_lowercase().next() {
            self.input_buffer.push(lower);
        }
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
    }

    pub fn submit_guess(&mut self) {
        match self.session.submit(&self.input_buffer) {
            Ok(turn) => {
                self.input_buffer.clear();
                match self.session.status() {
                    GameStatus::Won => {
                        self.finish_game(true);
                        let celebration = match turn.attempt {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::Lost => {
                        self.finish_game(false);
                        let reveal = format!(
                            "Out of attempts! The word was {}",
                            self.session.secret().text().to_uppercase()
                        );
                        self.add_message(&reveal, MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    GameStatus::InProgress => {
                        let left = self.session.remaining_attempts();
                        self.add_message(
                            &format!("{left} attempts remaining"),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish_game(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            self.stats.guess_distribution[self.session.attempts()] += 1;
        }
        self.input_mode = InputMode::GameOver;
        info!(won, attempts = self.session.attempts(), "TUI game finished");
    }

    pub fn new_game(&mut self) {
        if let Some(session) = new_session(self.words, self.strict, &mut self.rng) {
            self.session = session;
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

fn new_session<'a>(words: &'a WordList, strict: bool, rng: &mut StdRng) -> Option<Session<'a>> {
    let secret = words.choose(rng)?.clone();
    debug!(%secret, "Chose secret word");

    let session = Session::new(secret, MAX_ATTEMPTS);
    Some(if strict {
        session.with_dictionary(words)
    } else {
        session
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Esc => app.should_quit = true,
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => app.pop_char(),
                    KeyCode::Enter => app.submit_guess(),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit_guess();
    }

    #[test]
    fn new_app_starts_guessing() {
        let words = WordList::new(words_from_slice(&["roupa"]));
        let app = App::new(&words, false, StdRng::seed_from_u64(3)).unwrap();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.secret().text(), "roupa");
    }

    #[test]
    fn new_app_with_empty_list_is_none() {
        let words = WordList::default();
        assert!(App::new(&words, false, StdRng::seed_from_u64(3)).is_none());
    }

    #[test]
    fn input_buffer_is_capped_and_filtered() {
        let words = WordList::new(words_from_slice(&["roupa"]));
        let mut app = App::new(&words, false, StdRng::seed_from_u64(3)).unwrap();

        for c in "R0upas!x".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "rupas");

        app.pop_char();
        assert_eq!(app.input_buffer, "rupa");
    }

    #[test]
    fn multi_char_lowercase_fills_one_tile() {
        let words = WordList::new(words_from_slice(&["roupa"]));
        let mut app = App::new(&words, false, StdRng::seed_from_u64(3)).unwrap();

        for c in "abcdİ".chars() {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "abcdi");
        assert_eq!(app.input_buffer.chars().count(), WORD_LENGTH);
    }

    #[test]
    fn short_guess_keeps_attempts_and_reports_error() {
        let words = WordList::new(words_from_slice(&["roupa"]));
        let mut app = App::new(&words, false, StdRng::seed_from_u64(3)).unwrap();

        type_word(&mut app, "rou");

        assert_eq!(app.session.attempts(), 0);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn winning_updates_stats_and_new_game_resets() {
        let words = WordList::new(words_from_slice(&["roupa"]));
        let mut app = App::new(&words, false, StdRng::seed_from_u64(3)).unwrap();

        type_word(&mut app, "lapis");
        type_word(&mut app, "roupa");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!((app.stats.win_rate() - 100.0).abs() < f64::EPSILON);

        app.new_game();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn losing_reveals_secret() {
        let words = WordList::new(words_from_slice(&["roupa"]));
        let mut app = App::new(&words, false, StdRng::seed_from_u64(3)).unwrap();

        for guess in ["apoio", "lapis", "termo", "fumou", "zebra", "abrir"] {
            type_word(&mut app, guess);
        }

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("ROUPA")));
    }
}
