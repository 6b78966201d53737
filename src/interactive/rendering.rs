//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the guessing game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterFeedback, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 TERMO 🟨")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn grade_style(grade: LetterFeedback) -> Style {
    let bg = match grade {
        LetterFeedback::Exact => Color::Green,
        LetterFeedback::Present => Color::Yellow,
        LetterFeedback::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn tile(letter: char, style: Style) -> [Span<'static>; 2] {
    [
        Span::styled(format!(" {} ", letter.to_ascii_uppercase()), style),
        Span::raw(" "),
    ]
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let empty = Style::default().fg(Color::DarkGray);
    let typing = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from("")];
    for row in 0..session.max_attempts() {
        let spans: Vec<Span> = if let Some(turn) = session.history().get(row) {
            turn.guess
                .chars()
                .iter()
                .zip(turn.feedback.letters())
                .flat_map(|(&letter, &grade)| tile(char::from(letter), grade_style(grade)))
                .collect()
        } else if row == session.attempts() && app.input_mode == InputMode::Guessing {
            let typed: Vec<char> = app.input_buffer.chars().collect();
            (0..WORD_LENGTH)
                .flat_map(|i| typed.get(i).map_or(tile('·', empty), |&c| tile(c, typing)))
                .collect()
        } else {
            (0..WORD_LENGTH).flat_map(|_| tile('·', empty)).collect()
        };
        lines.push(Line::from(spans).alignment(Alignment::Center));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let states = app.session.letter_states();
    let unused = Style::default().fg(Color::White);

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|key| {
                    let style = states.get(&key).map_or(unused, |&grade| grade_style(grade));
                    [
                        Span::styled(char::from(key).to_ascii_uppercase().to_string(), style),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans).alignment(Alignment::Center)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type your guess | Enter to submit | Esc to quit ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let attempts_text = format!(
        "Attempts left: {}/{}",
        app.session.remaining_attempts(),
        app.session.max_attempts()
    );
    f.render_widget(
        Paragraph::new(attempts_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Enter: Submit | Backspace: Delete | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WordList;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn ui_renders_board_and_keyboard() {
        let words = WordList::new(words_from_slice(&["roupa"]));
        let mut app = App::new(&words, false, StdRng::seed_from_u64(1)).unwrap();
        for c in "lapis".chars() {
            app.push_char(c);
        }
        app.submit_guess();

        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content.iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Board"));
        assert!(text.contains("Keyboard"));
        assert!(text.contains("Attempts left: 5/6"));
    }
}
