//! TUI rendering with ratatui
//!
//! Board, guessed-symbol, and statistics panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Tag, WORD_LEN};
use crate::engine::{Outcome, ROWS};
use crate::store::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let header = Paragraph::new(format!("🀄 粵拼 WORDLE — {}", app.session.date()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tag_style(tag: Tag) -> Style {
    match tag {
        Tag::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        Tag::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        Tag::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let game = app.session.game();
    let cursor = game.cursor();
    let mut lines = vec![Line::from("")];

    for row in 0..ROWS {
        let evaluation = game.evaluations()[row];
        let mut spans = vec![Span::raw("  ")];

        for position in 0..WORD_LEN {
            let is_cursor_cell = game.in_progress()
                && row == cursor.row
                && position == cursor.entry;

            let text = if is_cursor_cell && !app.input_buffer.is_empty() {
                format!(" {:<4} ", app.input_buffer)
            } else {
                match game.cell(row, position) {
                    Some(symbol) => format!(" {:<4} ", symbol.as_str()),
                    None => " ···· ".to_string(),
                }
            };

            let style = match evaluation.map(|tags| tags[position]) {
                Some(tag) => tag_style(tag),
                None if is_cursor_cell => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::UNDERLINED),
                None if row == cursor.row => {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                }
                None => Style::default().fg(Color::DarkGray),
            };

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
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

fn render_side_panel<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Guessed symbols
            Constraint::Percentage(30), // Statistics
            Constraint::Percentage(30), // Messages
        ])
        .split(area);

    render_guessed(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_guessed<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let guessed = app.session.game().guessed();

    let mut correct: Vec<&str> = Vec::new();
    let mut present: Vec<&str> = Vec::new();
    let mut absent: Vec<&str> = Vec::new();
    for (symbol, tag) in guessed.iter() {
        match tag {
            Tag::Correct => correct.push(symbol.as_str()),
            Tag::Present => present.push(symbol.as_str()),
            Tag::Absent => absent.push(symbol.as_str()),
        }
    }
    for group in [&mut correct, &mut present, &mut absent] {
        group.sort_unstable();
    }

    let content = vec![
        Line::from(vec![
            Span::styled("啱位:     ", Style::default().fg(Color::Green)),
            Span::styled(correct.join(" "), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled("有但錯位: ", Style::default().fg(Color::Yellow)),
            Span::styled(present.join(" "), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(vec![
            Span::styled("冇:       ", Style::default().fg(Color::DarkGray)),
            Span::styled(absent.join(" "), Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Guessed Symbols ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_statistics<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = app.session.statistics();
    let content = vec![
        Line::from(format!(
            "Played: {}   Win %: {}",
            stats.games_played, stats.win_percentage
        )),
        Line::from(format!(
            "Streak: {}   Max: {}",
            stats.current_streak, stats.max_streak
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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

fn render_input<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => match app.session.game().outcome() {
            Outcome::Won(_) => (" 🎉 贏咗! | Press 'q' to quit ", String::new(), Color::Green),
            _ => (
                " 遊戲結束 | Press 'q' to quit ",
                format!("答案係 {}", app.session.game().answer()),
                Color::Red,
            ),
        },
        InputMode::Entry => (
            " Enter symbol | Space: commit | Enter: submit row ",
            app.input_buffer.clone(),
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

fn render_status<S: KeyValueStore>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let game = app.session.game();
    let row_text = match game.outcome() {
        Outcome::InProgress => format!("Row: {}/{ROWS}", game.cursor().row + 1),
        Outcome::Won(row) => format!("Won on row {}", row + 1),
        Outcome::Lost => "Lost".to_string(),
    };
    let row = Paragraph::new(row_text).alignment(Alignment::Center);
    f.render_widget(row, chunks[0]);

    let mode_text = if game.hard_mode() {
        "Hard mode: ON"
    } else {
        "Hard mode: off"
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[1]);

    let help_text = if app.row_full() {
        "Enter: submit | Backspace: delete | Esc: quit"
    } else {
        "Space: commit symbol | Tab: hard mode | Esc: quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
