//! TUI application state and logic

use crate::core::{Symbol, WORD_LEN};
use crate::dictionary::Dictionary;
use crate::engine::Outcome;
use crate::store::{KeyValueStore, Session};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long transient banners stay on screen
const MESSAGE_TTL: Duration = Duration::from_secs(2);

/// Application state
pub struct App<'a, S: KeyValueStore> {
    pub session: Session<S>,
    pub dictionary: &'a Dictionary,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Entry,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    created: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: KeyValueStore> App<'a, S> {
    #[must_use]
    pub fn new(session: Session<S>, dictionary: &'a Dictionary) -> Self {
        let input_mode = if session.game().in_progress() {
            InputMode::Entry
        } else {
            InputMode::GameOver
        };

        let mut app = Self {
            session,
            dictionary,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
            input_mode,
        };

        if app.input_mode == InputMode::GameOver {
            app.add_message("Today's game is already finished.", MessageStyle::Info);
        } else {
            app.add_message(
                "Type a symbol, Space for the next one, Enter to submit.",
                MessageStyle::Info,
            );
        }
        app
    }

    /// Append one character of the symbol being typed
    ///
    /// Symbols are at most four characters, so extra input is dropped.
    pub fn push_char(&mut self, c: char) {
        if self.input_buffer.len() < 4 && (c.is_ascii_alphanumeric() || c == '-') {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Commit the pending token as the next board symbol
    pub fn commit_token(&mut self) {
        if self.input_buffer.is_empty() {
            return;
        }
        let token = std::mem::take(&mut self.input_buffer);
        match Symbol::new(&token) {
            Ok(symbol) => self.session.select_symbol(symbol),
            Err(err) => self.add_message(&format!("{token:?}: {err}"), MessageStyle::Error),
        }
    }

    /// Backspace: trim the pending token, else the last committed symbol
    pub fn delete_backwards(&mut self) {
        if self.input_buffer.pop().is_none() {
            self.session.delete_symbol();
        }
    }

    /// Commit any pending token, then submit the row
    pub fn submit(&mut self) {
        self.commit_token();

        match self.session.submit(self.dictionary) {
            Ok(success) => {
                self.add_message(
                    &format!("{} ({})", success.word.jyutping(), success.word.gloss()),
                    MessageStyle::Success,
                );
                match success.outcome {
                    Outcome::Won(row) => {
                        self.input_mode = InputMode::GameOver;
                        let celebration = match row {
                            0 => "🏆 一次過! Incredible!",
                            1 => "⭐ 勁! Two guesses!",
                            2 => "💫 好嘢! Three guesses!",
                            3 => "✨ 唔錯! Four guesses!",
                            4 => "👍 過關! Five guesses!",
                            _ => "😅 好險! Got it in six!",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.add_message("Press 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::Lost => {
                        self.input_mode = InputMode::GameOver;
                        self.add_message(
                            &format!("答案係 {}", self.session.game().answer()),
                            MessageStyle::Error,
                        );
                        self.add_message("Press 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::InProgress => {}
                }
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Toggle the hard-mode replay constraint
    pub fn toggle_hard_mode(&mut self) {
        let enabled = !self.session.game().hard_mode();
        self.session.set_hard_mode(enabled);
        self.add_message(
            if enabled { "Hard mode ON" } else { "Hard mode OFF" },
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            created: Instant::now(),
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Drop expired transient banners; plain info lines stay
    pub fn prune_messages(&mut self) {
        let now = Instant::now();
        self.messages.retain(|msg| {
            msg.style == MessageStyle::Info || now.duration_since(msg.created) < MESSAGE_TTL
        });
    }

    /// Whether the current row has all six symbols entered
    #[must_use]
    pub fn row_full(&self) -> bool {
        self.session.game().cursor().entry == WORD_LEN
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        app.prune_messages();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so expired banners clear without waiting for a key
        if event::poll(Duration::from_millis(200))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    _ => {
                        // In game-over mode, ignore other keys
                    }
                },
                InputMode::Entry => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        if app.input_buffer.is_empty() {
                            app.should_quit = true;
                        } else {
                            app.input_buffer.clear();
                        }
                    }
                    KeyCode::Tab => {
                        app.toggle_hard_mode();
                    }
                    KeyCode::Char(' ') => {
                        app.commit_token();
                    }
                    KeyCode::Char(c) => {
                        app.push_char(c);
                    }
                    KeyCode::Backspace => {
                        app.delete_backwards();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
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
