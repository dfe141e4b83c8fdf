//! TUI application state and logic

use super::rendering::{key_at, pack_at, screen_layout};
use crate::core::{GameSession, GuessOutcome, Letter};
use crate::output::formatters::describe_outcome;
use crate::packs::PuzzleSet;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
        MouseButton, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;

/// Application state
pub struct App {
    pub puzzles: PuzzleSet,
    pub pack_index: usize,
    pub session: GameSession,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub show_help: bool,
    revealed_announced: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(puzzles: PuzzleSet) -> Self {
        let session = GameSession::new(puzzles.first().clone());

        Self {
            puzzles,
            pack_index: 0,
            session,
            messages: vec![
                Message {
                    text: "Welcome! Uncover the ladder one letter at a time.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters to guess, TAB or 1-9 to switch pack".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            show_help: false,
            revealed_announced: false,
        }
    }

    /// Switch to the pack at `index`, resetting the session
    pub fn select_pack(&mut self, index: usize) {
        if let Some(pack) = self.puzzles.get(index) {
            self.pack_index = index;
            self.session.select_pack(pack.clone());
            self.revealed_announced = false;
            let text = format!("Switched to {}", pack.name());
            self.add_message(&text, MessageStyle::Info);
        } else {
            self.add_message(
                &format!("There are only {} packs", self.puzzles.len()),
                MessageStyle::Error,
            );
        }
    }

    pub fn next_pack(&mut self) {
        self.select_pack((self.pack_index + 1) % self.puzzles.len());
    }

    /// Handle a key press on the on-screen keyboard
    ///
    /// Keys for letters already used on this row are disabled and ignored.
    pub fn press_key(&mut self, ch: char) {
        let letter = match Letter::new(ch) {
            Ok(letter) => letter,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if self.session.is_letter_used(letter) {
            return;
        }

        let outcome = self.session.guess_letter(letter);
        let text = describe_outcome(outcome, letter, self.session.current_row());
        let style = match outcome {
            GuessOutcome::Advanced | GuessOutcome::Scored => MessageStyle::Success,
            GuessOutcome::Missed => MessageStyle::Error,
            GuessOutcome::Accepted => MessageStyle::Info,
        };
        self.add_message(&text, style);

        if self.session.is_board_revealed() && !self.revealed_announced {
            self.revealed_announced = true;
            self.add_message(
                "🎉 Ladder uncovered! Keep guessing or TAB for the next pack",
                MessageStyle::Success,
            );
        }
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

    /// Dispatch one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('?') => {
                self.show_help = !self.show_help;
            }
            KeyCode::Tab => {
                self.next_pack();
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits are 1-based pack numbers
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1)) {
                    self.select_pack(index);
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.press_key(c);
            }
            _ => {}
        }
    }

    /// Dispatch a left click on a screen of size `area`
    ///
    /// Clicks on the on-screen keyboard guess, clicks on a pack tab select
    /// it, and any click closes the help popup.
    pub fn handle_click(&mut self, area: Rect, column: u16, row: u16) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        let layout = screen_layout(area);
        if let Some(ch) = key_at(layout.keyboard, column, row) {
            self.press_key(ch);
        } else if let Some(index) = pack_at(&self.puzzles, layout.tabs, column, row) {
            self.select_pack(index);
        }
    }
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.handle_key(key.code, key.modifiers);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                app.handle_click(
                    Rect::new(0, 0, size.width, size.height),
                    mouse.column,
                    mouse.row,
                );
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
