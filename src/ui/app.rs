use crate::config::UiConfig;
use crate::game::{GameEngine, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io::{self, Write};

use super::game_view;

const BELL: &[u8] = b"\x07";

pub struct App {
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    bell_pending: bool,
    ui: UiConfig,
}

impl App {
    pub fn new(ui: UiConfig) -> Self {
        App {
            engine: GameEngine::new(),
            selected_column: 0,
            should_quit: false,
            message: None,
            bell_pending: false,
            ui,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Main application loop
    pub fn run<B: Backend + Write>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.take_bell() {
                let backend = terminal.backend_mut();
                backend.write_all(BELL)?;
                Write::flush(backend)?;
            }

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < COLS {
                    self.selected_column = column;
                }
                self.drop_token(column);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_token(self.selected_column);
            }
            KeyCode::Char('n') | KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = 0;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the current player's token, recording feedback for the view
    fn drop_token(&mut self, column: usize) {
        let column = isize::try_from(column).unwrap_or(isize::MAX);
        match self.engine.try_drop_token(column) {
            Ok(_) => {
                self.message = self.engine.winner().map(game_view::outcome_text);
            }
            Err(err) => {
                self.message = Some(game_view::rejection_text(&err));
                self.bell_pending = self.ui.bell_on_invalid;
            }
        }
    }

    /// Whether a rejected move is waiting to ring the bell. Clears the flag.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        game_view::render(
            frame,
            &self.engine,
            self.selected_column,
            &self.message,
            &self.ui,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(UiConfig::default())
    }
}
