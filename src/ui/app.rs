use crate::config::UiConfig;
use crate::game::{GameEngine, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Translates key presses into engine commands and redraws from a fresh
/// snapshot after each one.
pub struct App {
    engine: GameEngine,
    selected_column: usize,
    tick_rate: Duration,
    highlight_last_move: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        App {
            engine: GameEngine::new(),
            selected_column: config.initial_column.min(COLS - 1),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            highlight_last_move: config.highlight_last_move,
            should_quit: false,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_at(self.selected_column);
            }
            // Columns are labelled from 1 on screen.
            KeyCode::Char(c @ '1'..='9') => {
                self.drop_at(c as usize - '1' as usize);
            }
            KeyCode::Char('u') | KeyCode::Backspace => {
                self.engine.undo();
            }
            KeyCode::Char('r') => {
                self.engine.restart();
            }
            _ => {}
        }
    }

    fn drop_at(&mut self, column: usize) {
        // Rejections are kept in the engine's error slot and shown from there.
        if let Ok(Some(record)) = self.engine.drop_piece(column) {
            self.selected_column = record.column;
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine.snapshot(),
            self.selected_column,
            self.highlight_last_move,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&UiConfig::default())
    }
}
