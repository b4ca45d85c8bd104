//! Application state and logic.

use crate::input;
use crate::ui;
use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tactix_core::{Engine, GameRng, MoveError, Outcome, Position, StartRule};
use tracing::debug;

/// Main application state: the engine plus everything the frontend
/// layers on top (cursor, status line).
pub struct App {
    engine: Engine,
    cursor: Position,
    status: String,
}

impl App {
    /// Creates a new application with the given opening policy.
    pub fn new(rule: StartRule, rng: GameRng) -> Self {
        let engine = Engine::with_rule(rule, rng);
        let status = format!("Player {} opens. Pick a square.", engine.turn());
        Self {
            engine,
            cursor: Position::Center,
            status,
        }
    }

    /// The engine, for rendering.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Handles a key press (quit keys are handled by the caller).
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                // Digits follow the on-screen numbering, row-major from 1.
                if let Some(pos) = Position::from_index(c as usize - '1' as usize) {
                    self.cursor = pos;
                    self.select(pos);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    /// Handles a left click at terminal coordinates.
    pub fn handle_click(&mut self, column: u16, row: u16, screen: Rect) {
        if let Some(pos) = input::hit_test(column, row, ui::board_area(screen)) {
            self.cursor = pos;
            self.select(pos);
        }
    }

    /// Plays the current turn's mark at the position and updates the
    /// status line from the engine's verdict.
    fn select(&mut self, pos: Position) {
        let mover = self.engine.turn();

        match self.engine.apply(pos) {
            Ok(Outcome::InProgress) => {
                debug!(%mover, position = %pos, "move accepted");
                self.status = format!(
                    "{} played {}. Player {} to move.",
                    mover,
                    pos.label(),
                    self.engine.turn()
                );
            }
            Ok(Outcome::Win(winner)) => {
                self.status =
                    format!("Player {} wins! Press 'r' for a new round or 'q' to quit.", winner);
            }
            Ok(Outcome::Draw) => {
                self.status =
                    "It's a draw! Press 'r' for a new round or 'q' to quit.".to_string();
            }
            Err(MoveError::SquareOccupied(taken)) => {
                debug!(position = %taken, "square already taken");
                self.status = format!(
                    "{} is taken. Player {} to move.",
                    taken.label(),
                    self.engine.turn()
                );
            }
            Err(MoveError::GameOver) => {
                self.status = "Round is over. Press 'r' for a new round.".to_string();
            }
            Err(err) => {
                self.status = err.to_string();
            }
        }
    }

    /// Starts a new round.
    pub fn restart(&mut self) {
        debug!("restarting round");
        self.engine.reset(None);
        self.cursor = Position::Center;
        self.status = format!("New round. Player {} opens.", self.engine.turn());
    }
}
