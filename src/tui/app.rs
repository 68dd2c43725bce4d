//! Application state and logic.

use super::orchestrator::GameEvent;
use crate::game::{GameSession, GameStatus, Seat, Strategy};
use crossterm::event::KeyCode;
use tracing::{debug, warn};

/// Main application state: a mirror of the live session plus UI concerns.
///
/// The orchestrator owns the real session; the UI applies the move events
/// it receives to its own copy and renders from that.
pub struct App {
    session: GameSession,
    cursor: usize,
    status_message: String,
}

impl App {
    /// Creates the UI state for a fresh game.
    pub fn new(session: GameSession) -> Self {
        let status_message = format!(
            "{}'s turn. Arrows + Enter or 1-9 to place a mark.",
            session.player(Seat::First).name()
        );
        Self {
            session,
            cursor: 4,
            status_message,
        }
    }

    /// The mirrored session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Cell the cursor is on (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Checks if the mirrored game has ended.
    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Checks if a human seat is to move.
    pub fn awaiting_human(&self) -> bool {
        match self.session.status() {
            GameStatus::AwaitingMove(seat) => self.session.strategy(seat) == Strategy::Human,
            _ => false,
        }
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = super::input::move_cursor(self.cursor, key);
    }

    /// Applies an orchestrator event to the mirror.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MoveMade { seat, index } => {
                let name = self.session.player(seat).name().to_string();
                if let Err(err) = self.session.play(index) {
                    warn!(%err, "Mirror rejected an orchestrator move");
                    self.status_message = format!("Move error: {}", err);
                    return;
                }
                self.status_message = match self.session.status() {
                    GameStatus::AwaitingMove(next) => format!(
                        "{} played cell {}. {}'s turn.",
                        name,
                        index + 1,
                        self.session.player(next).name()
                    ),
                    _ => format!("{} played cell {}.", name, index + 1),
                };
            }
            GameEvent::Thinking { name } => {
                self.status_message = format!("{} is thinking...", name);
            }
            GameEvent::Rejected { index } => {
                self.status_message = format!("Cell {} is taken. Try another.", index + 1);
            }
            GameEvent::GameOver { status } => {
                self.status_message = match status {
                    GameStatus::Won(seat) => format!(
                        "{} wins! Press 'r' to restart or 'q' to quit.",
                        self.session.player(seat).name()
                    ),
                    GameStatus::Draw => {
                        "It's a draw! Press 'r' to restart or 'q' to quit.".to_string()
                    }
                    GameStatus::AwaitingMove(seat) => {
                        format!("{}'s turn.", self.session.player(seat).name())
                    }
                };
            }
        }
    }
}
