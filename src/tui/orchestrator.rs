//! Game orchestration between player drivers.

use super::players::PlayerDriver;
use crate::game::{GameSession, GameStatus, MoveError, Seat};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A move was committed.
    MoveMade {
        /// Seat that moved.
        seat: Seat,
        /// Cell that was taken.
        index: usize,
    },
    /// A computer player is deliberating.
    Thinking {
        /// Name of the thinking player.
        name: String,
    },
    /// A proposed move was rejected; the same player is asked again.
    Rejected {
        /// Cell that was refused.
        index: usize,
    },
    /// The game reached a terminal state.
    GameOver {
        /// The final status.
        status: GameStatus,
    },
}

/// Orchestrates gameplay between two player drivers.
///
/// Owns the live session; the UI observes through [`GameEvent`]s.
pub struct Orchestrator {
    session: GameSession,
    first: Box<dyn PlayerDriver>,
    second: Box<dyn PlayerDriver>,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        first: Box<dyn PlayerDriver>,
        second: Box<dyn PlayerDriver>,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            session,
            first,
            second,
            events,
        }
    }

    /// Runs the game to completion.
    pub async fn run(&mut self) -> Result<()> {
        info!(session_id = %self.session.id(), "Starting game orchestration");

        loop {
            let seat = match self.session.status() {
                GameStatus::AwaitingMove(seat) => seat,
                status => {
                    info!(?status, "Game over");
                    self.events.send(GameEvent::GameOver { status })?;
                    return Ok(());
                }
            };

            if self.session.strategy(seat).is_computer() {
                self.events.send(GameEvent::Thinking {
                    name: self.session.player(seat).name().to_string(),
                })?;
            }

            let driver = match seat {
                Seat::First => &mut self.first,
                Seat::Second => &mut self.second,
            };

            debug!(player = driver.name(), "Waiting for move");
            let index = driver.next_move(&self.session).await?;

            match self.session.play(index) {
                Ok(()) => self.events.send(GameEvent::MoveMade { seat, index })?,
                Err(MoveError::CellOccupied(index)) => {
                    // No state change; the same seat is asked again.
                    warn!(index, "Occupied cell proposed");
                    self.events.send(GameEvent::Rejected { index })?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
