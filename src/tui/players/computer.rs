//! Computer player backed by the session's strategy engine.

use super::PlayerDriver;
use crate::game::GameSession;
use anyhow::{Context, Result};
use tracing::debug;

/// Computer player that asks the session's strategy for a move.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait::async_trait]
impl PlayerDriver for ComputerPlayer {
    async fn next_move(&mut self, session: &GameSession) -> Result<usize> {
        debug!(ai = %self.name, "Computer choosing move");

        // Small delay so the move reads as a distinct step on screen.
        tokio::time::sleep(std::time::Duration::from_millis(400)).await;

        let index = session
            .suggest_move()
            .context("No move available for the computer")?;
        debug!(ai = %self.name, index, "Computer chose cell");
        Ok(index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
