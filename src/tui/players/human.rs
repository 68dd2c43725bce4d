//! Human player fed by the keyboard.

use super::{PlayerDriver, SharedInput};
use crate::game::GameSession;
use anyhow::Result;

/// Human player reading cell indices translated by the UI loop.
pub struct HumanPlayer {
    name: String,
    input: SharedInput,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: SharedInput) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

#[async_trait::async_trait]
impl PlayerDriver for HumanPlayer {
    async fn next_move(&mut self, _session: &GameSession) -> Result<usize> {
        let mut input = self.input.lock().await;
        match input.recv().await {
            Some(index) => Ok(index),
            None => anyhow::bail!("Input channel closed"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
