//! Player drivers: where moves come from.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::game::GameSession;
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

/// Shared handle to the keyboard input channel.
///
/// Both seats may be human (player-vs-player), so the receiver is shared
/// and whichever driver is asked for a move holds the lock.
pub type SharedInput = Arc<Mutex<mpsc::UnboundedReceiver<usize>>>;

/// Trait for drivers that produce moves.
#[async_trait::async_trait]
pub trait PlayerDriver: Send {
    /// Produces the cell index (0-8) for the next move.
    async fn next_move(&mut self, session: &GameSession) -> Result<usize>;

    /// The player's display name.
    fn name(&self) -> &str;
}
