//! Move selection for computer opponents.
//!
//! The three variants are interchangeable: the session loop asks the active
//! strategy for a move without caring which one is behind it. The human
//! variant computes nothing; its moves arrive externally through
//! [`GameSession::play`](super::session::GameSession::play).

mod minimax;
mod random;

use super::board::{Board, Cell};
use super::player::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a seat's moves are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Moves are supplied externally (keyboard, UI).
    Human,
    /// Any currently-empty cell, chosen uniformly.
    Random,
    /// Exhaustive minimax search. Never loses.
    Optimal,
}

impl Strategy {
    /// Chooses the next move for `player` on the given board snapshot.
    ///
    /// Returns `None` when the board is full or already decided, and always
    /// for [`Strategy::Human`]. Any returned index points at a cell that was
    /// empty in `state`.
    #[instrument(skip(state), fields(player = %player.mark(), opponent = %opponent.mark()))]
    pub fn choose_move(
        &self,
        state: &[Cell; 9],
        player: &Player,
        opponent: &Player,
    ) -> Option<usize> {
        if Board::has_won(state, player).is_some()
            || Board::has_won(state, opponent).is_some()
            || Board::is_full(state)
        {
            debug!("No move: board is full or already decided");
            return None;
        }

        match self {
            Strategy::Human => None,
            Strategy::Random => random::choose(state),
            Strategy::Optimal => minimax::best_move(state, player, opponent),
        }
    }

    /// Checks if this strategy computes its own moves.
    pub fn is_computer(&self) -> bool {
        !matches!(self, Strategy::Human)
    }
}
