//! Players and seats.

use super::board::Mark;
use serde::{Deserialize, Serialize};

/// One of the two places at the table.
///
/// The seat is the turn index: it alternates after every committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The seat that moves first.
    First,
    /// The seat that moves second.
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into per-seat arrays.
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant in a game: a display name and the mark they place.
///
/// The board never references players; win detection takes a player's mark
/// as a parameter and checks it against board contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// The mark this player places on the board.
    mark: Mark,
}

impl Player {
    /// Creates a new player.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
        }
    }

    /// The player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}
