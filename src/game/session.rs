//! Game sessions: the turn state machine around a board.

use super::board::{Board, Mark};
use super::player::{Player, Seat};
use super::strategy::Strategy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Where a session stands in its lifecycle.
///
/// `AwaitingMove` carries the seat whose move is expected; `Won` and `Draw`
/// are terminal; no further moves are accepted until [`GameSession::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// The given seat is to move.
    AwaitingMove(Seat),
    /// The given seat completed a winning line.
    Won(Seat),
    /// The board filled up with no winner.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }
}

/// Errors that can occur when committing a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The index does not name a cell.
    #[display("Cell index {} is out of bounds (0-8)", _0)]
    OutOfBounds(usize),

    /// The game has already ended.
    #[display("The game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Errors that can occur when assembling a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Both players chose the same mark.
    #[display("Both players use the mark '{}'", _0)]
    DuplicateMark(Mark),
}

impl std::error::Error for SessionError {}

/// A single game between two players.
///
/// Each session is an explicitly constructed value owning its own board and
/// per-seat strategies, so any number of sessions can coexist and tearing
/// one down is just dropping it.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: SessionId,
    board: Board,
    players: [Player; 2],
    strategies: [Strategy; 2],
    status: GameStatus,
}

impl GameSession {
    /// Creates a new session. The first seat moves first.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateMark`] if both players chose the
    /// same mark.
    #[instrument(skip(id, players, strategies))]
    pub fn new(
        id: impl Into<SessionId>,
        players: [Player; 2],
        strategies: [Strategy; 2],
    ) -> Result<Self, SessionError> {
        let id = id.into();
        if players[0].mark() == players[1].mark() {
            warn!(mark = %players[0].mark(), "Players share a mark");
            return Err(SessionError::DuplicateMark(players[0].mark()));
        }
        info!(session_id = %id, "Creating new game session");
        Ok(Self {
            id,
            board: Board::new(),
            players,
            strategies,
            status: GameStatus::AwaitingMove(Seat::First),
        })
    }

    /// The session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where the session stands.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The player at the given seat.
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// The strategy driving the given seat.
    pub fn strategy(&self, seat: Seat) -> Strategy {
        self.strategies[seat.index()]
    }

    /// The seat to move, if the game is still running.
    pub fn current_seat(&self) -> Option<Seat> {
        match self.status {
            GameStatus::AwaitingMove(seat) => Some(seat),
            _ => None,
        }
    }

    /// The player to move, if the game is still running.
    pub fn current_player(&self) -> Option<&Player> {
        self.current_seat().map(|seat| self.player(seat))
    }

    /// Checks if the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winning player, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(seat) => Some(self.player(seat)),
            _ => None,
        }
    }

    /// Commits a move at `index` for the seat currently to move.
    ///
    /// This is the single commit path for every move, human or computer.
    /// A rejected move changes nothing: the caller may simply ask again.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the session is already decided.
    /// - [`MoveError::OutOfBounds`] if `index` is not in `0..9`.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        let seat = match self.status {
            GameStatus::AwaitingMove(seat) => seat,
            _ => {
                warn!("Move attempted after game end");
                return Err(MoveError::GameOver);
            }
        };

        if index >= Board::CELLS {
            warn!(index, "Move index out of bounds");
            return Err(MoveError::OutOfBounds(index));
        }

        if !self.board.cell(index).is_empty() {
            debug!(index, "Rejecting move on occupied cell");
            return Err(MoveError::CellOccupied(index));
        }

        let mark = self.player(seat).mark();
        self.board.update_cell(index, mark);
        self.evaluate_round(seat);

        info!(index, ?seat, status = ?self.status, "Move committed");
        Ok(())
    }

    /// Settles the round after `seat` placed a mark: win, draw, or the
    /// other seat's turn.
    fn evaluate_round(&mut self, seat: Seat) {
        let state = self.board.snapshot();
        if Board::has_won(&state, self.player(seat)).is_some() {
            self.status = GameStatus::Won(seat);
        } else if Board::is_full(&state) {
            self.status = GameStatus::Draw;
        } else {
            self.status = GameStatus::AwaitingMove(seat.opponent());
        }
    }

    /// Asks the current seat's strategy for a move.
    ///
    /// Returns `None` for a human seat (moves arrive via [`Self::play`])
    /// and once the game has ended.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn suggest_move(&self) -> Option<usize> {
        let seat = self.current_seat()?;
        let state = self.board.snapshot();
        self.strategies[seat.index()].choose_move(
            &state,
            self.player(seat),
            self.player(seat.opponent()),
        )
    }

    /// Clears the board for a fresh game with the same players.
    #[instrument(skip(self), fields(session_id = %self.id))]
    pub fn reset(&mut self) {
        info!("Resetting session");
        self.board.clear();
        self.status = GameStatus::AwaitingMove(Seat::First);
    }
}
