//! Core game model: board, players, rules, strategies, and sessions.

mod board;
mod player;
mod rules;
mod session;
mod strategy;

pub use board::{Board, Cell, InvalidMark, Mark};
pub use player::{Player, Seat};
pub use session::{GameSession, GameStatus, MoveError, SessionError, SessionId};
pub use strategy::Strategy;
