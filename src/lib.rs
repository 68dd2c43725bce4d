//! Ninecell - terminal tic-tac-toe with an unbeatable opponent.
//!
//! The library half holds the rules engine (board, win and draw detection),
//! the strategy engine (human, random, and exhaustive minimax opponents),
//! and the session state machine. The binary half wraps them in a clap CLI
//! with a ratatui front end and a headless simulator.
//!
//! # Example
//!
//! ```
//! use ninecell::{GameSession, Mark, Player, Strategy};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let players = [
//!     Player::new("Ada", Mark::new('X')?),
//!     Player::new("Grace", Mark::new('O')?),
//! ];
//! let mut session = GameSession::new("demo", players, [Strategy::Human, Strategy::Optimal])?;
//!
//! session.play(4)?; // Ada takes the center
//! let reply = session.suggest_move(); // minimax answers for Grace
//! assert!(reply.is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;

// Front ends
pub mod sim;
pub mod tui;

// Crate-level exports - configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - game types
pub use game::{
    Board, Cell, GameSession, GameStatus, InvalidMark, Mark, MoveError, Player, Seat,
    SessionError, SessionId, Strategy,
};

// Crate-level exports - simulation
pub use sim::SimReport;
