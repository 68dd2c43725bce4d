//! Command-line interface for ninecell.

use clap::{Parser, Subcommand, ValueEnum};
use ninecell::Strategy;
use std::path::PathBuf;

/// Ninecell - terminal tic-tac-toe with an unbeatable opponent
#[derive(Parser, Debug)]
#[command(name = "ninecell")]
#[command(about = "Terminal tic-tac-toe with an unbeatable opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal UI
    Play {
        /// Who sits across the board
        #[arg(long, value_enum, default_value_t = GameMode::Impossible)]
        mode: GameMode,

        /// Mark symbol for the first seat (overrides the config file)
        #[arg(long)]
        first_mark: Option<char>,

        /// Mark symbol for the second seat (overrides the config file)
        #[arg(long)]
        second_mark: Option<char>,

        /// Path to a TOML file with player names and marks
        #[arg(long, default_value = "ninecell.toml")]
        config: PathBuf,
    },

    /// Run headless bot-vs-bot games and report the outcomes
    Sim {
        /// Number of games to play
        #[arg(long, default_value = "100")]
        games: u32,

        /// Strategy for the first seat
        #[arg(long, value_enum, default_value_t = BotKind::Optimal)]
        first: BotKind,

        /// Strategy for the second seat
        #[arg(long, value_enum, default_value_t = BotKind::Random)]
        second: BotKind,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Opponent selection for interactive play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameMode {
    /// Two humans sharing the keyboard
    Pvp,
    /// Human vs. a random-move computer
    Easy,
    /// Human vs. the minimax computer
    Impossible,
}

impl GameMode {
    /// Per-seat strategies for this mode. The human takes the first seat.
    pub fn strategies(self) -> [Strategy; 2] {
        match self {
            GameMode::Pvp => [Strategy::Human, Strategy::Human],
            GameMode::Easy => [Strategy::Human, Strategy::Random],
            GameMode::Impossible => [Strategy::Human, Strategy::Optimal],
        }
    }
}

/// Computer strategies available to the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BotKind {
    /// Any empty cell, uniformly at random
    Random,
    /// Exhaustive minimax search
    Optimal,
}

impl BotKind {
    /// The strategy behind this choice.
    pub fn strategy(self) -> Strategy {
        match self {
            BotKind::Random => Strategy::Random,
            BotKind::Optimal => Strategy::Optimal,
        }
    }
}
