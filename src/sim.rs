//! Headless bot-vs-bot simulation.

use crate::game::{GameSession, GameStatus, Player, Seat, Strategy};
use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Tally of outcomes across a batch of simulated games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimReport {
    /// Number of games played.
    pub games: u32,
    /// Wins for the first seat.
    pub first_wins: u32,
    /// Wins for the second seat.
    pub second_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for SimReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} games", self.games)?;
        writeln!(f, "  first seat wins:  {}", self.first_wins)?;
        writeln!(f, "  second seat wins: {}", self.second_wins)?;
        write!(f, "  draws:            {}", self.draws)
    }
}

/// Plays `games` computer-vs-computer games and tallies the outcomes.
///
/// Every game runs through the same session commit path the interactive
/// front end uses: ask the current seat's strategy, play the answer.
///
/// # Errors
///
/// Fails if either strategy is [`Strategy::Human`], or if a strategy
/// produces no move on an open board.
#[instrument(skip(players))]
pub fn run(games: u32, players: [Player; 2], strategies: [Strategy; 2]) -> Result<SimReport> {
    if strategies.iter().any(|strategy| !strategy.is_computer()) {
        bail!("Simulation requires computer strategies for both seats");
    }

    let mut report = SimReport {
        games,
        first_wins: 0,
        second_wins: 0,
        draws: 0,
    };

    for game in 0..games {
        let mut session = GameSession::new(format!("sim-{}", game), players.clone(), strategies)?;
        loop {
            match session.status() {
                GameStatus::AwaitingMove(_) => {
                    let index = session
                        .suggest_move()
                        .context("Strategy produced no move on an open board")?;
                    session.play(index)?;
                }
                GameStatus::Won(Seat::First) => {
                    report.first_wins += 1;
                    break;
                }
                GameStatus::Won(Seat::Second) => {
                    report.second_wins += 1;
                    break;
                }
                GameStatus::Draw => {
                    report.draws += 1;
                    break;
                }
            }
        }
        debug!(game, board = %session.board().display(), "Game finished");
    }

    info!(
        first_wins = report.first_wins,
        second_wins = report.second_wins,
        draws = report.draws,
        "Simulation complete"
    );
    Ok(report)
}
