//! Ninecell - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{BotKind, Cli, Command, GameMode};
use ninecell::{GameConfig, sim, tui};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            first_mark,
            second_mark,
            config,
        } => run_play(mode, first_mark, second_mark, config).await,
        Command::Sim {
            games,
            first,
            second,
            json,
        } => run_sim(games, first, second, json),
    }
}

/// Run the terminal UI
async fn run_play(
    mode: GameMode,
    first_mark: Option<char>,
    second_mark: Option<char>,
    config_path: PathBuf,
) -> Result<()> {
    let mut config = if config_path.exists() {
        GameConfig::from_file(&config_path)?
    } else {
        GameConfig::default()
    };
    config.override_marks(first_mark, second_mark);

    let players = config.players()?;
    tui::run_tui(players, mode.strategies()).await
}

/// Run the headless simulator
fn run_sim(games: u32, first: BotKind, second: BotKind, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!(games, ?first, ?second, "Starting simulation");

    let players = GameConfig::default().players()?;
    let report = sim::run(games, players, [first.strategy(), second.strategy()])?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
