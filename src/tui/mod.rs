//! Terminal UI for ninecell.

mod app;
mod input;
mod orchestrator;
mod players;
mod ui;

use crate::game::{GameSession, Player, Seat, Strategy};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use orchestrator::{GameEvent, Orchestrator};
use players::{ComputerPlayer, HumanPlayer, PlayerDriver, SharedInput};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{error, info};

/// Runs the interactive game in the terminal.
///
/// Keys: arrows move the cursor, Enter or 1-9 place a mark, `r` restarts a
/// finished game, `q` quits.
pub async fn run_tui(players: [Player; 2], strategies: [Strategy; 2]) -> Result<()> {
    // Log to a file so the subscriber does not fight the terminal UI.
    let log_file = std::fs::File::create("ninecell_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting ninecell TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, players, strategies).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// What ended a single game's UI loop.
enum LoopOutcome {
    Quit,
    Restart,
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    players: [Player; 2],
    strategies: [Strategy; 2],
) -> Result<()> {
    loop {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let input_rx: SharedInput = Arc::new(Mutex::new(input_rx));

        let session = GameSession::new("tui", players.clone(), strategies)?;
        let mut app = App::new(session.clone());

        let first = driver_for(session.player(Seat::First), strategies[0], &input_rx);
        let second = driver_for(session.player(Seat::Second), strategies[1], &input_rx);

        let mut orchestrator = Orchestrator::new(session, first, second, event_tx);
        let task = tokio::spawn(async move { orchestrator.run().await });

        let outcome = game_loop(terminal, &mut app, &mut event_rx, &input_tx).await;
        task.abort();

        match outcome? {
            LoopOutcome::Quit => return Ok(()),
            LoopOutcome::Restart => continue,
        }
    }
}

fn driver_for(player: &Player, strategy: Strategy, input: &SharedInput) -> Box<dyn PlayerDriver> {
    if strategy.is_computer() {
        Box::new(ComputerPlayer::new(player.name()))
    } else {
        Box::new(HumanPlayer::new(player.name(), Arc::clone(input)))
    }
}

async fn game_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
    input_tx: &mpsc::UnboundedSender<usize>,
) -> Result<LoopOutcome> {
    loop {
        while let Ok(game_event) = event_rx.try_recv() {
            app.handle_event(game_event);
        }

        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(LoopOutcome::Quit),
                KeyCode::Char('r') if app.is_over() => return Ok(LoopOutcome::Restart),
                KeyCode::Enter if app.awaiting_human() => {
                    let _ = input_tx.send(app.cursor());
                }
                KeyCode::Char(c) if c.is_ascii_digit() && app.awaiting_human() => {
                    if let Some(digit) = c.to_digit(10) {
                        if (1..=9).contains(&digit) {
                            let _ = input_tx.send(digit as usize - 1);
                        }
                    }
                }
                code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                    app.move_cursor(code);
                }
                _ => {}
            }
        }
    }
}
