//! Tests for the optimal strategy's play guarantees.

use ninecell::{GameSession, GameStatus, Mark, Player, Seat, Strategy};

fn players() -> [Player; 2] {
    [
        Player::new("Player X", Mark::new('X').unwrap()),
        Player::new("Player O", Mark::new('O').unwrap()),
    ]
}

fn session(strategies: [Strategy; 2]) -> GameSession {
    GameSession::new("test", players(), strategies).unwrap()
}

/// Walks every line of play the adversary seat can produce; the optimal
/// seat answers through the strategy engine. Panics if the adversary ever
/// wins a game.
fn assert_never_loses(session: &GameSession, optimal: Seat) {
    match session.status() {
        GameStatus::Won(seat) => {
            assert_eq!(seat, optimal, "the optimal side lost a game");
        }
        GameStatus::Draw => {}
        GameStatus::AwaitingMove(seat) if seat == optimal => {
            let mut next = session.clone();
            let index = next.suggest_move().expect("move available on open board");
            next.play(index).unwrap();
            assert_never_loses(&next, optimal);
        }
        GameStatus::AwaitingMove(_) => {
            // The adversary tries every legal move.
            for index in 0..9 {
                if session.board().cell(index).is_empty() {
                    let mut next = session.clone();
                    next.play(index).unwrap();
                    assert_never_loses(&next, optimal);
                }
            }
        }
    }
}

#[test]
fn optimal_moving_first_never_loses() {
    let session = session([Strategy::Optimal, Strategy::Human]);
    assert_never_loses(&session, Seat::First);
}

#[test]
fn optimal_moving_second_never_loses() {
    let session = session([Strategy::Human, Strategy::Optimal]);
    assert_never_loses(&session, Seat::Second);
}

#[test]
fn optimal_self_play_ends_in_a_draw() {
    let mut session = session([Strategy::Optimal, Strategy::Optimal]);

    while !session.is_over() {
        let index = session.suggest_move().expect("open board");
        session.play(index).unwrap();
    }

    assert_eq!(session.status(), GameStatus::Draw);
    assert!(session.winner().is_none());
    assert!(
        session
            .board()
            .snapshot()
            .iter()
            .all(|cell| !cell.is_empty())
    );
}

#[test]
fn opening_choice_is_stable() {
    let session = session([Strategy::Optimal, Strategy::Optimal]);
    let first = session.suggest_move();
    assert_eq!(first, Some(0));
    for _ in 0..3 {
        assert_eq!(session.suggest_move(), first);
    }
}

#[test]
fn optimal_takes_a_presented_win() {
    // X on 0, 1, 3, 4 and O on 2, 5 with X to move: cells 6 and 7 both
    // complete a line for X, and the engine keeps the lower index. Cell 6
    // finishes the 0-3-6 column.
    let [x, o] = players();
    let mut board = ninecell::Board::new();
    for &index in &[0, 1, 3, 4] {
        board.update_cell(index, x.mark());
    }
    for &index in &[2, 5] {
        board.update_cell(index, o.mark());
    }

    assert_eq!(
        Strategy::Optimal.choose_move(&board.snapshot(), &x, &o),
        Some(6)
    );
}

#[test]
fn optimal_wins_when_the_opponent_slips() {
    // A random first seat will eventually hand the minimax seat a win.
    let mut wins = 0;
    for game in 0..50 {
        let mut session = GameSession::new(
            format!("slip-{}", game),
            players(),
            [Strategy::Random, Strategy::Optimal],
        )
        .unwrap();
        while !session.is_over() {
            let index = session.suggest_move().expect("open board");
            session.play(index).unwrap();
        }
        // The minimax seat never loses...
        assert_ne!(session.status(), GameStatus::Won(Seat::First));
        if session.status() == GameStatus::Won(Seat::Second) {
            wins += 1;
        }
    }
    // ...and converts at least one blunder across 50 games.
    assert!(wins > 0);
}
