//! Tests for the session lifecycle through the public API.

use ninecell::{GameSession, GameStatus, Mark, MoveError, Player, Seat, Strategy};

fn players() -> [Player; 2] {
    [
        Player::new("Player X", Mark::new('X').unwrap()),
        Player::new("Player O", Mark::new('O').unwrap()),
    ]
}

fn pvp_session() -> GameSession {
    GameSession::new("test", players(), [Strategy::Human, Strategy::Human]).unwrap()
}

#[test]
fn full_game_to_a_win() {
    let mut session = pvp_session();

    // X: 0, 1, 2 (top row). O: 3, 4.
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }

    assert_eq!(session.status(), GameStatus::Won(Seat::First));
    assert_eq!(session.winner().map(Player::name), Some("Player X"));
    assert!(session.is_over());
}

#[test]
fn full_game_to_a_draw() {
    let mut session = pvp_session();

    for index in [0, 4, 2, 1, 3, 5, 7, 6, 8] {
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
fn occupied_cell_is_a_no_op() {
    let mut session = pvp_session();
    session.play(4).unwrap();

    let board = session.board().clone();
    let status = session.status();

    assert_eq!(session.play(4), Err(MoveError::CellOccupied(4)));
    assert_eq!(session.board(), &board);
    assert_eq!(session.status(), status);
}

#[test]
fn finished_game_rejects_further_moves() {
    let mut session = pvp_session();
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }

    assert_eq!(session.play(8), Err(MoveError::GameOver));
    assert_eq!(session.status(), GameStatus::Won(Seat::First));
}

#[test]
fn snapshot_mutations_never_reach_the_live_board() {
    let mut session = pvp_session();
    session.play(0).unwrap();

    let mut snapshot = session.board().snapshot();
    snapshot[8].set(Mark::new('Z').unwrap());
    snapshot[0].clear();

    assert!(session.board().cell(8).is_empty());
    assert_eq!(
        session.board().cell(0).mark(),
        Some(Mark::new('X').unwrap())
    );

    let mut copy = session.board().cell(4);
    copy.set(Mark::new('Z').unwrap());
    assert!(session.board().cell(4).is_empty());
}

#[test]
fn reset_starts_a_fresh_game() {
    let mut session = pvp_session();
    for index in [0, 3, 1, 4, 2] {
        session.play(index).unwrap();
    }

    session.reset();

    assert_eq!(session.status(), GameStatus::AwaitingMove(Seat::First));
    assert!(session.board().snapshot().iter().all(|cell| cell.is_empty()));
    session.play(4).unwrap();
    assert_eq!(session.status(), GameStatus::AwaitingMove(Seat::Second));
}

#[test]
fn random_opponent_only_plays_empty_cells() {
    let mut session =
        GameSession::new("test", players(), [Strategy::Human, Strategy::Random]).unwrap();

    // Drive the human seat along a fixed scan; the random seat answers.
    let mut human_moves = 0..9;
    while !session.is_over() {
        match session.status() {
            GameStatus::AwaitingMove(Seat::First) => {
                let index = human_moves
                    .find(|&index| session.board().cell(index).is_empty())
                    .expect("open cell for the human");
                session.play(index).unwrap();
            }
            GameStatus::AwaitingMove(Seat::Second) => {
                let index = session.suggest_move().expect("open board");
                assert!(session.board().cell(index).is_empty());
                session.play(index).unwrap();
            }
            _ => unreachable!(),
        }
    }
}
