//! Exhaustive adversarial search.
//!
//! The search explores the full remaining game tree over a single simulated
//! copy of the board: each branch places a mark, recurses, and removes the
//! mark again before the next sibling runs. With only nine cells the tree is
//! small enough that no pruning or depth limit is needed.

use super::super::board::{Board, Cell};
use super::super::player::Player;
use tracing::{debug, instrument};

/// Computes the move that maximizes `player`'s worst-case outcome, assuming
/// `opponent` also plays optimally.
///
/// Candidates are evaluated in index order and ties keep the earlier index,
/// so the result is deterministic for a given board. Returns `None` when the
/// board is full or already decided.
#[instrument(skip(state), fields(player = %player.mark(), opponent = %opponent.mark()))]
pub(crate) fn best_move(state: &[Cell; 9], player: &Player, opponent: &Player) -> Option<usize> {
    if Board::has_won(state, player).is_some() || Board::has_won(state, opponent).is_some() {
        return None;
    }

    let mut arena = *state;
    let mut best: Option<(usize, i8)> = None;

    for index in 0..arena.len() {
        if !arena[index].is_empty() {
            continue;
        }
        arena[index].set(player.mark());
        let value = score(&mut arena, player, opponent, false);
        arena[index].clear();

        // Strict comparison: the first index reaching the maximum wins.
        if best.map_or(true, |(_, high)| value > high) {
            best = Some((index, value));
        }
    }

    let chosen = best.map(|(index, _)| index);
    debug!(?chosen, "Search complete");
    chosen
}

/// Scores a simulated state. `maximizing` is true when `player` (the side
/// the search solves for) is to move in this state.
///
/// Terminal values: +1 if `player` has won, -1 if `opponent` has won, 0 for
/// a full board with no winner. No depth shaping.
fn score(arena: &mut [Cell; 9], player: &Player, opponent: &Player, maximizing: bool) -> i8 {
    if Board::has_won(&arena[..], player).is_some() {
        return 1;
    }
    if Board::has_won(&arena[..], opponent).is_some() {
        return -1;
    }
    if Board::is_full(&arena[..]) {
        return 0;
    }

    if maximizing {
        let mut high = i8::MIN;
        for index in 0..arena.len() {
            if arena[index].is_empty() {
                arena[index].set(player.mark());
                high = high.max(score(arena, player, opponent, false));
                arena[index].clear();
            }
        }
        high
    } else {
        let mut low = i8::MAX;
        for index in 0..arena.len() {
            if arena[index].is_empty() {
                arena[index].set(opponent.mark());
                low = low.min(score(arena, player, opponent, true));
                arena[index].clear();
            }
        }
        low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Mark;

    fn mark(symbol: char) -> Mark {
        Mark::new(symbol).unwrap()
    }

    fn players() -> (Player, Player) {
        (Player::new("X", mark('X')), Player::new("O", mark('O')))
    }

    #[test]
    fn opening_move_is_deterministic() {
        let (x, o) = players();
        let board = Board::new();
        let first = best_move(&board.snapshot(), &x, &o);
        assert_eq!(first, Some(0));
        assert_eq!(best_move(&board.snapshot(), &x, &o), first);
        assert_eq!(best_move(&board.snapshot(), &x, &o), first);
    }

    #[test]
    fn takes_an_immediate_win() {
        // X on 0,1,3,4 and O on 2,5: cells 6 and 7 both win for X, and the
        // tie-break keeps the lower index. 6 completes the 0-3-6 column.
        let (x, o) = players();
        let mut board = Board::new();
        for &index in &[0, 1, 3, 4] {
            board.update_cell(index, x.mark());
        }
        for &index in &[2, 5] {
            board.update_cell(index, o.mark());
        }
        assert_eq!(best_move(&board.snapshot(), &x, &o), Some(6));
    }

    #[test]
    fn blocks_an_immediate_loss() {
        // O threatens 0-1-2; the only non-losing reply for X is cell 2.
        let (x, o) = players();
        let mut board = Board::new();
        for &index in &[4, 8] {
            board.update_cell(index, x.mark());
        }
        for &index in &[0, 1] {
            board.update_cell(index, o.mark());
        }
        assert_eq!(best_move(&board.snapshot(), &x, &o), Some(2));
    }

    #[test]
    fn search_leaves_the_snapshot_untouched() {
        let (x, o) = players();
        let mut board = Board::new();
        board.update_cell(4, x.mark());
        board.update_cell(0, o.mark());
        let state = board.snapshot();
        best_move(&state, &o, &x);
        assert_eq!(state, board.snapshot());
    }

    #[test]
    fn no_move_on_a_decided_state() {
        let (x, o) = players();
        let mut board = Board::new();
        for &index in &[0, 4, 8] {
            board.update_cell(index, x.mark());
        }
        assert_eq!(best_move(&board.snapshot(), &x, &o), None);
        assert_eq!(best_move(&board.snapshot(), &o, &x), None);
    }
}
