//! Random legal-move selection.

use super::super::board::Cell;
use rand::seq::SliceRandom;

/// Picks any currently-empty cell, uniformly at random.
///
/// Returns `None` when no cell is empty.
pub(crate) fn choose(state: &[Cell; 9]) -> Option<usize> {
    let open: Vec<usize> = state
        .iter()
        .filter(|cell| cell.is_empty())
        .map(Cell::index)
        .collect();
    open.choose(&mut rand::thread_rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{Board, Mark};

    #[test]
    fn chooses_the_only_open_cell() {
        let mark = Mark::new('X').unwrap();
        let mut board = Board::new();
        for index in 0..9 {
            if index != 5 {
                board.update_cell(index, mark);
            }
        }
        assert_eq!(choose(&board.snapshot()), Some(5));
    }

    #[test]
    fn none_when_no_cell_is_open() {
        let mark = Mark::new('X').unwrap();
        let mut board = Board::new();
        for index in 0..9 {
            board.update_cell(index, mark);
        }
        assert_eq!(choose(&board.snapshot()), None);
    }
}
