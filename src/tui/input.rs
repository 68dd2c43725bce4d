//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cell cursor one step in the arrow direction, staying on the
/// 3x3 grid.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    row * 3 + col
}
