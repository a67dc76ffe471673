//! Line rules shared by sub-boards and the meta-board.
//!
//! Rules are pure functions over a 3x3 grid, separated from board
//! storage so the cached statuses can always be checked against a
//! fresh scan.

use super::{GameStatus, LineMark};

/// The 8 winning triples, as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Scans a 3x3 grid for its status.
///
/// The first triple holding three equal closed values decides the
/// grid. A grid with no such triple and no open slot is drawn.
pub fn scan_lines<T: LineMark>(cells: &[T; 9]) -> GameStatus {
    for [a, b, c] in LINES {
        let mark = cells[a];
        if !mark.is_open() && mark == cells[b] && mark == cells[c] {
            return mark.as_status();
        }
    }

    if is_full(cells) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

/// Checks if no slot of the grid can change anymore.
pub fn is_full<T: LineMark>(cells: &[T; 9]) -> bool {
    cells.iter().all(|c| !c.is_open())
}
