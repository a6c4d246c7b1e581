//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::Player;

/// The eight winning lines, checked in this order.
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

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line holding three equal marks,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let owner = cells[a].owner()?;
        (cells[a] == cells[b] && cells[b] == cells[c]).then_some(owner)
    })
}
