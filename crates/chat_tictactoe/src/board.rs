//! The 3x3 tic-tac-toe board.

use crate::error::GameError;
use crate::rules;
use crate::types::{Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Places `mark` at `index`, returning the new board.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IndexOutOfRange`] if `index > 8` and
    /// [`GameError::CellOccupied`] if the cell already holds a mark.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&self, index: usize, mark: Player) -> Result<Board, GameError> {
        match self.get(index) {
            None => Err(GameError::IndexOutOfRange { index }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = Cell::from(mark);
                Ok(next)
            }
            Some(_) => Err(GameError::CellOccupied { index }),
        }
    }

    /// Evaluates the board: win, draw or still in progress.
    pub fn evaluate(&self) -> Outcome {
        rules::evaluate(self)
    }

    /// Indices of cells nobody has played yet, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of occupied cells.
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index].owner() {
                    Some(player) => write!(f, "{}", player.symbol())?,
                    None => write!(f, "{}", index)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_returns_new_board() {
        let board = Board::new();
        let next = board.place(4, Player::MarkA).unwrap();
        assert_eq!(next.get(4), Some(Cell::MarkA));
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert_eq!(next.mark_count(), 1);
    }

    #[test]
    fn test_place_occupied_fails() {
        let board = Board::new().place(0, Player::MarkA).unwrap();
        assert_eq!(
            board.place(0, Player::MarkB),
            Err(GameError::CellOccupied { index: 0 })
        );
    }

    #[test]
    fn test_place_out_of_range_fails() {
        assert_eq!(
            Board::new().place(9, Player::MarkA),
            Err(GameError::IndexOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_empty_cells_skips_occupied() {
        let board = Board::new()
            .place(0, Player::MarkA)
            .and_then(|b| b.place(8, Player::MarkB))
            .unwrap();
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_display_grid() {
        let board = Board::new()
            .place(0, Player::MarkA)
            .and_then(|b| b.place(4, Player::MarkB))
            .unwrap();
        assert_eq!(board.to_string(), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_display_numbers_match_place_indices() {
        let shown = Board::new().to_string();
        let top_center = shown.lines().next().unwrap().split('|').nth(1).unwrap();
        let index: usize = top_center.parse().unwrap();

        let board = Board::new().place(index, Player::MarkA).unwrap();
        assert_eq!(board.get(1), Some(Cell::MarkA));
        assert_eq!(board.get(0), Some(Cell::Empty));
        assert!(board.to_string().starts_with("0|X|2"));
    }
}
