//! Game state machine: board, turn and outcome.

use crate::board::Board;
use crate::error::GameError;
use crate::types::{Outcome, Player};
use derive_getters::Getters;
use tracing::{debug, instrument};

/// A single tic-tac-toe game.
///
/// States are `InProgress(turn)`, `Won(player)` and `Draw`. The only
/// transition is [`Game::apply_move`]; `Won` and `Draw` are terminal.
/// After a terminal move `turn` keeps the last mover and carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Game {
    /// The board.
    board: Board,
    /// Player to move while the game is in progress.
    turn: Player,
    /// Current outcome, recomputed after every placement.
    outcome: Outcome,
}

impl Game {
    /// Creates a new game: empty board, crosses to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::MarkA,
            outcome: Outcome::InProgress,
        }
    }

    /// Places the current player's mark at `index` and returns the next game.
    ///
    /// `self` is left untouched, so a failed move has no effect.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyOver`] if the game was won or drawn
    /// - [`GameError::IndexOutOfRange`] / [`GameError::CellOccupied`] from
    ///   [`Board::place`]
    #[instrument(level = "debug", skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&self, index: usize) -> Result<Game, GameError> {
        if self.outcome.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let board = self.board.place(index, self.turn)?;
        let outcome = board.evaluate();
        let turn = match outcome {
            Outcome::InProgress => self.turn.opponent(),
            Outcome::Won(_) | Outcome::Draw => self.turn,
        };

        debug!(?outcome, next_turn = ?turn, "Move applied");
        Ok(Game {
            board,
            turn,
            outcome,
        })
    }

    /// Whether the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
