//! Errors returned by board, game and session operations.

use crate::store::SessionId;

/// Error that can occur when looking up a session or applying a move.
///
/// Every variant is recoverable and caller-facing. A failed operation
/// never changes the stored game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum GameError {
    /// No game exists for the session.
    #[display("No active game for session {}", session_id)]
    NotFound {
        /// The session that was looked up.
        session_id: SessionId,
    },

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", index)]
    CellOccupied {
        /// Requested cell.
        index: usize,
    },

    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    IndexOutOfRange {
        /// Requested cell.
        index: usize,
    },
}

impl GameError {
    /// Stable snake_case code for wire formats (`not_found`, `cell_occupied`, ...).
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

impl std::error::Error for GameError {}
