//! Board keyboard and status text for chat replies.

use chat_tictactoe::{Cell, GameError, GameSnapshot, Player, SnapshotOutcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Label of an empty cell button.
pub const EMPTY_LABEL: &str = " ";
/// Label of a crosses cell button.
pub const CROSS_LABEL: &str = "❌";
/// Label of a noughts cell button.
pub const NOUGHT_LABEL: &str = "⭕";

/// One button of the board keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct KeyButton {
    /// Text shown on the button.
    label: String,
    /// Data sent back when the button is pressed: the cell index.
    callback_data: String,
}

/// Inline keyboard mirroring the board, three rows of three buttons.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Keyboard {
    /// Button rows, top to bottom.
    rows: Vec<Vec<KeyButton>>,
}

impl Keyboard {
    /// Builds the keyboard for a board.
    pub fn from_board(board: &[Cell; 9]) -> Self {
        let rows = board
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| {
                        KeyButton::new(
                            cell_label(*cell).to_string(),
                            (row * 3 + col).to_string(),
                        )
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { rows }
    }

    /// Builds the keyboard for a snapshot's board.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self::from_board(snapshot.board())
    }

    /// Plain-text grid; empty cells show the index to send.
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| {
                        if button.label == EMPTY_LABEL {
                            format!(" {} ", button.callback_data)
                        } else {
                            format!(" {}", button.label)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Button label for a cell.
pub fn cell_label(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => EMPTY_LABEL,
        Cell::MarkA => CROSS_LABEL,
        Cell::MarkB => NOUGHT_LABEL,
    }
}

/// Human name of a player's side.
pub fn side_name(player: Player) -> &'static str {
    match player {
        Player::MarkA => "Crosses (X)",
        Player::MarkB => "Noughts (O)",
    }
}

/// Status line shown above the board.
pub fn status_text(snapshot: &GameSnapshot) -> String {
    match snapshot.outcome() {
        SnapshotOutcome::InProgress => format!("{} to move", side_name(*snapshot.turn())),
        SnapshotOutcome::WonMarkA => format!("{} win!", side_name(Player::MarkA)),
        SnapshotOutcome::WonMarkB => format!("{} win!", side_name(Player::MarkB)),
        SnapshotOutcome::Draw => "Draw!".to_string(),
    }
}

/// Text shown when a new game starts.
pub fn new_game_text() -> String {
    format!("New game! {} move first.", side_name(Player::MarkA))
}

/// User-facing text for a rejected move.
///
/// `None` for errors that come from a malformed request rather than from
/// play, which are not shown to the user.
pub fn error_text(error: &GameError) -> Option<&'static str> {
    match error {
        GameError::NotFound { .. } => Some("No active game. Start a new one with /newgame"),
        GameError::GameAlreadyOver => {
            Some("The game is already over. Start a new one with /newgame")
        }
        GameError::CellOccupied { .. } => Some("This cell is already taken!"),
        GameError::IndexOutOfRange { .. } => None,
    }
}
