//! Render-ready view of a game handed to the transport layer.

use crate::game::Game;
use crate::types::{Cell, Outcome, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Outcome in the flat form used by snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotOutcome {
    /// Game is ongoing.
    #[serde(rename = "in_progress")]
    InProgress,
    /// Crosses won.
    #[serde(rename = "won_markA")]
    WonMarkA,
    /// Noughts won.
    #[serde(rename = "won_markB")]
    WonMarkB,
    /// Board full, nobody won.
    #[serde(rename = "draw")]
    Draw,
}

impl From<Outcome> for SnapshotOutcome {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::InProgress => SnapshotOutcome::InProgress,
            Outcome::Won(Player::MarkA) => SnapshotOutcome::WonMarkA,
            Outcome::Won(Player::MarkB) => SnapshotOutcome::WonMarkB,
            Outcome::Draw => SnapshotOutcome::Draw,
        }
    }
}

impl From<SnapshotOutcome> for Outcome {
    fn from(outcome: SnapshotOutcome) -> Self {
        match outcome {
            SnapshotOutcome::InProgress => Outcome::InProgress,
            SnapshotOutcome::WonMarkA => Outcome::Won(Player::MarkA),
            SnapshotOutcome::WonMarkB => Outcome::Won(Player::MarkB),
            SnapshotOutcome::Draw => Outcome::Draw,
        }
    }
}

/// Immutable snapshot of a game.
///
/// `turn` is only meaningful while `outcome` is `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Cells in row-major order (0-8).
    board: [Cell; 9],
    /// Player to move.
    turn: Player,
    /// Game outcome.
    outcome: SnapshotOutcome,
}

impl GameSnapshot {
    /// Whether the snapshot shows a finished game.
    pub fn is_over(&self) -> bool {
        self.outcome != SnapshotOutcome::InProgress
    }
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            board: *game.board().cells(),
            turn: *game.turn(),
            outcome: SnapshotOutcome::from(*game.outcome()),
        }
    }
}

impl From<Game> for GameSnapshot {
    fn from(game: Game) -> Self {
        Self::from(&game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_game_json() {
        let snapshot = GameSnapshot::from(Game::new());
        let value = serde_json::to_value(snapshot).unwrap();
        assert_eq!(
            value,
            json!({
                "board": vec!["empty"; 9],
                "turn": "markA",
                "outcome": "in_progress",
            })
        );
    }

    #[test]
    fn test_won_outcome_json() {
        let game = [0, 3, 1, 4, 2]
            .iter()
            .try_fold(Game::new(), |game, &i| game.apply_move(i))
            .unwrap();
        let value = serde_json::to_value(GameSnapshot::from(game)).unwrap();
        assert_eq!(value["outcome"], "won_markA");
        assert_eq!(value["board"][3], "markB");
    }

    #[test]
    fn test_deserializes_from_wire_form() {
        let snapshot: GameSnapshot = serde_json::from_value(json!({
            "board": ["markA", "markB", "empty", "empty", "empty", "empty", "empty", "empty", "empty"],
            "turn": "markA",
            "outcome": "draw",
        }))
        .unwrap();
        assert_eq!(snapshot.board()[1], Cell::MarkB);
        assert_eq!(Outcome::from(*snapshot.outcome()), Outcome::Draw);
        assert!(snapshot.is_over());
    }
}
