//! Core value types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two marks. `MarkA` (crosses) always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "camelCase")]
pub enum Player {
    /// Crosses, moves first.
    #[strum(to_string = "X")]
    MarkA,
    /// Noughts.
    #[strum(to_string = "O")]
    MarkB,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::MarkA => Player::MarkB,
            Player::MarkB => Player::MarkA,
        }
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Player::MarkA => 'X',
            Player::MarkB => 'O',
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Occupied by crosses.
    MarkA,
    /// Occupied by noughts.
    MarkB,
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkA => Some(Player::MarkA),
            Cell::MarkB => Some(Player::MarkB),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::MarkA => Cell::MarkA,
            Player::MarkB => Cell::MarkB,
        }
    }
}

/// Terminal-or-not status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended with three in a row for this player.
    Won(Player),
    /// Board is full and nobody won.
    Draw,
}

impl Outcome {
    /// Whether the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winner, if the game was won.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}
