//! Chat tic-tac-toe - one game per conversation.
//!
//! This crate is the session engine behind a chat bot: it keeps a
//! tic-tac-toe game for every chat, validates moves against turn order and
//! cell occupancy, and detects wins and draws.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with side-effect-free placement
//! - **Rules**: pure win/draw evaluation
//! - **Game**: board + turn + outcome state machine
//! - **SessionStore**: concurrent map from chat id to game
//! - **GameSnapshot**: render-ready view handed to the transport
//!
//! # Example
//!
//! ```
//! use chat_tictactoe::{SessionId, SessionStore, SnapshotOutcome};
//!
//! let store = SessionStore::new();
//! let chat = SessionId::from("chat-42");
//!
//! store.start_session(&chat);
//! let snapshot = store.submit_move(&chat, 4)?;
//! assert_eq!(snapshot.outcome(), &SnapshotOutcome::InProgress);
//! # Ok::<(), chat_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod rules;
mod snapshot;
mod store;
mod types;

pub use board::Board;
pub use error::GameError;
pub use game::Game;
pub use rules::{LINES, check_winner, evaluate, is_full};
pub use snapshot::{GameSnapshot, SnapshotOutcome};
pub use store::{SessionId, SessionStore};
pub use types::{Cell, Outcome, Player};
