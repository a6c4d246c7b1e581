//! Session management: one game per chat conversation.

use crate::error::GameError;
use crate::game::Game;
use crate::snapshot::GameSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, instrument, trace};

/// Opaque identifier of a session, usually the chat id of the conversation.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for SessionId {
    fn from(chat_id: i64) -> Self {
        Self(chat_id.to_string())
    }
}

/// Each game sits behind its own mutex so sessions never wait on each other.
type Slot = Arc<Mutex<Game>>;

/// Manages all game sessions.
///
/// Cloning the store is cheap; clones share the same sessions. Operations on
/// one session are serialized, operations on different sessions are not.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Slot>>>,
}

impl SessionStore {
    /// Creates an empty session store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates (or replaces) the game for a session with a fresh one.
    #[instrument(skip(self, id), fields(session_id = %id))]
    pub fn create_game(&self, id: &SessionId) -> Game {
        let existing = match self.write_sessions().entry(id.clone()) {
            Entry::Occupied(entry) => Arc::clone(entry.get()),
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(Mutex::new(Game::new())));
                debug!("Created new session");
                return Game::new();
            }
        };

        // Map lock is released here; a move that locks the slot first is
        // ordered before this reset and wiped by it.
        let mut game = lock_game(&existing);
        *game = Game::new();
        debug!("Reset existing session");
        *game
    }

    /// Returns a copy of the session's game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if the session does not exist.
    #[instrument(skip(self, id), fields(session_id = %id))]
    pub fn get_game(&self, id: &SessionId) -> Result<Game, GameError> {
        let slot = self.slot(id)?;
        let game = *lock_game(&slot);
        Ok(game)
    }

    /// Plays the current player's mark at `index` and stores the result.
    ///
    /// The read-modify-write happens under the session's lock; on error the
    /// stored game is unchanged.
    ///
    /// # Errors
    ///
    /// - [`GameError::NotFound`] if the session does not exist
    /// - [`GameError::GameAlreadyOver`] if the game was won or drawn
    /// - [`GameError::CellOccupied`] / [`GameError::IndexOutOfRange`] for a bad cell
    #[instrument(skip(self, id), fields(session_id = %id))]
    pub fn apply_move(&self, id: &SessionId, index: usize) -> Result<Game, GameError> {
        let slot = self.slot(id)?;
        let mut game = lock_game(&slot);
        let next = game.apply_move(index)?;
        *game = next;
        debug!(outcome = ?next.outcome(), "Stored move");
        trace!(board = %next.board(), "Board after move");
        Ok(next)
    }

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if the session does not exist.
    #[instrument(skip(self, id), fields(session_id = %id))]
    pub fn end_session(&self, id: &SessionId) -> Result<(), GameError> {
        match self.write_sessions().remove(id) {
            Some(_) => {
                debug!("Session removed");
                Ok(())
            }
            None => Err(not_found(id)),
        }
    }

    /// Starts a new game for the session and returns its snapshot.
    pub fn start_session(&self, id: &SessionId) -> GameSnapshot {
        GameSnapshot::from(self.create_game(id))
    }

    /// Returns a snapshot of the session's game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] if the session does not exist.
    pub fn get_session(&self, id: &SessionId) -> Result<GameSnapshot, GameError> {
        self.get_game(id).map(GameSnapshot::from)
    }

    /// Submits a move and returns the resulting snapshot.
    ///
    /// # Errors
    ///
    /// See [`SessionStore::apply_move`].
    pub fn submit_move(&self, id: &SessionId, cell_index: usize) -> Result<GameSnapshot, GameError> {
        self.apply_move(id, cell_index).map(GameSnapshot::from)
    }

    /// Lists all session ids, sorted.
    pub fn session_ids(&self) -> Vec<SessionId> {
        let mut ids: Vec<_> = self.read_sessions().keys().cloned().collect();
        ids.sort();
        trace!(count = ids.len(), "Listed sessions");
        ids
    }

    /// Number of sessions.
    pub fn len(&self) -> usize {
        self.read_sessions().len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.read_sessions().is_empty()
    }

    /// Looks up a session's slot, releasing the map lock before returning.
    fn slot(&self, id: &SessionId) -> Result<Slot, GameError> {
        self.read_sessions()
            .get(id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    fn read_sessions(&self) -> RwLockReadGuard<'_, HashMap<SessionId, Slot>> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_sessions(&self) -> RwLockWriteGuard<'_, HashMap<SessionId, Slot>> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// Games are replaced whole, so a poisoned lock still guards a valid game.
fn lock_game(slot: &Slot) -> MutexGuard<'_, Game> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

fn not_found(id: &SessionId) -> GameError {
    GameError::NotFound {
        session_id: id.clone(),
    }
}
