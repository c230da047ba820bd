//! Browser session management for the web front end.
//!
//! Each session owns an independent [`Game`], so concurrent games never
//! share state. The manager is cloned into every handler; mutations
//! happen while holding the lock.

use crate::game::{Game, GameState, MoveError};
use derive_more::{Display, Error, From};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game session.
pub type SessionId = String;

/// Errors from session operations.
#[derive(Debug, Clone, Display, Error, From)]
pub enum SessionError {
    /// No session with the given id.
    #[display("session {_0} not found")]
    #[from(ignore)]
    NotFound(#[error(not(source))] SessionId),
    /// A session with the given id already exists.
    #[display("session {_0} already exists")]
    #[from(ignore)]
    AlreadyExists(#[error(not(source))] SessionId),
    /// The engine rejected the move.
    #[display("{_0}")]
    Move(MoveError),
}

/// A game session: one engine, driven by one browser.
///
/// Hot-seat play: both marks share the keyboard, so the session tracks
/// no per-player identity.
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Session ID.
    pub id: SessionId,
    /// The game engine.
    pub game: Game,
}

impl GameSession {
    /// Creates a new game session.
    #[instrument]
    pub fn new(id: SessionId) -> Self {
        info!(session_id = %id, "Creating new game session");
        Self {
            id,
            game: Game::new(),
        }
    }
}

/// Manages all game sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, GameSession>>>,
}

impl SessionManager {
    /// Creates a new session manager.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new game session with the given id.
    #[instrument(skip(self))]
    pub fn create_session(&self, id: SessionId) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        if sessions.contains_key(&id) {
            warn!(session_id = %id, "Session already exists");
            return Err(SessionError::AlreadyExists(id));
        }

        sessions.insert(id.clone(), GameSession::new(id.clone()));
        Ok(id)
    }

    /// Gets a snapshot of a session by id.
    #[instrument(skip(self))]
    pub fn get_session(&self, id: &str) -> Option<GameSession> {
        let sessions = self.sessions.lock().unwrap();
        let session = sessions.get(id).cloned();

        if session.is_none() {
            debug!(session_id = id, "Session not found");
        }

        session
    }

    /// Finds the session named by `id`, or mints a fresh one.
    ///
    /// Cookie flow for the web front end: an unknown or missing id
    /// (first visit, or a stale cookie from a previous server run)
    /// silently opens a new game.
    #[instrument(skip(self))]
    pub fn ensure_session(&self, id: Option<&str>) -> (SessionId, GameState) {
        let mut sessions = self.sessions.lock().unwrap();

        if let Some(id) = id
            && let Some(session) = sessions.get(id)
        {
            return (session.id.clone(), session.game.state().clone());
        }

        let mut fresh = mint_id();
        while sessions.contains_key(&fresh) {
            fresh = mint_id();
        }

        let session = GameSession::new(fresh.clone());
        let state = session.game.state().clone();
        sessions.insert(fresh.clone(), session);
        (fresh, state)
    }

    /// Applies a move in the given session, while holding the lock.
    #[instrument(skip(self))]
    pub fn apply_move(
        &self,
        id: &str,
        row: usize,
        col: usize,
    ) -> Result<GameState, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        session.game.make_move(row, col).map_err(|e| {
            warn!(session_id = id, row, col, error = %e, "Invalid move");
            SessionError::from(e)
        })?;

        info!(
            session_id = id,
            row,
            col,
            status = ?session.game.state().status(),
            "Move completed successfully"
        );

        Ok(session.game.state().clone())
    }

    /// Resets the session's game to a fresh one.
    #[instrument(skip(self))]
    pub fn reset_session(&self, id: &str) -> Result<GameState, SessionError> {
        let mut sessions = self.sessions.lock().unwrap();

        let session = sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;

        session.game.reset();
        info!(session_id = id, "Session reset");

        Ok(session.game.state().clone())
    }

    /// Lists all active session ids.
    #[instrument(skip(self))]
    pub fn list_sessions(&self) -> Vec<SessionId> {
        let sessions = self.sessions.lock().unwrap();
        let ids: Vec<_> = sessions.keys().cloned().collect();
        debug!(count = ids.len(), "Listed sessions");
        ids
    }
}

/// Mints a random session id.
fn mint_id() -> SessionId {
    format!("{:016x}", rand::random::<u64>())
}
