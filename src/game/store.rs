use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::{models::GameState, word::Word, wordlist::WordSource};

use super::{error::GameError, session::GameSession};

/// Shared handle to one session. Mutations take the write lock.
pub type SessionHandle = Arc<RwLock<GameSession>>;

/// Thread-safe map from session id to game.
///
/// The map lock is only held long enough to look up or swap an entry; game
/// mutations run under the per-session lock. Ids are random v4 UUIDs, so a
/// deleted id is never handed out again in practice.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    words: Arc<dyn WordSource>,
}

impl SessionStore {
    pub fn new(words: Arc<dyn WordSource>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            words,
        }
    }

    /// Starts a game and returns its id. An `answer` that is not a valid
    /// five-letter word is ignored in favour of the word source.
    pub fn create(&self, answer: Option<&str>) -> String {
        let secret = match answer.map(Word::parse) {
            Some(Ok(word)) => word,
            Some(Err(e)) => {
                tracing::warn!("Ignoring answer override: {e}");
                self.words.pick()
            }
            None => self.words.pick(),
        };

        let session = Arc::new(RwLock::new(GameSession::new(secret)));

        let mut sessions = self.sessions.write();
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        sessions.insert(id.clone(), session);
        drop(sessions);

        tracing::info!(session_id = %id, "New game started");
        tracing::debug!(session_id = %id, "Target word: {secret}");
        id
    }

    pub fn get(&self, id: &str) -> Result<SessionHandle, GameError> {
        self.sessions
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| GameError::SessionNotFound(id.to_string()))
    }

    pub fn render(&self, id: &str) -> Result<GameState, GameError> {
        Ok(self.get(id)?.read().render())
    }

    pub fn submit_guess(&self, id: &str, guess: &str) -> Result<GameState, GameError> {
        let session = self.get(id)?;
        let result = session.write().submit_guess(guess);

        match &result {
            Ok(state) => tracing::debug!(
                session_id = id,
                remaining = state.remaining_guesses,
                "Game guess submitted: {}",
                guess.to_lowercase()
            ),
            Err(e) => tracing::warn!(session_id = id, "Guess rejected: {e}"),
        }

        result
    }

    pub fn reset_session(&self, id: &str) -> Result<GameState, GameError> {
        let state = self.get(id)?.write().reset();
        tracing::info!(session_id = id, "Game reset");
        Ok(state)
    }

    /// Removes the session for good; `id` will never resolve again.
    pub fn delete_session(&self, id: &str) -> Result<(), GameError> {
        if self.sessions.write().remove(id).is_none() {
            return Err(GameError::SessionNotFound(id.to_string()));
        }

        tracing::info!(session_id = id, "Session deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
