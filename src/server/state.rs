use std::sync::Arc;

use crate::game::SessionStore;
use crate::wordlist::WordSource;

/// Shared state handed to every request handler.
pub struct AppState {
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(words: Arc<dyn WordSource>) -> Self {
        Self {
            sessions: SessionStore::new(words),
        }
    }
}
