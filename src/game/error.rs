use thiserror::Error;

use crate::word::WordError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no active session with id {0}")]
    SessionNotFound(String),
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] WordError),
    #[error("game is already over, reset or start a new game")]
    GameAlreadyOver,
}
