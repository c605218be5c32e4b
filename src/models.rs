//! JSON shapes exchanged with clients.

use serde::{Deserialize, Serialize};

use crate::scoring::GuessRecord;

/// Client-visible view of a session. Never carries the secret word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub guesses: Vec<GuessRecord>,
    pub remaining_guesses: usize,
    pub game_over: bool,
    pub wrong_letters: Vec<char>,
    pub close_letters: Vec<char>,
    pub right_letters: Vec<char>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameResponse {
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub game_state: GameState,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub sessions: usize,
    pub version: String,
}
