//! Single-session game state machine.

use crate::{
    analysis::aggregate,
    models::GameState,
    scoring::{GuessRecord, evaluate},
    word::Word,
};

use super::error::GameError;

pub const MAX_GUESSES: usize = 6;

/// One player's game: a hidden word and the guesses made against it.
///
/// `remaining_guesses + guesses.len() == MAX_GUESSES` always holds, and
/// `game_over` is set exactly when the last guess solved the word or no
/// guesses remain.
#[derive(Debug, Clone)]
pub struct GameSession {
    secret_word: Word,
    guesses: Vec<GuessRecord>,
    remaining_guesses: usize,
    game_over: bool,
}

impl GameSession {
    pub fn new(secret_word: Word) -> Self {
        Self {
            secret_word,
            guesses: Vec::new(),
            remaining_guesses: MAX_GUESSES,
            game_over: false,
        }
    }

    pub fn render(&self) -> GameState {
        let letters = aggregate(&self.guesses);

        GameState {
            guesses: self.guesses.clone(),
            remaining_guesses: self.remaining_guesses,
            game_over: self.game_over,
            wrong_letters: letters.wrong.into_iter().collect(),
            close_letters: letters.close.into_iter().collect(),
            right_letters: letters.right.into_iter().collect(),
        }
    }

    /// Scores `text` against the secret word and records it.
    ///
    /// A rejected guess leaves the session untouched.
    pub fn submit_guess(&mut self, text: &str) -> Result<GameState, GameError> {
        let guess = Word::parse(text)?;

        if self.game_over {
            return Err(GameError::GameAlreadyOver);
        }

        let record = evaluate(&guess, &self.secret_word);
        let solved = record.is_solved();
        self.guesses.push(record);
        self.remaining_guesses -= 1;

        if solved {
            tracing::info!(guesses = self.guesses.len(), "Game won");
            self.game_over = true;
        } else if self.remaining_guesses == 0 {
            tracing::info!("Game over: out of guesses");
            tracing::debug!("Target word was {}", self.secret_word);
            self.game_over = true;
        }

        Ok(self.render())
    }

    /// Clears the history. The secret word is kept.
    pub fn reset(&mut self) -> GameState {
        self.guesses.clear();
        self.remaining_guesses = MAX_GUESSES;
        self.game_over = false;
        self.render()
    }
}
