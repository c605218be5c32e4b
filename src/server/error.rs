use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use thiserror::Error;

use crate::game::GameError;
use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("sessionID is required")]
    MissingSessionId,
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Game(#[from] GameError),
}

impl AppError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::BadRequest(detail.into())
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingSessionId => StatusCode::BAD_REQUEST,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Game(GameError::SessionNotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Game(GameError::InvalidGuess(_)) => StatusCode::BAD_REQUEST,
            AppError::Game(GameError::GameAlreadyOver) => StatusCode::BAD_REQUEST,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::WordError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::MissingSessionId, 400),
            (AppError::bad_request("bad json"), 400),
            (AppError::not_found("no route"), 404),
            (GameError::SessionNotFound("x".into()).into(), 404),
            (GameError::InvalidGuess(WordError::Length(3)).into(), 400),
            (GameError::GameAlreadyOver.into(), 400),
        ];
        for (err, status) in cases {
            assert_eq!(err.status_code().as_u16(), status, "{err}");
        }
    }

    #[test]
    fn test_messages_are_not_empty() {
        assert_eq!(AppError::MissingSessionId.to_string(), "sessionID is required");
        assert_eq!(
            AppError::from(GameError::InvalidGuess(WordError::NotALetter('1'))).to_string(),
            "invalid guess: '1' is not a letter"
        );
    }
}
