use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use serde::Deserialize;

use super::error::AppError;

pub const SESSION_COOKIE: &str = "sessionID";

#[derive(Debug, Deserialize)]
struct SessionQuery {
    #[serde(rename = "sessionID")]
    session_id: Option<String>,
}

/// Session id taken from the request: an explicit value if one was sent,
/// else the `sessionID` cookie. Empty strings count as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn resolve(explicit: Option<String>, req: &HttpRequest) -> Result<Self, AppError> {
        explicit
            .filter(|id| !id.is_empty())
            .or_else(|| {
                req.cookie(SESSION_COOKIE)
                    .map(|c| c.value().to_string())
                    .filter(|id| !id.is_empty())
            })
            .map(SessionId)
            .ok_or(AppError::MissingSessionId)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reads `?sessionID=` from the query string, falling back to the cookie.
impl FromRequest for SessionId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let explicit = web::Query::<SessionQuery>::from_query(req.query_string())
            .ok()
            .and_then(|q| q.into_inner().session_id);

        ready(Self::resolve(explicit, req))
    }
}
