//! Game HTTP routes.

use actix_web::cookie::Cookie;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::models::{GameStateResponse, HealthResponse, NewGameResponse};

use super::error::AppError;
use super::extract::{SESSION_COOKIE, SessionId};
use super::state::AppState;

#[derive(Debug, Deserialize)]
struct GuessBody {
    guess: Option<String>,
    #[serde(rename = "sessionID")]
    session_id: Option<String>,
}

/// First `answer` pair in the query string, if any. Never fails: a query
/// that cannot be read just means no override.
fn answer_override(req: &HttpRequest) -> Option<String> {
    web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .ok()?
        .into_inner()
        .into_iter()
        .find_map(|(key, value)| (key == "answer").then_some(value))
}

/// GET /newgame[?answer=W]
async fn new_game(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let session_id = state.sessions.create(answer_override(&req).as_deref());

    let cookie = Cookie::build(SESSION_COOKIE, session_id.clone())
        .path("/")
        .http_only(true)
        .finish();

    HttpResponse::Created()
        .cookie(cookie)
        .json(NewGameResponse { session_id })
}

/// GET /gamestate?sessionID=S
async fn game_state(
    session_id: SessionId,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_state = state.sessions.render(session_id.as_str())?;
    Ok(HttpResponse::Ok().json(GameStateResponse { game_state }))
}

/// POST /guess `{guess, sessionID}`
async fn guess(
    req: HttpRequest,
    body: web::Json<GuessBody>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let GuessBody { guess, session_id } = body.into_inner();
    let session_id = SessionId::resolve(session_id, &req)?;

    // Unknown ids are reported before malformed guesses.
    let game_state = state
        .sessions
        .submit_guess(session_id.as_str(), guess.as_deref().unwrap_or_default())?;

    Ok(HttpResponse::Created().json(GameStateResponse { game_state }))
}

/// DELETE /reset?sessionID=S
async fn reset(
    session_id: SessionId,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let game_state = state.sessions.reset_session(session_id.as_str())?;
    Ok(HttpResponse::Ok().json(GameStateResponse { game_state }))
}

/// DELETE /delete?sessionID=S
async fn delete(
    session_id: SessionId,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    state.sessions.delete_session(session_id.as_str())?;
    Ok(HttpResponse::NoContent().finish())
}

async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        sessions: state.sessions.len(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn no_route(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::bad_request(format!("invalid JSON body: {err}")).into()),
    )
    .route("/newgame", web::get().to(new_game))
    .route("/gamestate", web::get().to(game_state))
    .route("/guess", web::post().to(guess))
    .route("/reset", web::delete().to(reset))
    .route("/delete", web::delete().to(delete))
    .route("/health", web::get().to(health))
    .default_service(web::to(no_route));
}
