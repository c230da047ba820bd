//! Web front end: a button-grid board served over HTTP.
//!
//! Each browser gets its own session via an `sid` cookie, so concurrent
//! games stay isolated. Occupied squares and finished games render as
//! inert cells, which makes illegal input structurally impossible from
//! the page itself; hand-crafted requests get a 4xx with the rejection.

use crate::config::ServerConfig;
use crate::game::{Coord, GameState, GameStatus, MoveError, Square};
use crate::session::{SessionError, SessionId, SessionManager};
use axum::body::Body;
use axum::extract::{Form, State};
use axum::http::{HeaderMap, HeaderValue, Request, StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower::ServiceBuilder;
use tracing::{debug, info, instrument, warn};

/// Name of the session cookie.
const COOKIE_NAME: &str = "sid";

/// A move posted by the board form.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MoveForm {
    /// Target row (0-2).
    pub row: usize,
    /// Target column (0-2).
    pub col: usize,
}

/// Builds the application router.
pub fn router(sessions: SessionManager) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/move", post(make_move))
        .route("/reset", post(reset))
        .route("/state", get(state_snapshot))
        .route("/sessions", get(active_sessions))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            debug!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(sessions)
}

/// Binds the listener and serves the board until interrupted.
#[instrument(skip_all, fields(host = %config.host(), port = *config.port()))]
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let sessions = SessionManager::new();
    let app = router(sessions);

    let listener =
        tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(address = %listener.local_addr()?, "Server ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Renders the board page, opening a session if the browser has none.
async fn index(State(sessions): State<SessionManager>, headers: HeaderMap) -> Response {
    let cookie_id = session_cookie(&headers);
    let (id, state) = sessions.ensure_session(cookie_id.as_deref());
    let response = Html(render_page(&state)).into_response();
    with_session_cookie(response, &id)
}

/// Applies a move from the board form.
async fn make_move(
    State(sessions): State<SessionManager>,
    headers: HeaderMap,
    Form(form): Form<MoveForm>,
) -> Response {
    let Some(id) = session_cookie(&headers) else {
        return Redirect::to("/").into_response();
    };

    match sessions.apply_move(&id, form.row, form.col) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(err) => {
            warn!(session_id = %id, error = %err, "Move rejected");
            match &err {
                SessionError::NotFound(_) => Redirect::to("/").into_response(),
                SessionError::Move(MoveError::OutOfBounds { .. }) => {
                    (StatusCode::BAD_REQUEST, err.to_string()).into_response()
                }
                _ => (StatusCode::CONFLICT, err.to_string()).into_response(),
            }
        }
    }
}

/// Starts a new game in the browser's session.
async fn reset(State(sessions): State<SessionManager>, headers: HeaderMap) -> Response {
    if let Some(id) = session_cookie(&headers)
        && let Err(err) = sessions.reset_session(&id)
    {
        warn!(session_id = %id, error = %err, "Reset on unknown session");
    }
    Redirect::to("/").into_response()
}

/// JSON snapshot of the browser's game.
async fn state_snapshot(
    State(sessions): State<SessionManager>,
    headers: HeaderMap,
) -> Response {
    let session = session_cookie(&headers).and_then(|id| sessions.get_session(&id));

    match session {
        Some(session) => Json(json!({
            "session_id": session.id,
            "state": session.game.state(),
        }))
        .into_response(),
        None => (StatusCode::NOT_FOUND, "no active session").into_response(),
    }
}

/// JSON list of active session ids.
async fn active_sessions(State(sessions): State<SessionManager>) -> Response {
    Json(json!({ "sessions": sessions.list_sessions() })).into_response()
}

/// Readiness probe.
async fn health() -> &'static str {
    "OK"
}

/// Extracts the session id from the `Cookie` header.
fn session_cookie(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .filter_map(|pair| pair.trim().strip_prefix(COOKIE_NAME))
        .filter_map(|rest| rest.strip_prefix('='))
        .map(|value| value.to_string())
        .next()
}

/// Attaches the session cookie to a response.
fn with_session_cookie(mut response: Response, id: &SessionId) -> Response {
    let cookie = format!("{COOKIE_NAME}={id}; Path=/; HttpOnly");
    match HeaderValue::from_str(&cookie) {
        Ok(value) => {
            response.headers_mut().insert(header::SET_COOKIE, value);
        }
        Err(err) => warn!(error = %err, "Failed to encode session cookie"),
    }
    response
}

/// Renders the board page.
fn render_page(state: &GameState) -> String {
    let in_progress = state.status() == GameStatus::InProgress;

    let mut html = String::from(
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Noughts</title>\n<style>\n\
         body { font-family: sans-serif; max-width: 24em; margin: 2em auto; }\n\
         table { border-collapse: collapse; margin: 1em 0; }\n\
         td { border: 1px solid #444; width: 4em; height: 4em; text-align: center; }\n\
         .cell { font-size: 2em; display: block; width: 100%; height: 100%; }\n\
         button.cell { cursor: pointer; background: none; border: none; }\n\
         </style>\n</head>\n<body>\n<h1>Noughts &amp; Crosses</h1>\n",
    );

    html.push_str(&format!("<p class=\"status\">{}</p>\n", state.status_line()));

    html.push_str("<table>\n");
    for row in 0..3 {
        html.push_str("<tr>");
        for col in 0..3 {
            let coord = Coord::ALL[row * 3 + col];
            html.push_str("<td>");
            match state.board().get(coord) {
                Square::Empty if in_progress => {
                    html.push_str(&format!(
                        "<form method=\"post\" action=\"/move\">\
                         <input type=\"hidden\" name=\"row\" value=\"{row}\"/>\
                         <input type=\"hidden\" name=\"col\" value=\"{col}\"/>\
                         <button type=\"submit\" class=\"cell\">&nbsp;</button></form>"
                    ));
                }
                Square::Empty => html.push_str("<span class=\"cell\">&nbsp;</span>"),
                Square::Occupied(player) => {
                    html.push_str(&format!("<span class=\"cell\">{player}</span>"));
                }
            }
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</table>\n");

    html.push_str(
        "<form method=\"post\" action=\"/reset\"><button type=\"submit\">New game</button></form>\n",
    );
    html.push_str(&format!(
        "<p class=\"moves\">Moves played: {}</p>\n</body>\n</html>\n",
        state.history().len()
    ));

    html
}
