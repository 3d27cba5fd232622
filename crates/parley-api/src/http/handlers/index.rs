//! Bootstrap page handler.
//!
//! `GET /` eagerly ensures a remote chat session exists before the client
//! sends its first message: if the request carries no recognized `chat_id`
//! cookie, a session is created and its id handed back as an `HttpOnly`
//! cookie scoped to the root path. A session-creation failure fails this
//! request only, never the process.

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};

use crate::http::error::AppError;
use crate::http::handlers::chat_id_cookie;
use crate::state::AppState;

/// Minimal placeholder page; a real frontend connects to `/ws` directly.
const PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"UTF-8\"><title>Parley</title></head>\n<body><p>Parley relay is running. Connect a chat client to <code>/ws</code>.</p></body>\n</html>\n";

/// GET / - serve the bootstrap page, creating a session on first visit.
pub async fn bootstrap(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    // A cookie is only honored while its session is still known; the store
    // is memory-only, so a process restart invalidates old cookies.
    if let Some(id) = chat_id_cookie(&headers) {
        if state.relay.has_session(&id) {
            return Ok(Html(PAGE).into_response());
        }
    }

    let id = state.relay.open_session().await?;
    let cookie = HeaderValue::from_str(&format!("chat_id={id}; HttpOnly; Path=/"))
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let mut response = Html(PAGE).into_response();
    response.headers_mut().insert(SET_COOKIE, cookie);
    Ok(response)
}
