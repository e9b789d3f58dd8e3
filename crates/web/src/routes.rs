//! Request decoding and response encoding for the three session verbs
//!
//! Handlers only decode path parameters, call into the session and encode
//! the outcome; they hold no state of their own. Any non-200 response means
//! the session was not touched.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use chess_session_core::{Error, GameState};

use crate::AppState;

#[derive(Serialize)]
struct StateBody {
    code: u16,
    #[serde(flatten)]
    state: GameState,
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

pub async fn play(
    State(app): State<Arc<AppState>>,
    Path((from, to)): Path<(String, String)>,
) -> Response {
    let mut session = app.session.lock().unwrap();
    reply(session.play(&from, &to))
}

pub async fn state(State(app): State<Arc<AppState>>) -> Response {
    let session = app.session.lock().unwrap();
    reply(session.state())
}

pub async fn back(State(app): State<Arc<AppState>>, Path(count): Path<String>) -> Response {
    // Parsed by hand so "-1" and friends produce the JSON error body
    // instead of axum's bare rejection.
    let parsed = count
        .parse::<u32>()
        .map_err(|_| Error::InvalidNavigationCount(count.clone()));

    let mut session = app.session.lock().unwrap();
    reply(parsed.and_then(|n| session.navigate_back(n)))
}

fn reply(result: chess_session_core::Result<GameState>) -> Response {
    match result {
        Ok(state) => (StatusCode::OK, Json(StateBody { code: 200, state })).into_response(),
        Err(err) => {
            tracing::warn!("request rejected: {err}");
            let code = err.status_code();
            let status =
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorBody {
                code,
                message: err.to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}
