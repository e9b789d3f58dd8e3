//! HTTP protocol layer for the chess session server
//!
//! Exposes the three session verbs over a local port. The router holds the
//! one session of the process; every handler goes through the same mutex,
//! so requests racing each other (a double-click firing two plays) are
//! applied one at a time.

use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use chess_session_core::{Session, ShakmatyEngine};

pub mod routes;

pub struct AppState {
    pub session: Mutex<Session<ShakmatyEngine>>,
}

/// Builds the router around one session.
pub fn app(session: Session<ShakmatyEngine>) -> Router {
    let state = Arc::new(AppState {
        session: Mutex::new(session),
    });

    Router::new()
        .route("/play/:from/:to", post(routes::play))
        .route("/state", get(routes::state))
        .route("/back/:n", post(routes::back))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
