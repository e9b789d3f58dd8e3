//! Endpoint tests driving the router directly with the oneshot pattern.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use chess_session_core::{Session, ShakmatyEngine, STARTING_FEN};
use chess_session_web::app;

const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1";

fn test_app() -> Router {
    app(Session::new(ShakmatyEngine).expect("session from starting position"))
}

/// Sends one request to a clone of the router; clones share session state.
async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_state_returns_starting_position() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/state").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 200);
    assert_eq!(body["fen"], STARTING_FEN);
    assert_eq!(body["is_check"], false);
    assert_eq!(body["is_takes"], false);
    assert!(body["available_moves"]["e2"].is_array());
}

#[tokio::test]
async fn test_play_returns_resulting_position() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/play/e2/e4").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fen"], AFTER_E4);

    let (_, body) = send(&app, "GET", "/state").await;
    assert_eq!(body["fen"], AFTER_E4);
}

#[tokio::test]
async fn test_illegal_move_is_rejected_without_mutation() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/play/e2/e5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert!(body["message"].as_str().unwrap().contains("illegal move"));

    let (_, body) = send(&app, "GET", "/state").await;
    assert_eq!(body["fen"], STARTING_FEN);
}

#[tokio::test]
async fn test_malformed_square_is_rejected() {
    let app = test_app();
    let (status, body) = send(&app, "POST", "/play/zz/e4").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_back_rewinds_and_clamps() {
    let app = test_app();
    send(&app, "POST", "/play/e2/e4").await;

    let (status, body) = send(&app, "POST", "/back/5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fen"], STARTING_FEN);
}

#[tokio::test]
async fn test_back_rejects_non_numeric_count() {
    let app = test_app();

    for uri in ["/back/-1", "/back/lots"] {
        let (status, body) = send(&app, "POST", uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
        assert_eq!(body["code"], 400);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("navigation count"));
    }
}

#[tokio::test]
async fn test_play_after_back_overwrites_the_line() {
    let app = test_app();
    send(&app, "POST", "/play/e2/e4").await;
    send(&app, "POST", "/back/1").await;

    let (status, body) = send(&app, "POST", "/play/d2/d4").await;
    assert_eq!(status, StatusCode::OK);
    let fen = body["fen"].as_str().unwrap();
    assert!(fen.contains("3P4"));

    // Rewinding lands on the start; the e4 line no longer exists.
    let (_, body) = send(&app, "POST", "/back/1").await;
    assert_eq!(body["fen"], STARTING_FEN);
}
