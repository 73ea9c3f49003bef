//! Deadline behaviour of the request gate in front of a real router.
//!
//! Time is paused so the 30 second deadline elapses instantly.

use std::time::Duration;

use answer_api::api::{answer_question, ErrorDetail};
use answer_api::resilience::{RequestGateLayer, REQUEST_TIMEOUT};
use axum::{
    body::Body,
    extract::rejection::JsonRejection,
    http::{Method, Request, StatusCode},
    routing::post,
    Json, Router,
};
use http_body_util::BodyExt;
use tokio::time::Instant;
use tower::ServiceExt;

/// The real handler, preceded by an artificial delay.
fn delayed_app(delay: Duration) -> Router {
    Router::new()
        .route(
            "/api/",
            post(
                move |payload: Result<Json<answer_api::api::QuestionRequest>, JsonRejection>| async move {
                    tokio::time::sleep(delay).await;
                    answer_question(payload).await
                },
            ),
        )
        .layer(RequestGateLayer::new(REQUEST_TIMEOUT))
}

fn ask() -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"question":"What model should I use?"}"#))
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn handler_under_deadline_answers() {
    let response = delayed_app(Duration::from_secs(25))
        .oneshot(ask())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test(start_paused = true)]
async fn handler_over_deadline_returns_504_at_deadline() {
    let started = Instant::now();
    let response = delayed_app(Duration::from_secs(120))
        .oneshot(ask())
        .await
        .unwrap();
    let elapsed = started.elapsed();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(elapsed >= Duration::from_secs(30));
    assert!(elapsed < Duration::from_secs(31));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let detail: ErrorDetail = serde_json::from_slice(&body).unwrap();
    assert_eq!(detail.detail, "Request exceeded the time limit for processing");
}
