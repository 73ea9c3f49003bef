//! Question answering API.
//!
//! `POST /api/` is the only endpoint; `POST /api` redirects to it.

pub mod handlers;
pub mod models;

use axum::{routing::post, Router};

pub use handlers::{answer_question, method_not_allowed, not_found, redirect_to_api};
pub use models::{AnswerResponse, ErrorDetail, Link, QuestionRequest};

pub fn router() -> Router {
    Router::new()
        .route("/api/", post(answer_question))
        .route("/api", post(redirect_to_api))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}
