use axum::{extract::rejection::JsonRejection, response::Redirect, Json};

use crate::answer;
use crate::http::response::ApiError;

use super::models::{AnswerResponse, QuestionRequest};

pub async fn answer_question(
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<AnswerResponse>, ApiError> {
    let Json(request) = payload?;

    tracing::debug!(
        question_len = request.question.len(),
        has_image = request.image.is_some(),
        "Answering question"
    );

    Ok(Json(answer::respond(&request)?))
}

pub async fn redirect_to_api() -> Redirect {
    Redirect::temporary("/api/")
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
