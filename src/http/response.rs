//! Error responses.
//!
//! Every failure leaves the service as `{"detail": "..."}` with a status
//! chosen here:
//! - invalid image → 400
//! - body rejected by the JSON extractor → the extractor's status
//! - deadline exceeded → 504
//! - unknown route → 404, wrong method → 405

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::answer::AnswerError;
use crate::api::models::ErrorDetail;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Answer(#[from] AnswerError),
    #[error("{0}")]
    MalformedBody(#[from] JsonRejection),
    #[error("Request exceeded the time limit for processing")]
    Timeout,
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Answer(AnswerError::InvalidImage(_)) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(rejection) => rejection.status(),
            ApiError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::MalformedBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        };
        (self.status(), Json(ErrorDetail { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn detail_of(error: ApiError) -> (StatusCode, ErrorDetail) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn timeout_maps_to_gateway_timeout() {
        let (status, body) = detail_of(ApiError::Timeout).await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(body.detail, "Request exceeded the time limit for processing");
    }

    #[tokio::test]
    async fn invalid_image_maps_to_bad_request() {
        let err = crate::answer::decode_image("%%%").unwrap_err();
        let (status, body) = detail_of(err.into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.detail, "Invalid base64 image data");
    }

    #[tokio::test]
    async fn routing_errors_use_detail_shape() {
        assert_eq!(
            detail_of(ApiError::NotFound).await,
            (StatusCode::NOT_FOUND, ErrorDetail { detail: "Not Found".into() })
        );
        assert_eq!(
            detail_of(ApiError::MethodNotAllowed).await,
            (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorDetail { detail: "Method Not Allowed".into() }
            )
        );
    }
}
