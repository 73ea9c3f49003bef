//! Answer subsystem.
//!
//! # Data Flow
//! ```text
//! QuestionRequest
//!     → image.rs (decode attached image, bytes discarded)
//!     → catalog.rs (fixed answer + links)
//!     → AnswerResponse
//! ```
//!
//! # Design Decisions
//! - The question text never influences the answer
//! - An invalid image fails the whole request; a valid one changes nothing

pub mod catalog;
pub mod image;

use thiserror::Error;

use crate::api::models::{AnswerResponse, Link, QuestionRequest};

pub use catalog::FIXED_ANSWER;
pub use image::decode_image;

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("Invalid base64 image data")]
    InvalidImage(#[source] base64::DecodeError),
}

/// Answer a question.
pub fn respond(request: &QuestionRequest) -> Result<AnswerResponse, AnswerError> {
    // Empty strings count as "no image".
    if let Some(encoded) = request.image.as_deref().filter(|image| !image.is_empty()) {
        let image = decode_image(encoded)?;
        tracing::debug!(image_bytes = image.len(), "Attached image decoded");
    }

    Ok(fixed_answer())
}

/// The fixed answer as an owned response body.
pub fn fixed_answer() -> AnswerResponse {
    AnswerResponse {
        answer: FIXED_ANSWER.answer.to_string(),
        links: FIXED_ANSWER
            .links
            .iter()
            .map(|link| Link {
                url: link.url.to_string(),
                text: link.text.to_string(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(image: Option<&str>) -> QuestionRequest {
        QuestionRequest {
            question: "What model should I use?".to_string(),
            image: image.map(str::to_string),
        }
    }

    #[test]
    fn answer_has_two_links_in_fixed_order() {
        let response = respond(&question(None)).unwrap();
        assert!(response.answer.starts_with("You must use `gpt-3.5-turbo-0125`"));
        assert_eq!(response.links.len(), 2);
        assert!(response.links[0].url.ends_with("/155939/4"));
        assert!(response.links[1].url.ends_with("/155939/3"));
    }

    #[test]
    fn valid_image_does_not_change_answer() {
        let with_image = respond(&question(Some("aGVsbG8gd29ybGQ="))).unwrap();
        assert_eq!(with_image, fixed_answer());
    }

    #[test]
    fn question_text_does_not_change_answer() {
        let mut request = question(None);
        request.question = String::new();
        assert_eq!(respond(&request).unwrap(), fixed_answer());
    }

    #[test]
    fn loosely_encoded_image_still_answers() {
        assert_eq!(respond(&question(Some("aGVsbG9="))).unwrap(), fixed_answer());
    }

    #[test]
    fn empty_image_is_skipped() {
        assert_eq!(respond(&question(Some(""))).unwrap(), fixed_answer());
    }

    #[test]
    fn invalid_image_is_rejected() {
        let err = respond(&question(Some("not-valid-base64!!"))).unwrap_err();
        assert!(matches!(err, AnswerError::InvalidImage(_)));
    }
}
