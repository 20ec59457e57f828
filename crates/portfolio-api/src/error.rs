//! Handler errors and their HTTP mapping.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use portfolio_mail::MailError;
use thiserror::Error;

use crate::types::{SendEmailResponse, FAILURE_MESSAGE, INVALID_MESSAGE};

#[derive(Debug, Error)]
pub enum ApiError {
    /// The body was not a contact submission.
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),

    /// Composing or delivering the email failed.
    #[error("delivery failed: {0}")]
    Delivery(#[from] MailError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidSubmission(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The cause stays in the logs; the caller gets a fixed message.
        let (status, message) = match self {
            ApiError::InvalidSubmission(_) => (StatusCode::BAD_REQUEST, INVALID_MESSAGE),
            ApiError::Delivery(_) => (StatusCode::INTERNAL_SERVER_ERROR, FAILURE_MESSAGE),
        };

        (status, Json(SendEmailResponse::failed(message))).into_response()
    }
}
