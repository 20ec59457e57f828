//! Contact form relay endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use portfolio_core::ContactSubmission;
use tracing::{error, info, warn};

use crate::error::ApiError;
use crate::types::{ApiState, SendEmailResponse};

/// Handler for POST /send-email
///
/// Makes exactly one delivery attempt.
pub async fn send_email_handler(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    let Json(submission) = payload.inspect_err(|rejection| {
        warn!(reason = %rejection.body_text(), "submission_rejected");
    })?;

    let email = state.route.compose(&submission).inspect_err(|e| {
        error!(error = %e, "email_compose_failed");
    })?;

    match state.mailer.send(&email).await {
        Ok(report) => {
            info!(response = %report.response, "email_sent");
            Ok(Json(SendEmailResponse::sent()))
        }
        Err(e) => {
            error!(error = %e, "email_send_failed");
            Err(ApiError::Delivery(e))
        }
    }
}
