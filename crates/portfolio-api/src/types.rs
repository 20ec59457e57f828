//! API types and DTOs.

use std::sync::Arc;

use axum::http::HeaderValue;
use portfolio_mail::{MailRoute, Mailer};
use serde::{Deserialize, Serialize};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please check server logs.";
pub const INVALID_MESSAGE: &str = "Invalid contact form submission.";

/// Shared application state. Read-only after startup.
pub struct ApiState {
    /// Delivery backend.
    pub mailer: Arc<dyn Mailer>,
    /// Sender and recipient used for every submission.
    pub route: MailRoute,
    /// Front-end origins allowed by CORS; empty allows any.
    pub allowed_origins: Vec<HeaderValue>,
}

/// Body of every `/send-email` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEmailResponse {
    pub success: bool,
    pub message: String,
}

impl SendEmailResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version of the running server.
    pub version: String,
}
