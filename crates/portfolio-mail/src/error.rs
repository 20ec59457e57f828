//! Error types for mail composition and delivery.

use thiserror::Error;

/// Result type for mail operations.
pub type MailResult<T> = Result<T, MailError>;

/// Errors that can occur while configuring, composing or sending mail.
#[derive(Debug, Error)]
pub enum MailError {
    /// One or more required settings are absent or empty.
    #[error("missing required config: {}", .keys.join(", "))]
    MissingConfig { keys: Vec<&'static str> },

    /// A setting is present but unusable.
    #[error("invalid value for {key}: {message}")]
    InvalidConfig { key: &'static str, message: String },

    /// An address failed to parse.
    #[error("invalid email address {address:?}: {message}")]
    InvalidAddress { address: String, message: String },

    /// The HTML body could not be rendered.
    #[error("failed to render email template: {0}")]
    Template(#[from] askama::Error),

    /// The MIME message could not be assembled.
    #[error("failed to build message: {0}")]
    Build(String),

    /// The SMTP relay rejected the message or could not be reached.
    #[error("SMTP error: {0}")]
    Smtp(String),
}

impl MailError {
    /// Whether this error belongs to startup configuration rather than a
    /// single delivery.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            MailError::MissingConfig { .. } | MailError::InvalidConfig { .. }
        )
    }
}
