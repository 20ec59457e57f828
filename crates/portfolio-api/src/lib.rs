//! HTTP API for the portfolio contact form.
//!
//! ## Endpoints
//!
//! - `POST /send-email` - Relay a contact form submission by email
//! - `GET /health` - Liveness check
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portfolio_api::{create_api_router, create_api_state};
//! use portfolio_mail::{MailConfig, MailRoute, SmtpMailer};
//!
//! let config = MailConfig::from_env().unwrap();
//! let mailer = Arc::new(SmtpMailer::from_config(&config).unwrap());
//! let route = MailRoute::from_config(&config).unwrap();
//! let router = create_api_router(create_api_state(mailer, route));
//! ```

mod error;
mod routes;
mod types;

pub use error::ApiError;
pub use routes::create_api_router;
pub use types::{
    ApiState, HealthResponse, SendEmailResponse, FAILURE_MESSAGE, INVALID_MESSAGE,
    SUCCESS_MESSAGE,
};

use std::sync::Arc;

use axum::http::HeaderValue;
use portfolio_mail::{MailRoute, Mailer};

/// Create API state that accepts cross-origin calls from any origin.
pub fn create_api_state(mailer: Arc<dyn Mailer>, route: MailRoute) -> Arc<ApiState> {
    create_api_state_with_origins(mailer, route, Vec::new())
}

/// Create API state restricted to the given front-end origins.
///
/// An empty list allows any origin.
pub fn create_api_state_with_origins(
    mailer: Arc<dyn Mailer>,
    route: MailRoute,
    allowed_origins: Vec<HeaderValue>,
) -> Arc<ApiState> {
    Arc::new(ApiState {
        mailer,
        route,
        allowed_origins,
    })
}
