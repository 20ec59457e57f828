//! Contact form payload.

use serde::{Deserialize, Serialize};

/// One contact form submission, as posted by the front-end.
///
/// Fields are free-form text and are forwarded as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub subject: String,
    pub message: String,
}
