//! Mail relay configuration.

use std::fmt;

use tracing::info;

use crate::error::{MailError, MailResult};

/// Relay used when `SMTP_HOST` is unset.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

const EMAIL_USER: &str = "EMAIL_USER";
const EMAIL_PASS: &str = "EMAIL_PASS";
const RECIPIENT_EMAIL: &str = "RECIPIENT_EMAIL";
const SMTP_HOST: &str = "SMTP_HOST";
const SMTP_PORT: &str = "SMTP_PORT";

/// Credentials and routing for the SMTP relay.
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    /// SMTP login; also used as the envelope sender.
    pub sender_user: String,
    /// SMTP password.
    pub sender_password: String,
    /// Address that receives every submission.
    pub recipient: String,
    pub smtp_host: String,
    /// Overrides the relay's implicit-TLS port.
    pub smtp_port: Option<u16>,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("sender_user", &self.sender_user)
            .field("sender_password", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}

impl MailConfig {
    pub fn new(
        sender_user: impl Into<String>,
        sender_password: impl Into<String>,
        recipient: impl Into<String>,
    ) -> Self {
        Self {
            sender_user: sender_user.into(),
            sender_password: sender_password.into(),
            recipient: recipient.into(),
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: None,
        }
    }

    /// Load from the process environment.
    pub fn from_env() -> MailResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` to resolve each variable.
    ///
    /// Empty values count as missing. Every missing key is reported in one
    /// error so the operator can fix them together.
    pub fn from_lookup<F>(lookup: F) -> MailResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            let value = lookup(key).filter(|v| !v.trim().is_empty());
            info!(
                key,
                found = if value.is_some() { "yes" } else { "no" },
                "mail_config_check"
            );
            value
        };

        let sender_user = required(EMAIL_USER);
        let sender_password = required(EMAIL_PASS);
        let recipient = required(RECIPIENT_EMAIL);

        let (Some(sender_user), Some(sender_password), Some(recipient)) =
            (sender_user.clone(), sender_password.clone(), recipient.clone())
        else {
            let keys = [
                (EMAIL_USER, sender_user.is_none()),
                (EMAIL_PASS, sender_password.is_none()),
                (RECIPIENT_EMAIL, recipient.is_none()),
            ]
            .into_iter()
            .filter_map(|(key, missing)| missing.then_some(key))
            .collect();
            return Err(MailError::MissingConfig { keys });
        };

        let smtp_host = lookup(SMTP_HOST)
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());

        let smtp_port = match lookup(SMTP_PORT).filter(|p| !p.trim().is_empty()) {
            Some(raw) => Some(raw.trim().parse::<u16>().map_err(|e| {
                MailError::InvalidConfig {
                    key: SMTP_PORT,
                    message: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            sender_user: sender_user.trim().to_string(),
            sender_password,
            recipient: recipient.trim().to_string(),
            smtp_host,
            smtp_port,
        })
    }
}
