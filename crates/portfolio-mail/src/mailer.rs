//! Mail delivery.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, info};

use crate::config::MailConfig;
use crate::error::{MailError, MailResult};
use crate::message::OutgoingEmail;

/// What the relay said after accepting a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    /// Relay status line, e.g. `250 2.0.0 OK`.
    pub response: String,
}

/// Something that can deliver an [`OutgoingEmail`].
///
/// One call is one delivery attempt; implementations do not retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<DeliveryReport>;
}

/// How the connection to the relay is secured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsMode {
    /// TLS from the first byte (port 465).
    Implicit,
    /// Plain connection upgraded with `STARTTLS` (submission ports 587 and 25).
    StartTls,
}

impl TlsMode {
    pub fn for_port(port: Option<u16>) -> Self {
        match port {
            Some(587) | Some(25) => TlsMode::StartTls,
            _ => TlsMode::Implicit,
        }
    }
}

/// Authenticated SMTP relay over TLS.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build the transport. No connection is made until the first send.
    pub fn from_config(config: &MailConfig) -> MailResult<Self> {
        let credentials = Credentials::new(
            config.sender_user.clone(),
            config.sender_password.clone(),
        );

        let tls = TlsMode::for_port(config.smtp_port);
        let builder = match tls {
            TlsMode::Implicit => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host),
            TlsMode::StartTls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            }
        };
        let mut builder = builder
            .map_err(|e| MailError::InvalidConfig {
                key: "SMTP_HOST",
                message: e.to_string(),
            })?
            .credentials(credentials);
        if let Some(port) = config.smtp_port {
            builder = builder.port(port);
        }

        info!(
            host = %config.smtp_host,
            port = ?config.smtp_port,
            tls = ?tls,
            "smtp_transport_ready"
        );
        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> MailResult<DeliveryReport> {
        let message = email.to_message()?;
        debug!(to = %email.to, subject = %email.subject, "smtp_send");

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        let text = response.message().collect::<Vec<_>>().join(" ");
        Ok(DeliveryReport {
            response: format!("{} {}", response.code(), text),
        })
    }
}
