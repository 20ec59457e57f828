//! Contact form delivery over SMTP.
//!
//! A [`ContactSubmission`](portfolio_core::ContactSubmission) is turned into an
//! [`OutgoingEmail`] by a [`MailRoute`] and handed to a [`Mailer`]. The
//! production mailer is [`SmtpMailer`], a thin wrapper over
//! [lettre](https://lettre.rs)'s async SMTP transport.
//!
//! ## Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `EMAIL_USER` | Yes | SMTP login, also the sender address |
//! | `EMAIL_PASS` | Yes | SMTP password or app password |
//! | `RECIPIENT_EMAIL` | Yes | Where submissions are delivered |
//! | `SMTP_HOST` | No | Relay host (default: `smtp.gmail.com`) |
//! | `SMTP_PORT` | No | Relay port (default 465, implicit TLS; 587 and 25 use STARTTLS) |

mod config;
mod error;
mod mailer;
mod message;

pub use config::{MailConfig, DEFAULT_SMTP_HOST};
pub use error::{MailError, MailResult};
pub use mailer::{DeliveryReport, Mailer, SmtpMailer, TlsMode};
pub use message::{MailRoute, OutgoingEmail};
