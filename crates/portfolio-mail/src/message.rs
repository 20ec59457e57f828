//! Turning a submission into an email.

use askama::Template;
use lettre::message::{header::ContentType, Mailbox};
use lettre::{Address, Message};
use portfolio_core::ContactSubmission;
use tracing::debug;

use crate::config::MailConfig;
use crate::error::{MailError, MailResult};

const SUBJECT_PREFIX: &str = "New Contact Form Submission: ";

/// HTML body of a contact email. Fields are HTML-escaped on render.
#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate<'a> {
    full_name: &'a str,
    email: &'a str,
    mobile: &'a str,
    message: &'a str,
}

/// A fully composed email, ready for a [`Mailer`](crate::Mailer).
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub from: Mailbox,
    pub reply_to: Option<Mailbox>,
    pub to: Mailbox,
    pub subject: String,
    pub html: String,
}

impl OutgoingEmail {
    /// Assemble the MIME message.
    pub fn to_message(&self) -> MailResult<Message> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(self.subject.clone())
            .header(ContentType::TEXT_HTML);
        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(reply_to.clone());
        }
        builder
            .body(self.html.clone())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

/// Fixed sender and recipient for every submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRoute {
    sender: Address,
    recipient: Mailbox,
}

impl MailRoute {
    pub fn new(sender: Address, recipient: Mailbox) -> Self {
        Self { sender, recipient }
    }

    /// Parse both addresses from configuration.
    pub fn from_config(config: &MailConfig) -> MailResult<Self> {
        let sender = parse_address(&config.sender_user)?;
        let recipient = Mailbox::new(None, parse_address(&config.recipient)?);
        Ok(Self { sender, recipient })
    }

    pub fn sender(&self) -> &Address {
        &self.sender
    }

    pub fn recipient(&self) -> &Mailbox {
        &self.recipient
    }

    /// Compose the email for one submission.
    ///
    /// The message is sent from the configured sender under the visitor's
    /// name, with `Reply-To` set to the visitor's address when it parses.
    pub fn compose(&self, submission: &ContactSubmission) -> MailResult<OutgoingEmail> {
        let display_name = submission.full_name.trim();
        let display_name = (!display_name.is_empty()).then(|| display_name.to_string());

        let reply_to = match submission.email.trim().parse::<Address>() {
            Ok(address) => Some(Mailbox::new(display_name.clone(), address)),
            Err(e) => {
                debug!(email = %submission.email, error = %e, "reply_to_skipped");
                None
            }
        };

        let html = ContactTemplate {
            full_name: &submission.full_name,
            email: &submission.email,
            mobile: &submission.mobile,
            message: &submission.message,
        }
        .render()?;

        Ok(OutgoingEmail {
            from: Mailbox::new(display_name, self.sender.clone()),
            reply_to,
            to: self.recipient.clone(),
            subject: format!("{SUBJECT_PREFIX}{}", submission.subject),
            html,
        })
    }
}

fn parse_address(raw: &str) -> MailResult<Address> {
    raw.trim()
        .parse::<Address>()
        .map_err(|e| MailError::InvalidAddress {
            address: raw.to_string(),
            message: e.to_string(),
        })
}
