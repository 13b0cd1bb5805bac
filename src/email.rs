//! Outbound mail transport backed by lettre.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::config::SmtpSettings;

/// One outbound message: envelope plus rendered content.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp transport failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// The capability to send one email. Handlers take `&dyn Mailer` so tests
/// can substitute a recording fake for the SMTP transport.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;
}

/// SMTP-backed [`Mailer`]. Messages go out with the configured account as
/// the sender, displayed as the site's contact form.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds a transport from complete settings: implicit TLS when
    /// `secure` is set, STARTTLS otherwise. The connection itself is only
    /// opened on first send.
    pub fn new(settings: &SmtpSettings) -> Result<Self, EmailError> {
        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
        };
        let transport = builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.pass.clone(),
            ))
            .build();
        let from = format!("Formularz kontaktowy <{}>", settings.user).parse()?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(email.to.parse()?)
            .subject(email.subject.clone());
        if let Some(reply_to) = &email.reply_to {
            builder = builder.reply_to(reply_to.parse()?);
        }
        let message = builder
            .header(ContentType::TEXT_HTML)
            .body(email.html_body.clone())?;

        self.transport.send(message).await?;
        Ok(())
    }
}
