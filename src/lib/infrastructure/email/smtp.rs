//! SMTP mail transport implementation

use async_trait::async_trait;
use clap::Parser;
use lettre::{message::SinglePart, Message, SmtpTransport, Transport};

use crate::domain::{
    communication::{email_addresses::EmailAddress, errors::EmailError, mailer::Mailer},
    feedback::service::MailSettings,
};

/// SMTP configuration
///
/// Every field is optional: a missing server or port is reported per request
/// by the feedback service rather than failing startup.
#[derive(Clone, Default, Debug, Parser)]
pub struct SmtpConfig {
    /// The SMTP server hostname
    #[clap(long, env = "SMTP_SERVER")]
    pub server: Option<String>,

    /// The SMTP server port
    #[clap(long, env = "SMTP_PORT")]
    pub port: Option<u16>,

    /// The sender address for relayed feedback
    #[clap(long, env = "EMAIL_FROM")]
    pub from: Option<String>,

    /// The subject line for relayed feedback
    #[clap(long, env = "EMAIL_SUBJECT")]
    pub subject: Option<String>,

    /// Fallback recipient when no domain entry matches
    #[clap(long, env = "EMAIL_DEFAULT")]
    pub default_recipient: Option<String>,
}

impl From<&SmtpConfig> for MailSettings {
    fn from(config: &SmtpConfig) -> Self {
        Self {
            server: config.server.clone(),
            port: config.port,
            subject: config.subject.clone(),
        }
    }
}

/// SMTP mailer
///
/// Relays over a plain connection to the configured host and port, the way
/// the internal relay expects; no credentials are involved.
#[derive(Debug, Default, Clone)]
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Creates a new SMTP mailer
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<SmtpTransport, EmailError> {
        let server = self
            .config
            .server
            .as_deref()
            .filter(|server| !server.is_empty())
            .ok_or(EmailError::NotConfigured)?;

        let port = self.config.port.ok_or(EmailError::NotConfigured)?;

        Ok(SmtpTransport::builder_dangerous(server).port(port).build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send_email(
        &self,
        to: &EmailAddress,
        subject: &str,
        html: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(self.config.from.as_deref().unwrap_or_default().parse()?)
            .to(to.to_string().parse()?)
            .subject(subject.to_string())
            .singlepart(SinglePart::html(String::from(html)))?;

        match self.transport()?.send(&email) {
            Ok(_) => Ok(()),
            Err(e) => Err(EmailError::UnknownError(e.into())),
        }
    }
}
