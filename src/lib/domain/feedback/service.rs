//! Feedback service

use std::sync::Arc;

use anyhow::Context;
use askama::Template;
use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

#[cfg(test)]
use mockall::mock;

use crate::domain::{
    communication::{email_addresses::EmailAddress, mailer::Mailer},
    feedback::{
        emails::feedback_email::FeedbackEmailTemplate, errors::SendFeedbackError,
        recipients::RecipientDirectory, submission::FeedbackSubmission,
    },
};

/// Mail settings consulted per submission.
///
/// All fields are optional so a missing setting surfaces as a per-request
/// error response rather than a startup failure, matching the widget's
/// deployed behavior.
#[derive(Clone, Debug, Default)]
pub struct MailSettings {
    /// The SMTP server hostname
    pub server: Option<String>,

    /// The SMTP server port
    pub port: Option<u16>,

    /// Subject line for relayed feedback emails
    pub subject: Option<String>,
}

impl MailSettings {
    /// Whether both the SMTP server and port are set
    pub fn is_configured(&self) -> bool {
        self.server.as_deref().is_some_and(|server| !server.is_empty()) && self.port.is_some()
    }
}

/// Feedback service
#[async_trait]
pub trait FeedbackService: Clone + Send + Sync + 'static {
    /// Relays a validated feedback submission to its resolved recipient.
    ///
    /// # Arguments
    /// * `submission` - The validated [`FeedbackSubmission`] to relay.
    ///
    /// # Returns
    /// A [`Result`] which is [`Ok`] once the email has been handed to the
    /// transport, or an [`Err`] containing a [`SendFeedbackError`] otherwise.
    async fn send_feedback(&self, submission: &FeedbackSubmission)
        -> Result<(), SendFeedbackError>;
}

#[cfg(test)]
mock! {
    pub FeedbackService {}

    impl Clone for FeedbackService {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl FeedbackService for FeedbackService {
        async fn send_feedback(&self, submission: &FeedbackSubmission) -> Result<(), SendFeedbackError>;
    }
}

/// Feedback service implementation
#[derive(Debug, Clone)]
pub struct FeedbackServiceImpl<M>
where
    M: Mailer,
{
    settings: MailSettings,
    recipients: RecipientDirectory,
    mailer: Arc<M>,
}

impl<M> FeedbackServiceImpl<M>
where
    M: Mailer,
{
    /// Creates a new feedback service
    pub fn new(settings: MailSettings, recipients: RecipientDirectory, mailer: Arc<M>) -> Self {
        Self {
            settings,
            recipients,
            mailer,
        }
    }
}

#[async_trait]
impl<M> FeedbackService for FeedbackServiceImpl<M>
where
    M: Mailer,
{
    async fn send_feedback(
        &self,
        submission: &FeedbackSubmission,
    ) -> Result<(), SendFeedbackError> {
        if !self.settings.is_configured() {
            return Err(SendFeedbackError::SmtpNotConfigured);
        }

        let template = FeedbackEmailTemplate::from_submission(submission, Utc::now());
        let html = template
            .render()
            .context("failed to render feedback email")?;

        let recipient = self
            .recipients
            .resolve(submission.site())
            .ok_or(SendFeedbackError::RecipientNotFound)?;

        let to = EmailAddress::new(recipient)
            .map_err(|err| SendFeedbackError::UnknownError(err.into()))?;

        let subject = self.settings.subject.as_deref().unwrap_or_default();

        self.mailer.send_email(&to, subject, &html).await?;

        debug!(site = %template.site, "feedback email sent");

        Ok(())
    }
}
