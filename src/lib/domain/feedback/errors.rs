//! Error types for the feedback module

use thiserror::Error;

use crate::domain::communication::errors::EmailError;

/// An error that can occur while processing a feedback submission
#[derive(Debug, Error)]
pub enum SendFeedbackError {
    /// One or more required submission fields are missing or empty
    #[error("missing required fields")]
    MissingRequiredFields,

    /// The SMTP server or port is not configured
    #[error("SMTP server or port is not configured")]
    SmtpNotConfigured,

    /// No recipient could be resolved for the submitting domain
    #[error("no recipient email could be resolved")]
    RecipientNotFound,

    /// Unknown error
    #[error(transparent)]
    UnknownError(#[from] anyhow::Error),
}

impl From<EmailError> for SendFeedbackError {
    fn from(err: EmailError) -> Self {
        SendFeedbackError::UnknownError(err.into())
    }
}
