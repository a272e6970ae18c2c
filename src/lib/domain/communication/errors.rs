//! Error types for outbound email

use lettre::address::AddressError;
use thiserror::Error;

/// Email errors
#[derive(Debug, Error)]
pub enum EmailError {
    /// The configured sender or recipient address could not be parsed
    #[error("Invalid email address")]
    InvalidAddress,

    /// The SMTP transport is missing its server or port
    #[error("SMTP transport is not configured")]
    NotConfigured,

    /// Unknown error
    #[error(transparent)]
    UnknownError(anyhow::Error),
}

impl From<anyhow::Error> for EmailError {
    fn from(err: anyhow::Error) -> Self {
        EmailError::UnknownError(err)
    }
}

impl From<AddressError> for EmailError {
    fn from(_err: AddressError) -> Self {
        EmailError::InvalidAddress
    }
}

impl From<lettre::error::Error> for EmailError {
    fn from(err: lettre::error::Error) -> Self {
        EmailError::UnknownError(err.into())
    }
}
