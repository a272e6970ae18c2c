//! Mail transport trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::mock;

use crate::domain::communication::{email_addresses::EmailAddress, errors::EmailError};

/// Mail transport
#[async_trait]
pub trait Mailer: Clone + Send + Sync + 'static {
    /// Send an HTML email
    ///
    /// # Arguments
    /// * `to` - The [`EmailAddress`] to send the email to.
    /// * `subject` - The subject of the email.
    /// * `html` - The HTML body of the email.
    ///
    /// # Returns
    /// A [`Result`] indicating success or failure.
    async fn send_email(
        &self,
        to: &EmailAddress,
        subject: &str,
        html: &str,
    ) -> Result<(), EmailError>;
}

#[cfg(test)]
mock! {
    pub Mailer {}

    impl Clone for Mailer {
        fn clone(&self) -> Self;
    }

    #[async_trait]
    impl Mailer for Mailer {
        async fn send_email(&self, to: &EmailAddress, subject: &str, html: &str) -> Result<(), EmailError>;
    }
}
