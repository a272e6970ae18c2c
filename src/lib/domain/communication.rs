//! Outbound email communication

pub mod email_addresses;
pub mod errors;
pub mod mailer;
