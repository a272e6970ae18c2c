//! Email templates for the feedback module

pub mod feedback_email;
