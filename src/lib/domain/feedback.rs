//! Feedback submission domain

pub mod emails;
pub mod errors;
pub mod recipients;
pub mod sanitize;
pub mod service;
pub mod submission;
