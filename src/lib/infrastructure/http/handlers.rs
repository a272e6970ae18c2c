//! HTTP request handlers

pub mod health_check;
pub mod send_feedback;
