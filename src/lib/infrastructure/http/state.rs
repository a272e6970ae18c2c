//! Application state module

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::feedback::service::FeedbackService;

/// Global application state
#[derive(Clone)]
pub struct AppState<F: FeedbackService> {
    /// The time the server started
    pub start_time: DateTime<Utc>,

    /// Feedback service
    pub feedback: Arc<F>,
}

impl<F> fmt::Debug for AppState<F>
where
    F: FeedbackService,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .field("feedback", &"FeedbackService")
            .finish()
    }
}

#[cfg(test)]
use crate::domain::feedback::service::MockFeedbackService;

#[cfg(test)]
pub fn test_state(feedback: Option<MockFeedbackService>) -> AppState<MockFeedbackService> {
    let feedback = feedback
        .map(Arc::new)
        .unwrap_or_else(|| Arc::new(MockFeedbackService::new()));

    AppState {
        start_time: Utc::now(),
        feedback,
    }
}
