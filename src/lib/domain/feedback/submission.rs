//! Validated feedback submission

use crate::domain::feedback::errors::SendFeedbackError;

/// A feedback submission whose required fields are known to be present
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackSubmission {
    /// The domain the feedback widget was embedded on
    pub domain: String,

    /// The visitor's answer to "Was this page helpful?"
    pub was_this_page_helpful: String,

    /// The raw submission timestamp as sent by the widget
    pub submission_timestamp: String,

    /// The URL of the page the feedback was submitted from
    pub current_page_url: String,

    /// Free-text answer when the page was helpful
    pub how_did_this_page_help_you: Option<String>,

    /// Free-text answer when the page was not helpful
    pub how_can_we_improve_this_page: Option<String>,

    /// Requested language code of the submitting page
    pub langcode: Option<String>,
}

impl FeedbackSubmission {
    /// Creates a submission, failing with
    /// [`SendFeedbackError::MissingRequiredFields`] unless `domain`,
    /// `was_this_page_helpful`, `submission_timestamp` and `current_page_url`
    /// are all non-empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        domain: String,
        was_this_page_helpful: String,
        submission_timestamp: String,
        current_page_url: String,
        how_did_this_page_help_you: Option<String>,
        how_can_we_improve_this_page: Option<String>,
        langcode: Option<String>,
    ) -> Result<Self, SendFeedbackError> {
        if domain.is_empty()
            || was_this_page_helpful.is_empty()
            || submission_timestamp.is_empty()
            || current_page_url.is_empty()
        {
            return Err(SendFeedbackError::MissingRequiredFields);
        }

        Ok(Self {
            domain,
            was_this_page_helpful,
            submission_timestamp,
            current_page_url,
            how_did_this_page_help_you,
            how_can_we_improve_this_page,
            langcode,
        })
    }

    /// The host-like prefix of the submitting domain, with everything from
    /// the first `/` onward removed.
    pub fn site(&self) -> &str {
        self.domain
            .split_once('/')
            .map(|(host, _)| host)
            .unwrap_or(&self.domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(domain: &str) -> FeedbackSubmission {
        FeedbackSubmission::new(
            domain.to_string(),
            "Yes".to_string(),
            "2024-01-15T19:30:00Z".to_string(),
            "https://example.gov.yk.ca/feedback".to_string(),
            None,
            None,
            None,
        )
        .expect("valid submission")
    }

    #[test]
    fn test_new_accepts_complete_submission() {
        let result = FeedbackSubmission::new(
            "site.ca".to_string(),
            "Yes".to_string(),
            "2024-01-15T19:30:00Z".to_string(),
            "https://site.ca/page".to_string(),
            Some("It answered my question".to_string()),
            None,
            Some("en".to_string()),
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_new_rejects_empty_required_fields() {
        for (domain, helpful, timestamp, url) in [
            ("", "Yes", "2024-01-15T19:30:00Z", "https://site.ca"),
            ("site.ca", "", "2024-01-15T19:30:00Z", "https://site.ca"),
            ("site.ca", "Yes", "", "https://site.ca"),
            ("site.ca", "Yes", "2024-01-15T19:30:00Z", ""),
        ] {
            let result = FeedbackSubmission::new(
                domain.to_string(),
                helpful.to_string(),
                timestamp.to_string(),
                url.to_string(),
                None,
                None,
                None,
            );

            assert!(matches!(
                result,
                Err(SendFeedbackError::MissingRequiredFields)
            ));
        }
    }

    #[test]
    fn test_site_strips_path_and_query() {
        assert_eq!(
            submission("example.gov.yk.ca/feedback?x=1").site(),
            "example.gov.yk.ca"
        );
    }

    #[test]
    fn test_site_without_path_is_unchanged() {
        assert_eq!(submission("example.gov.yk.ca").site(), "example.gov.yk.ca");
    }
}
