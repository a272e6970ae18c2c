//! Feedback email template

use askama::Template;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::America::Whitehorse;

use crate::domain::feedback::{sanitize::strip_html, submission::FeedbackSubmission};

/// Prompt shown when the visitor answered "Yes"
const HELPFUL_PROMPT: &str = "How did this page help you?";

/// Prompt shown for any other answer
const IMPROVE_PROMPT: &str = "How can we improve this page?";

/// Feedback email template
///
/// Derived once per submission, rendered once, then discarded.
#[derive(Debug, Template)]
#[template(path = "emails/feedback.html")]
pub struct FeedbackEmailTemplate {
    /// Formatted submission time
    pub submitted_on: String,

    /// The submitting domain with any path suffix stripped
    pub site: String,

    /// Full language name of the submitting page
    pub lang: String,

    /// The prompt the visitor answered
    pub email_label: String,

    /// Sanitized free-text answer
    pub email_content: String,

    /// The URL of the page the feedback was submitted from
    pub url_from: String,
}

impl FeedbackEmailTemplate {
    /// Derives the template fields from a validated submission.
    ///
    /// `now` is the fallback instant used when the submission timestamp does
    /// not parse; the caller supplies it so the derivation stays
    /// deterministic under test.
    pub fn from_submission(submission: &FeedbackSubmission, now: DateTime<Utc>) -> Self {
        let helpful = strip_html(&submission.was_this_page_helpful);

        let (email_label, comment) = if helpful == "Yes" {
            (HELPFUL_PROMPT, &submission.how_did_this_page_help_you)
        } else {
            (IMPROVE_PROMPT, &submission.how_can_we_improve_this_page)
        };

        Self {
            submitted_on: format_submitted_on(&submission.submission_timestamp, now),
            site: submission.site().to_string(),
            lang: language_name(submission.langcode.as_deref()).to_string(),
            email_label: email_label.to_string(),
            email_content: strip_html(comment.as_deref().unwrap_or_default()),
            url_from: submission.current_page_url.clone(),
        }
    }
}

/// Maps a submission language code to its full English name.
///
/// Anything other than `en` or `fr`, including a missing code, is reported
/// as English.
pub fn language_name(langcode: Option<&str>) -> &'static str {
    match langcode {
        Some("fr") => "French",
        _ => "English",
    }
}

/// Formats a raw submission timestamp for the email body.
///
/// An unparseable timestamp falls back to `now`. The instant then has a
/// fixed 7 hours subtracted before being formatted in `America/Whitehorse`;
/// the offset is not DST-aware, matching the widget's historical behavior.
pub fn format_submitted_on(raw: &str, now: DateTime<Utc>) -> String {
    let submitted = parse_timestamp(raw).unwrap_or(now) - Duration::hours(7);

    submitted
        .with_timezone(&Whitehorse)
        .format("%A, %B %-d, %Y at %-I:%M %p")
        .to_string()
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.and_utc());
    }

    // Date-only submissions are taken as UTC midnight
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}
