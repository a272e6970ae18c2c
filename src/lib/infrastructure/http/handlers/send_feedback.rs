//! Send feedback handler

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::{
    domain::feedback::{service::FeedbackService, submission::FeedbackSubmission},
    infrastructure::http::{
        errors::{ApiError, ErrorResponse},
        state::AppState,
    },
};

/// Send feedback request body
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SendFeedbackBody {
    /// The domain the feedback widget is embedded on
    #[schema(example = "example.gov.yk.ca")]
    domain: Option<String>,

    /// The visitor's answer to "Was this page helpful?"
    #[schema(example = "Yes")]
    was_this_page_helpful: Option<String>,

    /// When the feedback was submitted
    #[schema(example = "2024-01-15T19:30:00Z")]
    submission_timestamp: Option<String>,

    /// The URL of the page the feedback was submitted from
    #[schema(example = "https://example.gov.yk.ca/services")]
    current_page_url: Option<String>,

    /// Free-text answer when the page was helpful
    how_did_this_page_help_you: Option<String>,

    /// Free-text answer when the page was not helpful
    how_can_we_improve_this_page: Option<String>,

    /// Language code of the submitting page
    #[schema(example = "en")]
    langcode: Option<String>,
}

impl TryFrom<SendFeedbackBody> for FeedbackSubmission {
    type Error = ApiError;

    fn try_from(body: SendFeedbackBody) -> Result<Self, Self::Error> {
        Ok(Self::new(
            body.domain.unwrap_or_default(),
            body.was_this_page_helpful.unwrap_or_default(),
            body.submission_timestamp.unwrap_or_default(),
            body.current_page_url.unwrap_or_default(),
            body.how_did_this_page_help_you,
            body.how_can_we_improve_this_page,
            body.langcode,
        )?)
    }
}

/// Send feedback response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendFeedbackResponse {
    /// The status code
    #[schema(example = 200, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The success indicator
    #[schema(example = "Feedback sent")]
    pub data: String,
}

/// Relay a feedback submission by email
#[utoipa::path(
    post,
    operation_id = "send_feedback",
    tag = "Feedback",
    path = "/api/remote-feedback/send-email",
    request_body = SendFeedbackBody,
    responses(
        (status = StatusCode::OK, description = "Feedback sent", body = SendFeedbackResponse),
        (status = StatusCode::BAD_REQUEST, description = "Submission could not be relayed", body = ErrorResponse, example = json!({"status": 400, "message": "Missing required fields"})),
        (status = StatusCode::TOO_MANY_REQUESTS, description = "Too many requests"),
    )
)]
pub async fn handler<F: FeedbackService>(
    State(state): State<AppState<F>>,
    request: Result<Json<SendFeedbackBody>, JsonRejection>,
) -> Result<Json<SendFeedbackResponse>, ApiError> {
    let Json(body) = request?;

    let submission: FeedbackSubmission = body.try_into()?;

    if let Err(err) = state.feedback.send_feedback(&submission).await {
        error!(error = %err, "could not process feedback submission");

        return Err(err.into());
    }

    Ok(Json(SendFeedbackResponse {
        status: StatusCode::OK,
        data: "Feedback sent".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use anyhow::anyhow;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::{
        domain::{
            communication::mailer::MockMailer,
            feedback::{
                errors::SendFeedbackError,
                recipients::RecipientDirectory,
                service::{FeedbackServiceImpl, MailSettings, MockFeedbackService},
            },
        },
        infrastructure::http::{
            errors::ErrorResponse,
            handlers::send_feedback::{SendFeedbackBody, SendFeedbackResponse},
            router,
            state::{test_state, AppState},
        },
    };

    fn body() -> SendFeedbackBody {
        SendFeedbackBody {
            domain: Some("site.ca".to_string()),
            was_this_page_helpful: Some("Yes".to_string()),
            submission_timestamp: Some("2024-01-15T19:30:00Z".to_string()),
            current_page_url: Some("https://site.ca/services".to_string()),
            how_did_this_page_help_you: Some("Found what I needed".to_string()),
            how_can_we_improve_this_page: None,
            langcode: Some("en".to_string()),
        }
    }

    #[tokio::test]
    async fn test_send_feedback_success() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_send_feedback()
            .times(1)
            .withf(|submission| submission.site() == "site.ca")
            .returning(|_| Ok(()));

        let response = TestServer::new(router(test_state(Some(feedback))))?
            .post("/api/remote-feedback/send-email")
            .json(&body())
            .await;

        let json = response.json::<SendFeedbackResponse>();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(json.status, StatusCode::OK);
        assert_eq!(json.data, "Feedback sent");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_required_field_is_rejected_before_the_service() -> TestResult {
        let mut feedback = MockFeedbackService::new();
        feedback.expect_send_feedback().times(0);

        let response = TestServer::new(router(test_state(Some(feedback))))?
            .post("/api/remote-feedback/send-email")
            .json(&SendFeedbackBody {
                domain: None,
                ..body()
            })
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, "Missing required fields");

        Ok(())
    }

    #[tokio::test]
    async fn test_empty_required_field_is_rejected() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .post("/api/remote-feedback/send-email")
            .json(&SendFeedbackBody {
                current_page_url: Some(String::new()),
                ..body()
            })
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, "Missing required fields");

        Ok(())
    }

    #[tokio::test]
    async fn test_smtp_config_error_response() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_send_feedback()
            .returning(|_| Err(SendFeedbackError::SmtpNotConfigured));

        let response = TestServer::new(router(test_state(Some(feedback))))?
            .post("/api/remote-feedback/send-email")
            .json(&body())
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, "SMTP server or port not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_unresolved_recipient_response() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_send_feedback()
            .returning(|_| Err(SendFeedbackError::RecipientNotFound));

        let response = TestServer::new(router(test_state(Some(feedback))))?
            .post("/api/remote-feedback/send-email")
            .json(&body())
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, "Recipient email not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_transport_failure_response() -> TestResult {
        let mut feedback = MockFeedbackService::new();

        feedback
            .expect_send_feedback()
            .returning(|_| Err(SendFeedbackError::UnknownError(anyhow!("smtp rejected"))));

        let response = TestServer::new(router(test_state(Some(feedback))))?
            .post("/api/remote-feedback/send-email")
            .json(&body())
            .await;

        let json = response.json::<ErrorResponse>();

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(json.message, "Request could not be processed");

        Ok(())
    }

    #[tokio::test]
    async fn test_end_to_end_send_with_mapped_domain() -> TestResult {
        let mut mailer = MockMailer::new();

        mailer
            .expect_send_email()
            .times(1)
            .withf(|to, _, html| {
                to.to_string() == "team@site.ca" && html.contains("How did this page help you?")
            })
            .returning(|_, _, _| Ok(()));

        let service = FeedbackServiceImpl::new(
            MailSettings {
                server: Some("smtp.gov.yk.ca".to_string()),
                port: Some(25),
                subject: Some("Website feedback".to_string()),
            },
            RecipientDirectory::new(
                HashMap::from([("site.ca".to_string(), "team@site.ca".to_string())]),
                None,
            ),
            Arc::new(mailer),
        );

        let state = AppState {
            start_time: chrono::Utc::now(),
            feedback: Arc::new(service),
        };

        let response = TestServer::new(router(state))?
            .post("/api/remote-feedback/send-email")
            .json(&body())
            .await;

        let json = response.json::<SendFeedbackResponse>();

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(json.data, "Feedback sent");

        Ok(())
    }
}
