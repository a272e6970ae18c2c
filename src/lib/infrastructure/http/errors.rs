//! API error-handling module

use std::fmt;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::feedback::errors::SendFeedbackError;

/// An error response
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// The status code
    #[schema(example = 400, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Request could not be processed")]
    pub message: String,
}

/// An error raised in the API
#[derive(Debug, Deserialize, ToSchema)]
pub struct ApiError {
    /// The status code
    #[schema(example = 400, value_type = u16)]
    #[serde(with = "http_serde::status_code")]
    pub status: StatusCode,

    /// The error message
    #[schema(example = "Request could not be processed")]
    pub message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            status,
            message: message.to_string(),
        }
    }

    /// Create a new bad request error
    pub fn new_400(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                status: self.status,
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<SendFeedbackError> for ApiError {
    fn from(err: SendFeedbackError) -> Self {
        match err {
            SendFeedbackError::MissingRequiredFields => {
                ApiError::new_400("Missing required fields")
            }
            SendFeedbackError::SmtpNotConfigured => {
                ApiError::new_400("SMTP server or port not found")
            }
            SendFeedbackError::RecipientNotFound => ApiError::new_400("Recipient email not found"),
            SendFeedbackError::UnknownError(_) => {
                ApiError::new_400("Request could not be processed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(rejection.status(), &rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use testresult::TestResult;

    use crate::domain::feedback::errors::SendFeedbackError;

    use super::ApiError;

    #[tokio::test]
    async fn test_error_response_shape() -> TestResult {
        let error = ApiError::new_400("Missing required fields");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await?;
        assert_eq!(body, r#"{"status":400,"message":"Missing required fields"}"#);

        Ok(())
    }

    #[test]
    fn test_every_feedback_error_maps_to_bad_request() {
        let cases = [
            (
                SendFeedbackError::MissingRequiredFields,
                "Missing required fields",
            ),
            (
                SendFeedbackError::SmtpNotConfigured,
                "SMTP server or port not found",
            ),
            (
                SendFeedbackError::RecipientNotFound,
                "Recipient email not found",
            ),
            (
                SendFeedbackError::UnknownError(anyhow!("smtp rejected")),
                "Request could not be processed",
            ),
        ];

        for (err, message) in cases {
            let api_error = ApiError::from(err);

            assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
            assert_eq!(api_error.message, message);
        }
    }

    #[test]
    fn test_unknown_error_detail_is_not_echoed() {
        let api_error = ApiError::from(SendFeedbackError::UnknownError(anyhow!(
            "connection refused by 10.0.0.3:25"
        )));

        assert!(!api_error.message.contains("10.0.0.3"));
    }
}
