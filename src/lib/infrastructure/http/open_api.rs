//! OpenAPI module

use utoipa::OpenApi;

use crate::infrastructure::http::{errors::ErrorResponse, handlers::*};

#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Feedback Relay"),
    paths(send_feedback::handler, health_check::handler),
    components(schemas(
        send_feedback::SendFeedbackBody,
        send_feedback::SendFeedbackResponse,
        health_check::HealthCheckResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDocs;
