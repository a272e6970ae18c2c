//! Health check handler

use axum::{extract::State, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    domain::feedback::service::FeedbackService,
    infrastructure::http::{errors::ApiError, state::AppState},
};

/// The health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    /// The uptime of the application in seconds
    #[schema(example = 123)]
    pub uptime: i64,
}

/// Report that the service is up
#[utoipa::path(
    get,
    operation_id = "health_check",
    tag = "System",
    path = "/api/healthCheck",
    responses(
        (status = StatusCode::OK, description = "Health check response", body = HealthCheckResponse),
        (status = StatusCode::TOO_MANY_REQUESTS, description = "Too many requests"),
    )
)]
pub async fn handler<F: FeedbackService>(
    State(state): State<AppState<F>>,
) -> Result<Json<HealthCheckResponse>, ApiError> {
    let uptime = Utc::now().timestamp() - state.start_time.timestamp();

    Ok(Json(HealthCheckResponse { uptime }))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use chrono::Utc;
    use testresult::TestResult;

    use crate::infrastructure::http::{
        handlers::health_check::HealthCheckResponse, router, state::test_state,
    };

    #[tokio::test]
    async fn test_health_check_handler() -> TestResult {
        let state = test_state(None);
        let start_time = state.start_time;

        let response = TestServer::new(router(state))?.get("/api/healthCheck").await;

        let json = response.json::<HealthCheckResponse>();

        assert_eq!(
            json.uptime,
            Utc::now().timestamp() - start_time.timestamp(),
            "App uptime should be equal to the start time"
        );

        response.assert_status_ok();

        Ok(())
    }
}
