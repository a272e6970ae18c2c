//! Security response headers

use axum::http::{header, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Content Security Policy applied to every response.
///
/// Transcribed from the policy the feedback widget's pages are served with;
/// the openstreetmap entries cover the embedded map tiles.
const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    base-uri 'self'; \
    block-all-mixed-content; \
    font-src 'self' https: data:; \
    frame-ancestors 'self'; \
    img-src 'self' data: https://a.tile.openstreetmap.org https://b.tile.openstreetmap.org https://c.tile.openstreetmap.org; \
    object-src 'none'; \
    script-src 'self'; \
    script-src-attr 'none'; \
    style-src 'self' https: 'unsafe-inline'; \
    worker-src 'self' blob:; \
    connect-src 'self' https://eservices.gov.yk.ca";

/// Returns a layer that sets the `Content-Security-Policy` header
pub fn security_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY),
    )
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;
    use testresult::TestResult;

    use crate::infrastructure::http::{router, state::test_state};

    #[tokio::test]
    async fn test_responses_carry_content_security_policy() -> TestResult {
        let response = TestServer::new(router(test_state(None)))?
            .get("/api/healthCheck")
            .await;

        let header = response.header("content-security-policy");

        assert!(header.to_str()?.starts_with("default-src 'self'"));

        Ok(())
    }
}
