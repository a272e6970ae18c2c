//! HTTP Server

use std::{
    net::{Ipv4Addr, SocketAddr, TcpListener},
    sync::Arc,
    time::Duration,
};

use anyhow::{anyhow, Context};
use axum::{
    extract::Request,
    routing::{get, post},
    Json, Router,
};
use axum_server::Handle;
use chrono::Utc;
use clap::Parser;
use tokio::signal;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, info_span};
use utoipa::OpenApi;

use crate::domain::feedback::service::FeedbackService;

use open_api::ApiDocs;
use rate_limit::RateLimitConfig;
use state::AppState;

pub mod errors;
pub mod handlers;
pub mod open_api;
pub mod rate_limit;
pub mod security;
pub mod state;

/// Configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
pub struct HttpServerConfig {
    /// The port to listen on
    #[arg(short, long, env = "API_PORT", default_value = "3000")]
    pub port: u16,
}

/// The application's HTTP server
#[derive(Debug)]
pub struct HttpServer {
    router: Router,
    listener: TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        feedback_service: impl FeedbackService,
        config: HttpServerConfig,
    ) -> anyhow::Result<Self> {
        let state = AppState {
            start_time: Utc::now(),
            feedback: Arc::new(feedback_service),
        };

        let rate_limit = RateLimitConfig::default();
        let governor_config = Arc::new(
            GovernorConfigBuilder::default()
                .per_second(rate_limit.per_second)
                .burst_size(rate_limit.burst_size)
                .error_handler(rate_limit::rate_limit_error_handler)
                .finish()
                .ok_or_else(|| anyhow!("invalid rate limit configuration"))?,
        );

        let router = router(state).layer(GovernorLayer {
            config: governor_config,
        });

        let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
        let listener = TcpListener::bind(address)
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    #[mutants::skip]
    pub async fn run(self) -> anyhow::Result<()> {
        debug!("listening on {}", self.listener.local_addr()?);

        let handle = Handle::new();

        // The rate limiter keys on the peer IP, which needs connect info
        let server = axum_server::from_tcp(self.listener)
            .handle(handle.clone())
            .serve(
                self.router
                    .into_make_service_with_connect_info::<SocketAddr>(),
            );

        tokio::select! {
            result = server => result.context("server error")?,
            _ = shutdown_signal(Some(handle)) => {
                info!("shutting down HTTP server");
            }
        }

        Ok(())
    }
}

/// Create the application's router
pub fn router<F: FeedbackService>(state: AppState<F>) -> Router {
    let trace_layer = TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
        let uri = request.uri().to_string();
        info_span!("http_request", method = ?request.method(), uri)
    });

    Router::new()
        .route("/openapi.json", get(Json(ApiDocs::openapi())))
        .route("/api/healthCheck", get(handlers::health_check::handler))
        .route(
            "/api/remote-feedback/send-email",
            post(handlers::send_feedback::handler),
        )
        .layer(security::security_headers_layer())
        .layer(trace_layer)
        .with_state(state)
}

#[mutants::skip]
async fn shutdown_signal(handle: Option<Handle>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    if let Some(handle) = handle {
        debug!("shutting down gracefully");
        handle.graceful_shutdown(Some(Duration::from_secs(10)));
    }
}
