//! Health endpoints: liveness and readiness checks for orchestration and
//! load balancers, plus the JSON status consumed by the web client.

use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::{HttpResponse, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::HealthStatus;
use crate::inbound::http::cache_control::no_store_header;

/// Shared health state for readiness and liveness checks.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
        }
    }
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether readiness checks should pass.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// When false, liveness checks emit 503 to trigger restarts.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn check_response(healthy: bool) -> HttpResponse {
        let mut response = if healthy {
            HttpResponse::Ok()
        } else {
            HttpResponse::ServiceUnavailable()
        };

        response.insert_header(no_store_header()).finish()
    }
}

/// Status report returned by `/api/health` and `/api/ping`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// HTTP-style status code.
    #[schema(example = 200)]
    pub status: u16,
    /// RFC 3339 UTC timestamp.
    #[schema(example = "2024-05-01T12:30:00.000Z")]
    pub timestamp: String,
}

impl From<HealthStatus> for HealthResponse {
    fn from(report: HealthStatus) -> Self {
        Self {
            status: report.status(),
            timestamp: report.timestamp_rfc3339(),
        }
    }
}

fn status_response() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(no_store_header())
        .json(HealthResponse::from(HealthStatus::ok_now()))
}

/// Report backend status with the current time.
#[utoipa::path(
    get,
    path = "/api/health",
    tags = ["health"],
    responses((status = 200, description = "Backend is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn api_health() -> HttpResponse {
    status_response()
}

/// Alias of `/api/health` kept for uptime monitors.
#[utoipa::path(
    get,
    path = "/api/ping",
    tags = ["health"],
    responses((status = 200, description = "Backend is up", body = HealthResponse))
)]
#[get("/ping")]
pub async fn ping() -> HttpResponse {
    status_response()
}

/// Readiness check. Return 200 when dependencies are initialised and the
/// server can handle traffic; return 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic"),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::check_response(state.is_ready())
}

/// Liveness check. Return 200 while the process is marked alive and 503 once draining.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive"),
        (status = 503, description = "Server is shutting down")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::check_response(state.is_alive())
}
