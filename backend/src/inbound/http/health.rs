//! Health endpoints: liveness and readiness probes for orchestrators and load
//! balancers.
//!
//! Probe bodies are outcome envelopes like every other response, so clients
//! can parse them with the same code path.
use actix_web::{HttpResponse, get, http::header, web};
use envelope::Outcome;
use std::sync::atomic::{AtomicBool, Ordering};

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

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn probe_response(probe_ok: bool, ok: &str, failed: &str) -> HttpResponse {
        let (mut response, body) = if probe_ok {
            (
                HttpResponse::Ok(),
                Outcome::<()>::acknowledged().with_message(ok),
            )
        } else {
            (
                HttpResponse::ServiceUnavailable(),
                Outcome::<()>::failure(failed),
            )
        };

        response
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .json(body)
    }
}

/// Readiness probe. Return 200 once the server can handle traffic and 503
/// otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = crate::inbound::http::schemas::AcknowledgedOutcomeSchema),
        (status = 503, description = "Server is not ready", body = crate::inbound::http::schemas::FailureOutcomeSchema)
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_ready(), "ready", "service is not ready")
}

/// Liveness probe. Return 200 while the process is marked alive and 503 once
/// draining. Call [`HealthState::mark_unhealthy`] before graceful shutdown.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = crate::inbound::http::schemas::AcknowledgedOutcomeSchema),
        (status = 503, description = "Server is shutting down", body = crate::inbound::http::schemas::FailureOutcomeSchema)
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    HealthState::probe_response(state.is_alive(), "alive", "service is shutting down")
}
