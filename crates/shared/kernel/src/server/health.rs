use axum::http::header;
use axum::{Json, response::IntoResponse};
use emapi_derive::{api_handler, api_model};
use emapi_domain::constants::{HEALTH_PATH, SYSTEM_TAG};
use std::sync::LazyLock;
use std::time::Instant;

#[api_model]
/// Health check response
pub struct HealthResponse {
    /// Always `up` while the process serves requests
    pub status: String,
    /// Crate version of the running build
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Pins the uptime origin; called when application state is finalized.
pub(super) fn mark_start() {
    LazyLock::force(&START_TIME);
}

#[api_handler(
    get,
    path = HEALTH_PATH,
    responses((status = OK, description = "Service is up", body = HealthResponse)),
    tag = SYSTEM_TAG,
)]
pub(super) async fn health_handler() -> impl IntoResponse {
    let body = HealthResponse {
        status: "up".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        uptime: START_TIME.elapsed().as_secs(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
