//! Probes

use chrono::{DateTime, Utc};
use mcc_infrastructure::AppContext;
use rocket::serde::json::{Json, Value, json};
use rocket::{State, get};
use serde::Serialize;

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `healthy` when the process answers
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Backing cache store
    pub cache_store: String,
    /// Category served when a trending request names none
    pub default_trending_type: String,
    /// Server time
    pub now: DateTime<Utc>,
}

/// Health check with the wiring of the running instance
#[get("/health")]
pub fn health(context: &State<AppContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        cache_store: context.catalog().store_name().to_string(),
        default_trending_type: context.trending().default_type().to_string(),
        now: context.clock().now(),
    })
}

/// Liveness probe
#[get("/live")]
pub fn live() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}
