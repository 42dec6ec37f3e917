//! Health check handler

use std::sync::Arc;
use std::time::Instant;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{ItemFilter, Store};

/// Health check state
#[derive(Clone)]
pub struct HealthState {
    pub store: Arc<dyn Store>,
    pub started_at: Arc<Instant>,
}

/// Service health response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub storage: ComponentHealth,
}

/// Component health status
#[derive(Debug, Serialize, ToSchema)]
pub struct ComponentHealth {
    pub status: String,
    pub items: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    let storage = match state.store.list_items(&ItemFilter::default()).await {
        Ok(items) => ComponentHealth {
            status: "up".to_string(),
            items: Some(items.len()),
        },
        Err(_) => ComponentHealth {
            status: "down".to_string(),
            items: None,
        },
    };

    Json(HealthResponse {
        status: if storage.status == "up" { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        storage,
    })
}
