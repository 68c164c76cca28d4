use axum::{extract::State, Json};
use std::sync::Arc;

use super::AppState;
use crate::api::schema::HealthResponse;

/// Liveness probe. Reports how many insight providers are wired in so a
/// deployment without any can be spotted from the outside.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        insight_providers: state.insights.len(),
    })
}
