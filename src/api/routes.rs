use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{self, AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    // Dashboards call these endpoints straight from the browser.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/api/v1/time-series-forecast",
            post(handlers::time_series_forecast),
        )
        .route(
            "/api/v1/ai-enhanced-forecast",
            post(handlers::ai_enhanced_forecast),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Router with state attached, ready to serve.
pub fn app(state: AppState) -> Router {
    create_routes().with_state(Arc::new(state))
}
