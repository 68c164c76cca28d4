use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;
use tracing::info;

use super::AppState;
use crate::api::error::ApiError;
use crate::api::schema::{
    EnhancedForecastResponse, ForecastPointBody, ForecastRequest, ForecastResponse,
};
use crate::insights::InsightContext;
use crate::models::LinearTrend;

/// Decimal places kept in enriched forecasts.
const ENHANCED_PRECISION: u32 = 2;

/// Trend and seasonality forecast.
pub async fn time_series_forecast(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let Json(request) = payload?;

    let outcome = state.service.run(
        &request.observations(),
        request.periods_to_forecast,
        request.metric_name.as_deref(),
        Box::new(LinearTrend::new()),
    )?;

    let message = format!(
        "Successfully generated forecast for {} for the next {} periods",
        outcome.metric_name, outcome.periods
    );

    Ok(Json(ForecastResponse {
        forecast: outcome.forecast.into_iter().map(ForecastPointBody::from).collect(),
        message,
    }))
}

/// Same forecast, rounded, with commentary from the insight chain.
pub async fn ai_enhanced_forecast(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ForecastRequest>, JsonRejection>,
) -> Result<Json<EnhancedForecastResponse>, ApiError> {
    let Json(request) = payload?;

    let outcome = state.service.run(
        &request.observations(),
        request.periods_to_forecast,
        request.metric_name.as_deref(),
        Box::new(LinearTrend::new().with_precision(ENHANCED_PRECISION)),
    )?;

    let history: Vec<_> = outcome.history.points().collect();
    let context = InsightContext {
        metric_name: &outcome.metric_name,
        history: &history,
        forecast: outcome.forecast.points(),
    };
    let ai_insights = state.insights.describe(&context).await;

    info!(
        metric = %outcome.metric_name,
        points = outcome.forecast.horizon(),
        "Generated forecast points with AI insights"
    );

    Ok(Json(EnhancedForecastResponse {
        forecast: outcome.forecast.into_iter().map(ForecastPointBody::from).collect(),
        ai_insights,
        message: format!("AI-enhanced forecast generated for {}", outcome.metric_name),
    }))
}
