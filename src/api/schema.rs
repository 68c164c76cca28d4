//! JSON request and response bodies.
//!
//! Field names follow the camelCase wire format the dashboard already sends.

use crate::core::{format_date, ForecastPoint};
use serde::{Deserialize, Serialize};

/// A historical observation as sent by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub x: String,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRequest {
    #[serde(default)]
    pub time_series_data: Vec<DataPoint>,
    #[serde(default)]
    pub periods_to_forecast: Option<usize>,
    #[serde(default)]
    pub metric_name: Option<String>,
}

impl ForecastRequest {
    /// Borrowed `(date, value)` pairs for the forecast service.
    pub fn observations(&self) -> Vec<(&str, f64)> {
        self.time_series_data
            .iter()
            .map(|point| (point.x.as_str(), point.y))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPointBody {
    pub x: String,
    pub y: f64,
    pub is_forecast: bool,
}

impl From<ForecastPoint> for ForecastPointBody {
    fn from(point: ForecastPoint) -> Self {
        Self {
            x: format_date(point.date),
            y: point.value,
            is_forecast: point.is_forecast(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Vec<ForecastPointBody>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedForecastResponse {
    pub forecast: Vec<ForecastPointBody>,
    pub ai_insights: String,
    pub message: String,
}

/// Liveness report with the number of configured insight providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub insight_providers: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}
