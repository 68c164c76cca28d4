//! Mapping of forecast errors onto HTTP responses.

use super::schema::ErrorResponse;
use crate::error::ForecastError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

/// Summary sent in the `error` field of every failure body.
pub const GENERIC_ERROR: &str = "An error occurred while generating the forecast";

/// Errors surfaced by the HTTP handlers.
#[derive(Debug)]
pub enum ApiError {
    Forecast(ForecastError),
    /// The body could not be decoded into a request.
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Forecast(err) => match err {
                ForecastError::InsufficientData { .. }
                | ForecastError::InvalidParameter(_)
                | ForecastError::DimensionMismatch { .. }
                | ForecastError::TimestampError(_)
                | ForecastError::MissingValues => StatusCode::BAD_REQUEST,
                ForecastError::FitRequired | ForecastError::ComputationError(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }

    pub fn details(&self) -> String {
        match self {
            ApiError::Forecast(err) => err.to_string(),
            ApiError::BadRequest(msg) => msg.clone(),
        }
    }
}

impl From<ForecastError> for ApiError {
    fn from(err: ForecastError) -> Self {
        ApiError::Forecast(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = self.details();
        error!(status = status.as_u16(), %details, "Forecast request failed");

        let body = ErrorResponse {
            error: GENERIC_ERROR.to_string(),
            details,
        };
        (status, Json(body)).into_response()
    }
}
