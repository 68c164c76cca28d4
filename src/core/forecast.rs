//! Forecast result structure for holding predictions.

use chrono::NaiveDate;

/// A generated future observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl ForecastPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Always true; distinguishes generated points from history downstream.
    pub fn is_forecast(&self) -> bool {
        true
    }
}

/// An ordered sequence of forecast points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Create an empty forecast.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    /// Get the forecast horizon (number of steps).
    pub fn horizon(&self) -> usize {
        self.points.len()
    }

    /// Check if forecast is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

impl IntoIterator for Forecast {
    type Item = ForecastPoint;
    type IntoIter = std::vec::IntoIter<ForecastPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
