//! TimeSeries data structure for representing monthly observations.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};

/// A single dated observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Calendar month index in `0..12`.
    pub fn month0(&self) -> usize {
        self.date.month0() as usize
    }
}

/// A chronologically ordered univariate time series.
///
/// Dates and values are stored column-wise. Construction guarantees that
/// dates are strictly increasing and every value is finite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
    label: Option<String>,
}

impl TimeSeries {
    /// Create a series from parallel date and value vectors.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: dates.len(),
                got: values.len(),
            });
        }

        for i in 1..dates.len() {
            if dates[i] <= dates[i - 1] {
                return Err(ForecastError::TimestampError(format!(
                    "dates must be strictly increasing ({} follows {})",
                    dates[i],
                    dates[i - 1]
                )));
            }
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::MissingValues);
        }

        Ok(Self {
            dates,
            values,
            label: None,
        })
    }

    /// Create a series from a sequence of points.
    pub fn from_points<I>(points: I) -> Result<Self>
    where
        I: IntoIterator<Item = TimeSeriesPoint>,
    {
        let (dates, values) = points.into_iter().map(|p| (p.date, p.value)).unzip();
        Self::new(dates, values)
    }

    /// Attach a human-readable label (typically the metric name).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The most recent observation, if any.
    pub fn last(&self) -> Option<TimeSeriesPoint> {
        Some(TimeSeriesPoint {
            date: *self.dates.last()?,
            value: *self.values.last()?,
        })
    }

    /// Iterate over observations in chronological order.
    pub fn points(&self) -> impl Iterator<Item = TimeSeriesPoint> + '_ {
        self.dates
            .iter()
            .zip(&self.values)
            .map(|(&date, &value)| TimeSeriesPoint { date, value })
    }
}

/// Parse a calendar date from either `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are normalised to UTC before the date is taken.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| ForecastError::TimestampError(format!("unrecognised date '{}'", input)))
}

/// Format a date the way the service emits it (`YYYY-MM-DD`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
