//! Linear trend forecaster with optional monthly seasonality.
//!
//! The trend is the average first difference of the history. Each forecast
//! step `h` lands `h` calendar months after the last observation:
//!
//! ```text
//! y_hat[T+h] = y[T] + h * avg_change + s[month(T+h)]
//! ```
//!
//! where `s` is a [`SeasonalityProfile`] estimated when the history holds at
//! least [`SEASONAL_MIN_OBSERVATIONS`] points, and zero otherwise.

use crate::core::{Forecast, ForecastPoint, TimeSeries, TimeSeriesPoint};
use crate::error::{ForecastError, Result};
use crate::models::Forecaster;
use crate::seasonality::SeasonalityProfile;
use crate::utils::{mean_first_difference, round_to};
use chrono::{Datelike, Months, NaiveDate};

/// Fewest observations accepted by [`LinearTrend::fit`].
pub const MIN_OBSERVATIONS: usize = 4;

/// Fewest observations before a seasonality profile is estimated.
pub const SEASONAL_MIN_OBSERVATIONS: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq)]
struct FittedState {
    last: TimeSeriesPoint,
    avg_change: f64,
    profile: Option<SeasonalityProfile>,
}

/// Trend extrapolation forecaster.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use zambia_forecast::core::TimeSeries;
/// use zambia_forecast::models::{Forecaster, LinearTrend};
///
/// let dates: Vec<_> = (1..=4)
///     .map(|m| NaiveDate::from_ymd_opt(2023, m, 1).unwrap())
///     .collect();
/// let ts = TimeSeries::new(dates, vec![10.0, 12.0, 14.0, 16.0]).unwrap();
///
/// let mut model = LinearTrend::new();
/// model.fit(&ts).unwrap();
/// let forecast = model.predict(2).unwrap();
///
/// assert_eq!(forecast.values(), vec![18.0, 20.0]);
/// assert_eq!(forecast.dates()[0], NaiveDate::from_ymd_opt(2023, 5, 1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearTrend {
    seasonality: bool,
    precision: Option<u32>,
    state: Option<FittedState>,
}

impl LinearTrend {
    /// Trend with seasonality enabled and unrounded output.
    pub fn new() -> Self {
        Self {
            seasonality: true,
            precision: None,
            state: None,
        }
    }

    /// Enable or disable the monthly seasonality adjustment.
    pub fn with_seasonality(mut self, enabled: bool) -> Self {
        self.seasonality = enabled;
        self
    }

    /// Round forecast values to this many decimal places.
    pub fn with_precision(mut self, decimals: u32) -> Self {
        self.precision = Some(decimals);
        self
    }

    /// Average first difference estimated during fitting.
    pub fn avg_change(&self) -> Option<f64> {
        self.state.map(|s| s.avg_change)
    }

    /// Seasonality profile, if one was estimated.
    pub fn seasonality_profile(&self) -> Option<&SeasonalityProfile> {
        self.state.as_ref().and_then(|s| s.profile.as_ref())
    }

    fn step_date(last: NaiveDate, step: usize) -> Result<NaiveDate> {
        let months = u32::try_from(step).map_err(|_| {
            ForecastError::ComputationError(format!("forecast step {} is too large", step))
        })?;
        last.checked_add_months(Months::new(months)).ok_or_else(|| {
            ForecastError::ComputationError(format!(
                "date overflow adding {} months to {}",
                months, last
            ))
        })
    }
}

impl Default for LinearTrend {
    fn default() -> Self {
        Self::new()
    }
}

impl Forecaster for LinearTrend {
    fn fit(&mut self, series: &TimeSeries) -> Result<()> {
        // A failed refit must not leave the previous series' state behind.
        self.state = None;

        if series.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::InsufficientData {
                needed: MIN_OBSERVATIONS,
                got: series.len(),
            });
        }

        let last = series.last().ok_or(ForecastError::InsufficientData {
            needed: MIN_OBSERVATIONS,
            got: 0,
        })?;

        let avg_change = mean_first_difference(series.values());
        if !avg_change.is_finite() {
            return Err(ForecastError::ComputationError(
                "average change is not finite".to_string(),
            ));
        }

        let profile = if self.seasonality && series.len() >= SEASONAL_MIN_OBSERVATIONS {
            SeasonalityProfile::from_series(series)
        } else {
            None
        };

        self.state = Some(FittedState {
            last,
            avg_change,
            profile,
        });

        Ok(())
    }

    fn predict(&self, horizon: usize) -> Result<Forecast> {
        let state = self.state.ok_or(ForecastError::FitRequired)?;

        let mut points = Vec::with_capacity(horizon);
        for step in 1..=horizon {
            let date = Self::step_date(state.last.date, step)?;
            let mut value = state.last.value + state.avg_change * step as f64;
            if let Some(profile) = &state.profile {
                value += profile.offset(date.month0() as usize);
            }
            if let Some(decimals) = self.precision {
                value = round_to(value, decimals);
            }
            points.push(ForecastPoint::new(date, value));
        }

        Ok(Forecast::from_points(points))
    }

    fn name(&self) -> &str {
        "LinearTrend"
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }
}

/// Fit a default [`LinearTrend`] and forecast `periods` months ahead.
pub fn forecast(series: &TimeSeries, periods: usize) -> Result<Forecast> {
    let mut model = LinearTrend::new();
    model.fit(series)?;
    model.predict(periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn monthly(start: NaiveDate, values: &[f64]) -> TimeSeries {
        TimeSeries::from_points(values.iter().enumerate().map(|(i, &v)| {
            TimeSeriesPoint::new(start + Months::new(i as u32), v)
        }))
        .unwrap()
    }

    #[test]
    fn continues_linear_progression() {
        let ts = monthly(date(2023, 1, 1), &[10.0, 12.0, 14.0, 16.0]);
        let forecast = forecast(&ts, 2).unwrap();

        assert_eq!(forecast.dates(), vec![date(2023, 5, 1), date(2023, 6, 1)]);
        assert_eq!(forecast.values(), vec![18.0, 20.0]);
    }

    #[test]
    fn insufficient_data_is_rejected() {
        let ts = monthly(date(2023, 1, 1), &[1.0, 2.0, 3.0]);
        let mut model = LinearTrend::new();
        assert_eq!(
            model.fit(&ts).unwrap_err(),
            ForecastError::InsufficientData { needed: 4, got: 3 }
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn failed_refit_discards_previous_fit() {
        let mut model = LinearTrend::new();
        model.fit(&monthly(date(2023, 1, 1), &[1.0, 2.0, 3.0, 4.0])).unwrap();
        assert!(model.is_fitted());

        let err = model
            .fit(&monthly(date(2024, 1, 1), &[100.0, 50.0]))
            .unwrap_err();
        assert_eq!(err, ForecastError::InsufficientData { needed: 4, got: 2 });
        assert!(!model.is_fitted());
        assert!(model.avg_change().is_none());
        assert_eq!(model.predict(1).unwrap_err(), ForecastError::FitRequired);
    }

    #[test]
    fn zero_periods_yields_empty_forecast() {
        let ts = monthly(date(2023, 1, 1), &[1.0, 2.0, 3.0, 4.0]);
        let forecast = forecast(&ts, 0).unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn requires_fit_before_predict() {
        let model = LinearTrend::new();
        assert_eq!(model.predict(3).unwrap_err(), ForecastError::FitRequired);
    }

    #[test]
    fn short_series_has_no_seasonality() {
        let values: Vec<f64> = (0..11).map(|i| (i % 3) as f64 * 10.0).collect();
        let mut model = LinearTrend::new();
        model.fit(&monthly(date(2022, 1, 1), &values)).unwrap();
        assert!(model.seasonality_profile().is_none());
    }

    #[test]
    fn seasonal_offsets_are_added_per_target_month() {
        // Flat level with a December spike repeated for two years.
        let values: Vec<f64> = (0..24)
            .map(|i| if i % 12 == 11 { 112.0 } else { 100.0 })
            .collect();
        let mut model = LinearTrend::new();
        model.fit(&monthly(date(2021, 1, 1), &values)).unwrap();

        let avg_change = model.avg_change().unwrap();
        let profile = *model.seasonality_profile().unwrap();
        // Mean of monthly averages is 101, so December sits 11 above.
        assert_relative_eq!(profile.offset(11), 11.0, epsilon = 1e-9);
        assert_relative_eq!(profile.offset(0), -1.0, epsilon = 1e-9);

        let forecast = model.predict(12).unwrap();
        for (i, point) in forecast.points().iter().enumerate() {
            let step = (i + 1) as f64;
            let expected =
                112.0 + avg_change * step + profile.offset(point.date.month0() as usize);
            assert_relative_eq!(point.value, expected, epsilon = 1e-9);
        }
        assert_eq!(forecast.dates()[0], date(2023, 1, 1));
    }

    #[test]
    fn seasonality_can_be_disabled() {
        let values: Vec<f64> = (0..24)
            .map(|i| if i % 12 == 11 { 112.0 } else { 100.0 })
            .collect();
        let ts = monthly(date(2021, 1, 1), &values);

        let mut model = LinearTrend::new().with_seasonality(false);
        model.fit(&ts).unwrap();
        assert!(model.seasonality_profile().is_none());

        let avg_change = model.avg_change().unwrap();
        let forecast = model.predict(3).unwrap();
        assert_relative_eq!(forecast.values()[2], 112.0 + 3.0 * avg_change, epsilon = 1e-9);
    }

    #[test]
    fn precision_rounds_output() {
        let ts = monthly(date(2023, 1, 1), &[1.0, 1.5, 2.25, 2.0]);
        // avg change = 1/3
        let mut model = LinearTrend::new().with_precision(2);
        model.fit(&ts).unwrap();
        assert_eq!(model.predict(2).unwrap().values(), vec![2.33, 2.67]);
    }

    #[test]
    fn month_end_dates_clamp_without_drifting() {
        let dates = vec![
            date(2023, 8, 31),
            date(2023, 9, 30),
            date(2023, 10, 31),
            date(2024, 1, 31),
        ];
        let ts = TimeSeries::new(dates, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let forecast = forecast(&ts, 3).unwrap();
        assert_eq!(
            forecast.dates(),
            vec![date(2024, 2, 29), date(2024, 3, 31), date(2024, 4, 30)]
        );
    }

    #[test]
    fn extrapolation_is_not_clamped() {
        let ts = monthly(date(2023, 1, 1), &[30.0, 20.0, 10.0, 0.0]);
        let forecast = forecast(&ts, 3).unwrap();
        assert_eq!(forecast.values(), vec![-10.0, -20.0, -30.0]);
    }

    #[test]
    fn date_overflow_is_a_computation_error() {
        let last = NaiveDate::MAX - chrono::Duration::days(40);
        let dates: Vec<NaiveDate> = (0..4)
            .rev()
            .map(|i| last - chrono::Duration::days(i))
            .collect();
        let ts = TimeSeries::new(dates, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(matches!(
            forecast(&ts, 3),
            Err(ForecastError::ComputationError(_))
        ));
    }

    #[test]
    fn non_finite_trend_is_a_computation_error() {
        let ts = monthly(date(2023, 1, 1), &[-f64::MAX, f64::MAX, -f64::MAX, f64::MAX]);
        assert!(matches!(
            forecast(&ts, 1),
            Err(ForecastError::ComputationError(_))
        ));
    }

    #[test]
    fn name_is_correct() {
        assert_eq!(LinearTrend::new().name(), "LinearTrend");
    }
}
