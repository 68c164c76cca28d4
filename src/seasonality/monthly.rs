//! Naive additive monthly seasonality.

use crate::core::TimeSeries;

/// Number of calendar months in a seasonal cycle.
pub const MONTHS_PER_YEAR: usize = 12;

/// Additive per-calendar-month offsets.
///
/// Each month's offset is the average of all observations falling in that
/// month minus the mean of the monthly averages. Months without observations
/// have no offset and are left out of that mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalityProfile {
    offsets: [Option<f64>; MONTHS_PER_YEAR],
}

impl SeasonalityProfile {
    /// Estimate the profile from a series.
    ///
    /// Returns `None` when the series is empty.
    pub fn from_series(series: &TimeSeries) -> Option<Self> {
        let mut sums = [0.0; MONTHS_PER_YEAR];
        let mut counts = [0usize; MONTHS_PER_YEAR];

        for point in series.points() {
            let month = point.month0();
            sums[month] += point.value;
            counts[month] += 1;
        }

        let mut averages = [None; MONTHS_PER_YEAR];
        for month in 0..MONTHS_PER_YEAR {
            if counts[month] > 0 {
                averages[month] = Some(sums[month] / counts[month] as f64);
            }
        }

        let observed: Vec<f64> = averages.iter().flatten().copied().collect();
        if observed.is_empty() {
            return None;
        }
        let overall = crate::utils::mean(&observed);

        let mut offsets = [None; MONTHS_PER_YEAR];
        for month in 0..MONTHS_PER_YEAR {
            offsets[month] = averages[month].map(|avg| avg - overall);
        }

        Some(Self { offsets })
    }

    /// Offset for a calendar month index (`0` = January).
    ///
    /// Unobserved months and out-of-range indices yield `0.0`.
    pub fn offset(&self, month0: usize) -> f64 {
        self.offsets.get(month0).copied().flatten().unwrap_or(0.0)
    }

    /// Whether a month had at least one observation.
    pub fn is_observed(&self, month0: usize) -> bool {
        matches!(self.offsets.get(month0), Some(Some(_)))
    }

    /// Number of calendar months with observations.
    pub fn observed_months(&self) -> usize {
        self.offsets.iter().filter(|o| o.is_some()).count()
    }

    /// Offsets for all twelve months, with zero for unobserved months.
    pub fn offsets(&self) -> [f64; MONTHS_PER_YEAR] {
        let mut out = [0.0; MONTHS_PER_YEAR];
        for (month, slot) in out.iter_mut().enumerate() {
            *slot = self.offset(month);
        }
        out
    }
}
