//! Statistical utility functions.

/// Calculate the mean of a slice.
///
/// Returns NaN for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Average of the first differences `y[i] - y[i-1]`.
///
/// Computed as an explicit sum of differences rather than the telescoped
/// `(last - first) / (n - 1)`, so rounding matches a step-by-step average.
/// Returns NaN when fewer than two values are supplied.
///
/// # Example
/// ```
/// use zambia_forecast::utils::mean_first_difference;
///
/// let avg = mean_first_difference(&[10.0, 12.0, 14.0, 16.0]);
/// assert!((avg - 2.0).abs() < 1e-12);
/// ```
pub fn mean_first_difference(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let sum: f64 = values.windows(2).map(|w| w[1] - w[0]).sum();
    sum / (values.len() - 1) as f64
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
