//! Utility functions for forecasting models.

pub mod stats;

pub use stats::{mean, mean_first_difference, round_to};
