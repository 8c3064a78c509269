//! Slider-percentage to date-range mapping.
//!
//! The date-range widget emits a pair of percentages in `[0, 100]`. This
//! module interpolates them linearly across host-supplied date bounds at
//! whole-day resolution.

use chrono::{Days, NaiveDate};
use incident_map_filter_models::TimeWindow;
use thiserror::Error;

/// Error returned when slider percentages are out of bounds or out of
/// order. The widget layer is responsible for never producing this; the
/// guard exists because this is a boundary contract, not a UI assumption.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid slider range [{low}, {high}]: expected 0 <= low <= high <= 100")]
pub struct InvalidRangeError {
    /// The low slider value.
    pub low: f64,
    /// The high slider value.
    pub high: f64,
}

/// Maps a slider pair onto a date window within `bounds`.
///
/// Each percentage lands `span * pct / 100` days past the start of the
/// bounds, rounded to the nearest whole day, so `[0, 100]` reproduces the
/// bounds exactly and `[50, 50]` is a single midpoint date.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] unless `0 <= low <= high <= 100`.
pub fn slider_to_window(
    low: f64,
    high: f64,
    bounds: &TimeWindow,
) -> Result<TimeWindow, InvalidRangeError> {
    let out_of_range = |value: f64| !value.is_finite() || !(0.0..=100.0).contains(&value);
    if out_of_range(low) || out_of_range(high) || low > high {
        return Err(InvalidRangeError { low, high });
    }

    let start = interpolate(bounds, low);
    let end = interpolate(bounds, high);
    // low <= high makes the interpolated dates ordered.
    TimeWindow::new(start, end).map_err(|_| InvalidRangeError { low, high })
}

fn interpolate(bounds: &TimeWindow, pct: f64) -> NaiveDate {
    let span_days = (bounds.end() - bounds.start()).num_days();
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = (span_days as f64 * pct / 100.0).round() as u64;
    bounds
        .start()
        .checked_add_days(Days::new(offset))
        .unwrap_or(bounds.end())
}
