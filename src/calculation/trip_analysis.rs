//! Per-trip rolling-window analysis.
//!
//! This module evaluates one rolling window per trip, each ending on that
//! trip's end date, and reports the absence total and remaining allowance
//! for every window.

use tracing::debug;

use crate::models::{AnalysisRow, CalculationConfig, Trip};

use super::{add_months, calculate_days_in_window};

/// Analyzes every trip against its own trailing window.
///
/// For each trip the window ends on the trip's end date and starts
/// `window_months` calendar months earlier (day-clamped). The absence
/// total inside that window counts ALL trips clipped to it, not just the
/// trip the row belongs to, so each row answers "how did things stand the
/// day this trip ended".
///
/// Rows come back in input order. Callers that pass a list sorted
/// ascending by end date (as the trip parser produces) therefore get rows
/// in chronological order.
///
/// # Arguments
///
/// * `trips` - The trips to analyze
/// * `config` - The window length and absence limit
///
/// # Returns
///
/// One [`AnalysisRow`] per input trip. An empty input yields an empty
/// list.
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::analyze_trips;
/// use absence_engine::models::{CalculationConfig, Trip};
/// use chrono::NaiveDate;
///
/// let trips = vec![Trip::new(
///     NaiveDate::from_ymd_opt(2023, 5, 25).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 8, 10).unwrap(),
///     None,
/// )];
/// let config = CalculationConfig {
///     window_months: 12,
///     absence_limit: 180,
///     evaluation_date: None,
/// };
///
/// let rows = analyze_trips(&trips, &config);
/// assert_eq!(rows[0].days_in_window, 78);
/// assert_eq!(rows[0].days_remaining, 102);
/// ```
pub fn analyze_trips(trips: &[Trip], config: &CalculationConfig) -> Vec<AnalysisRow> {
    trips
        .iter()
        .map(|trip| {
            let window_end = trip.end;
            let window_start = add_months(window_end, -(config.window_months as i32));
            let days_in_window = calculate_days_in_window(trips, window_start, window_end);

            debug!(
                window_start = %window_start,
                window_end = %window_end,
                days_in_window,
                "analyzed trip window"
            );

            AnalysisRow {
                trip: trip.clone(),
                days_in_window,
                days_remaining: config.absence_limit - days_in_window,
            }
        })
        .collect()
}
