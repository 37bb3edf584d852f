//! Aggregate compliance status calculation.
//!
//! This module evaluates a single rolling window ending on the evaluation
//! date and classifies the outcome as ok, caution or exceeded against a
//! limit-derived warning threshold.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationConfig, ComplianceStatus, StatusResult, Trip};

use super::{add_months, calculate_days_in_window};

/// Upper bound on the warning threshold in days.
pub const MAX_WARNING_THRESHOLD: i64 = 30;

/// Computes the caution margin for an absence limit.
///
/// The threshold is 15% of the limit, rounded up, capped at
/// [`MAX_WARNING_THRESHOLD`] days. The arithmetic is exact integer math,
/// so a limit of 180 yields precisely 27.
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::warning_threshold;
///
/// assert_eq!(warning_threshold(180), 27);
/// assert_eq!(warning_threshold(90), 14);
/// assert_eq!(warning_threshold(400), 30);
/// ```
pub fn warning_threshold(absence_limit: i64) -> i64 {
    // ceil(limit * 0.15) without going through floating point
    let fifteen_percent = (absence_limit * 15 + 99) / 100;
    fifteen_percent.min(MAX_WARNING_THRESHOLD)
}

/// Evaluates compliance for the window ending on the evaluation date.
///
/// The evaluation date is `config.evaluation_date` when set, otherwise the
/// caller-supplied `today`; the clock is never read here. The window runs
/// from `window_months` calendar months before that date (day-clamped)
/// through the date itself, inclusive on both ends.
///
/// The classification uses the remaining allowance: negative means
/// [`ComplianceStatus::Exceeded`], under the warning threshold means
/// [`ComplianceStatus::Caution`], and everything else is
/// [`ComplianceStatus::Ok`]. At exactly the threshold the status is ok.
///
/// # Arguments
///
/// * `trips` - The trips to evaluate, in any order
/// * `config` - The window length, absence limit and optional explicit
///   evaluation date
/// * `today` - The caller's current UTC calendar date, used when no
///   explicit evaluation date is configured
///
/// # Returns
///
/// The [`StatusResult`] for the window, or [`EngineError::NoTrips`] when
/// the trip list is empty.
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::calculate_status;
/// use absence_engine::models::{CalculationConfig, ComplianceStatus, Trip};
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
///     evaluation_date: NaiveDate::from_ymd_opt(2024, 1, 1),
/// };
///
/// let result = calculate_status(&trips, &config, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .unwrap();
/// assert_eq!(result.total_days_outside, 78);
/// assert_eq!(result.status, ComplianceStatus::Ok);
/// ```
pub fn calculate_status(
    trips: &[Trip],
    config: &CalculationConfig,
    today: NaiveDate,
) -> EngineResult<StatusResult> {
    let last_trip_end = trips
        .iter()
        .map(|trip| trip.end)
        .max()
        .ok_or(EngineError::NoTrips)?;

    let target_date = config.evaluation_date.unwrap_or(today);
    let is_custom_date = config.evaluation_date.is_some();

    let window_start = add_months(target_date, -(config.window_months as i32));
    let total_days_outside = calculate_days_in_window(trips, window_start, target_date);
    let days_remaining = config.absence_limit - total_days_outside;

    let threshold = warning_threshold(config.absence_limit);
    let status = if days_remaining < 0 {
        ComplianceStatus::Exceeded
    } else if days_remaining < threshold {
        ComplianceStatus::Caution
    } else {
        ComplianceStatus::Ok
    };

    debug!(
        target_date = %target_date,
        window_start = %window_start,
        total_days_outside,
        days_remaining,
        threshold,
        %status,
        "calculated compliance status"
    );

    Ok(StatusResult {
        target_date,
        is_custom_date,
        last_trip_end,
        days_since_last_trip: (target_date - last_trip_end).num_days(),
        window_start,
        window_end: target_date,
        total_days_outside,
        days_remaining,
        status,
    })
}
