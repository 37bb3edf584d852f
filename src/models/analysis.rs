//! Analysis output models.
//!
//! This module contains the per-trip [`AnalysisRow`], the aggregate
//! [`StatusResult`], and the [`ComplianceStatus`] classification produced
//! by the window calculator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Trip;

/// Compliance classification for one evaluation date.
///
/// Serializes to the lowercase wire words `"ok"`, `"caution"` and
/// `"exceeded"` used by the JSON report.
///
/// # Example
///
/// ```
/// use absence_engine::models::ComplianceStatus;
///
/// let status = ComplianceStatus::Caution;
/// assert_eq!(status.to_string(), "caution");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    /// Within the limit with a comfortable margin.
    Ok,
    /// Within the limit but under the warning threshold.
    Caution,
    /// Over the absence limit.
    Exceeded,
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStatus::Ok => write!(f, "ok"),
            ComplianceStatus::Caution => write!(f, "caution"),
            ComplianceStatus::Exceeded => write!(f, "exceeded"),
        }
    }
}

/// Per-trip analysis output.
///
/// For each trip, the rolling window ends on that trip's end date; the row
/// records the absence total inside that window and the remaining
/// allowance (which may be negative when the limit is exceeded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRow {
    /// The source trip.
    pub trip: Trip,
    /// Absence days in the window ending on this trip's end date.
    pub days_in_window: i64,
    /// `absence_limit - days_in_window`; negative when over the limit.
    pub days_remaining: i64,
}

/// Aggregate compliance result for a single evaluation date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResult {
    /// The evaluation date the window ends on.
    pub target_date: NaiveDate,
    /// Whether an explicit evaluation date was supplied (as opposed to
    /// the caller's "today").
    pub is_custom_date: bool,
    /// End date of the chronologically last trip.
    pub last_trip_end: NaiveDate,
    /// Whole days between the last trip's end and the target date.
    /// Not inclusive, and negative when the target date precedes the
    /// last trip's end.
    pub days_since_last_trip: i64,
    /// Start of the rolling window, `window_months` before the target date.
    pub window_start: NaiveDate,
    /// End of the rolling window. Always equals `target_date`.
    pub window_end: NaiveDate,
    /// Total absence days inside the window.
    pub total_days_outside: i64,
    /// `absence_limit - total_days_outside`; negative when over the limit.
    pub days_remaining: i64,
    /// The compliance classification.
    pub status: ComplianceStatus,
}
