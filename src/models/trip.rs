//! Trip model.
//!
//! This module defines the [`Trip`] struct representing one continuous
//! absence from the home jurisdiction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents one continuous absence from the home jurisdiction.
///
/// A trip is an immutable value: it is created once by the trip parser and
/// never mutated afterwards. All dates are calendar dates with no
/// time-of-day component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// The first day spent outside the home jurisdiction (inclusive).
    pub start: NaiveDate,
    /// The last day spent outside the home jurisdiction (inclusive).
    /// Invariant: `end >= start`.
    pub end: NaiveDate,
    /// The inclusive day count, `(end - start in days) + 1`.
    /// Invariant: `days >= 1`.
    pub days: i64,
    /// Optional free-text label. Not involved in any calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Trip {
    /// Creates a trip from its date range, computing the inclusive day count.
    ///
    /// Callers must ensure `end >= start`; the trip parser rejects rows
    /// that would violate this before constructing a `Trip`.
    ///
    /// # Examples
    ///
    /// ```
    /// use absence_engine::models::Trip;
    /// use chrono::NaiveDate;
    ///
    /// let trip = Trip::new(
    ///     NaiveDate::from_ymd_opt(2023, 5, 25).unwrap(),
    ///     NaiveDate::from_ymd_opt(2023, 8, 10).unwrap(),
    ///     None,
    /// );
    /// assert_eq!(trip.days, 78);
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate, notes: Option<String>) -> Self {
        debug_assert!(end >= start, "trip end must not precede start");
        let days = (end - start).num_days() + 1;
        Self {
            start,
            end,
            days,
            notes,
        }
    }
}
