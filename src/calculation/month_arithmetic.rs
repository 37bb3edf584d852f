//! Calendar-aware month arithmetic.
//!
//! This module provides month offsets with day-of-month clamping, the
//! operation that anchors a rolling window of N months to a concrete
//! start date.

use chrono::{Months, NaiveDate};

/// Shifts a date by a signed number of calendar months, clamping the day.
///
/// The month and year advance (or rewind) by the offset; the day-of-month
/// is kept where possible and otherwise clamped to the last day of the
/// resulting month. So `2023-01-31 + 1` is `2023-02-28`, and the same
/// shift from a leap year lands on `2024-02-29`.
///
/// Clamping makes the operation non-invertible: `add_months(add_months(d,
/// n), -n)` can land earlier than `d` when `d` sits past the short
/// month's end, never later.
///
/// # Arguments
///
/// * `date` - The anchor date
/// * `months` - The signed month offset; negative values shift backwards
///
/// # Returns
///
/// The shifted date.
///
/// # Panics
///
/// Panics if the shift leaves chrono's supported calendar range
/// (roughly +/- 262,000 years), which cannot happen for any date and
/// window length accepted by this crate.
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::add_months;
/// use chrono::NaiveDate;
///
/// let jan_31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
/// assert_eq!(add_months(jan_31, 1), NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
///
/// let target = NaiveDate::from_ymd_opt(2023, 9, 20).unwrap();
/// assert_eq!(add_months(target, -12), NaiveDate::from_ymd_opt(2022, 9, 20).unwrap());
/// ```
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };

    shifted.expect("month shift left the supported calendar range")
}
