//! Absence day counting within a window.
//!
//! This module sums the days each trip contributes to a date window,
//! clipping trips at the window edges and counting both endpoints of the
//! clipped range.

use chrono::NaiveDate;

use crate::models::Trip;

/// Sums the absence days that fall inside `[window_start, window_end]`.
///
/// Each trip is clipped to the window before counting, so a trip that
/// straddles a window edge contributes only its inside portion. Counting
/// is inclusive on both ends: a one-day clipped range counts as one day.
/// Trips entirely outside the window contribute nothing.
///
/// Trips are treated independently; overlapping trips both count in full.
///
/// # Arguments
///
/// * `trips` - The trips to count, in any order
/// * `window_start` - First day of the window (inclusive)
/// * `window_end` - Last day of the window (inclusive)
///
/// # Returns
///
/// The total number of absence days inside the window.
///
/// # Examples
///
/// ```
/// use absence_engine::calculation::calculate_days_in_window;
/// use absence_engine::models::Trip;
/// use chrono::NaiveDate;
///
/// let trip = Trip::new(
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 1, 10).unwrap(),
///     None,
/// );
///
/// // The window covers only the last 5 days of the trip
/// let days = calculate_days_in_window(
///     &[trip],
///     NaiveDate::from_ymd_opt(2023, 1, 6).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
/// );
/// assert_eq!(days, 5);
/// ```
pub fn calculate_days_in_window(
    trips: &[Trip],
    window_start: NaiveDate,
    window_end: NaiveDate,
) -> i64 {
    trips
        .iter()
        .filter_map(|trip| {
            let overlap_start = trip.start.max(window_start);
            let overlap_end = trip.end.min(window_end);

            (overlap_start <= overlap_end)
                .then(|| (overlap_end - overlap_start).num_days() + 1)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_trip(start: &str, end: &str) -> Trip {
        Trip::new(make_date(start), make_date(end), None)
    }

    #[test]
    fn test_empty_trip_list_counts_zero() {
        let days = calculate_days_in_window(&[], make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 0);
    }

    #[test]
    fn test_trip_fully_inside_window_counts_in_full() {
        let trips = vec![make_trip("2023-03-01", "2023-03-12")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 12);
    }

    #[test]
    fn test_trip_entirely_before_window_counts_zero() {
        let trips = vec![make_trip("2022-01-01", "2022-02-01")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 0);
    }

    #[test]
    fn test_trip_entirely_after_window_counts_zero() {
        let trips = vec![make_trip("2024-01-01", "2024-02-01")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 0);
    }

    #[test]
    fn test_trip_straddling_window_start_is_clipped() {
        // Only the January 1-5 portion falls inside the window
        let trips = vec![make_trip("2022-12-25", "2023-01-05")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 5);
    }

    #[test]
    fn test_trip_straddling_window_end_is_clipped() {
        let trips = vec![make_trip("2023-05-28", "2023-06-10")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-05-31"));
        assert_eq!(days, 4);
    }

    #[test]
    fn test_trip_spanning_entire_window_counts_window_length() {
        let trips = vec![make_trip("2022-12-01", "2024-02-01")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-01-31"));
        assert_eq!(days, 31);
    }

    #[test]
    fn test_single_day_overlap_counts_one() {
        let trips = vec![make_trip("2023-01-01", "2023-01-10")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-10"), make_date("2023-06-01"));
        assert_eq!(days, 1);
    }

    #[test]
    fn test_counting_is_inclusive_of_both_endpoints() {
        // Trip exactly coinciding with the window: both endpoints count
        let trips = vec![make_trip("2023-03-01", "2023-03-05")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-03-01"), make_date("2023-03-05"));
        assert_eq!(days, 5);
    }

    #[test]
    fn test_multiple_trips_sum() {
        let trips = vec![
            make_trip("2023-03-15", "2023-03-20"),
            make_trip("2023-06-10", "2023-06-15"),
        ];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 12);
    }

    #[test]
    fn test_mixed_inside_and_outside_trips() {
        let trips = vec![
            make_trip("2022-06-01", "2022-06-10"),
            make_trip("2023-02-01", "2023-02-07"),
            make_trip("2024-06-01", "2024-06-10"),
        ];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 7);
    }

    #[test]
    fn test_overlapping_trips_both_count() {
        // Overlapping trips are counted independently, not merged
        let trips = vec![
            make_trip("2023-03-01", "2023-03-10"),
            make_trip("2023-03-05", "2023-03-14"),
        ];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 20);
    }

    #[test]
    fn test_trip_ending_on_window_start_counts_one() {
        let trips = vec![make_trip("2022-12-20", "2023-01-01")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 1);
    }

    #[test]
    fn test_trip_starting_on_window_end_counts_one() {
        let trips = vec![make_trip("2023-12-31", "2024-01-10")];
        let days =
            calculate_days_in_window(&trips, make_date("2023-01-01"), make_date("2023-12-31"));
        assert_eq!(days, 1);
    }
}
