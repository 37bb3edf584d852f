//! Trip ingestion from delimited text.
//!
//! This module converts raw multi-line text (pasted, typed or read from a
//! file) into a sorted list of [`Trip`] values. Each non-blank line holds
//! at least two comma- or tab-delimited cells: start date, end date and an
//! optional notes cell.

use tracing::debug;

use crate::models::Trip;

use super::date::{is_header_row, parse_date};

/// Parses delimited text into trips sorted ascending by end date.
///
/// Behavior, in order:
///
/// - lines are split on `\n` (a trailing `\r` is stripped, so `\r\n` input
///   works); blank and whitespace-only lines are discarded;
/// - cells are split on comma or tab (mixed delimiters across lines are
///   tolerated) and trimmed; lines with fewer than two cells are skipped;
/// - the first line with at least two cells is header-checked once; a
///   header-like line later in the input is NOT auto-skipped, it simply
///   fails date parsing and is dropped like any other invalid row;
/// - rows whose dates do not parse are dropped silently, as are rows whose
///   end date precedes their start date;
/// - a non-empty third cell becomes the trip's notes;
/// - the result is stably sorted ascending by end date, so ties keep
///   their input order.
///
/// This function never fails: malformed input yields fewer trips, and
/// empty input yields an empty list.
///
/// # Examples
///
/// ```
/// use absence_engine::parsing::parse_trips_from_text;
///
/// let trips = parse_trips_from_text("Start,End\n25.05.2023,10.08.2023\n");
/// assert_eq!(trips.len(), 1);
/// assert_eq!(trips[0].days, 78);
/// ```
pub fn parse_trips_from_text(text: &str) -> Vec<Trip> {
    let mut trips = Vec::new();
    let mut first_row = true;

    for (line_number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let cells: Vec<&str> = line
            .split(|c| c == ',' || c == '\t')
            .map(str::trim)
            .collect();

        if cells.len() < 2 {
            debug!(line = line_number + 1, "skipping line with fewer than two cells");
            continue;
        }

        // The header check runs at most once, on the first qualifying line.
        if first_row {
            first_row = false;
            if is_header_row(&cells) {
                debug!(line = line_number + 1, "skipping detected header row");
                continue;
            }
        }

        let (Some(start), Some(end)) = (parse_date(cells[0]), parse_date(cells[1])) else {
            debug!(line = line_number + 1, "skipping row with unparseable dates");
            continue;
        };

        if end < start {
            debug!(
                line = line_number + 1,
                "skipping row whose end date precedes its start date"
            );
            continue;
        }

        let notes = cells
            .get(2)
            .filter(|cell| !cell.is_empty())
            .map(|cell| cell.to_string());

        trips.push(Trip::new(start, end, notes));
    }

    trips.sort_by_key(|trip| trip.end);
    trips
}
