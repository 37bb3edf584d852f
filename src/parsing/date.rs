//! Multi-format date parsing and header detection.
//!
//! This module parses free-form date text against an ordered list of
//! candidate formats and classifies whether a row of cells looks like a
//! column-label header rather than data.

use chrono::NaiveDate;

/// Supported date formats, tried in order. First match wins.
///
/// The order is semantically load-bearing: the European day-first slash
/// and dash forms come before their US month-first counterparts, so an
/// ambiguous date like `05/12/2023` always resolves to day 5 of December.
pub const DATE_FORMATS: &[&str] = &[
    "%d.%m.%Y", // dd.mm.yyyy
    "%d/%m/%Y", // dd/mm/yyyy
    "%d-%m-%Y", // dd-mm-yyyy
    "%Y-%m-%d", // yyyy-mm-dd
    "%Y/%m/%d", // yyyy/mm/dd
    "%Y.%m.%d", // yyyy.mm.dd
    "%m/%d/%Y", // mm/dd/yyyy (US form)
    "%m-%d-%Y", // mm-dd-yyyy (US form)
    "%d %b %Y", // dd Mon yyyy
    "%d %B %Y", // dd Month yyyy
];

/// Keywords that mark a cell as a column label rather than a date.
const HEADER_KEYWORDS: &[&str] = &[
    "start",
    "end",
    "begin",
    "from",
    "to",
    "departure",
    "arrival",
    "date",
];

/// Attempts to parse a date string against the supported formats.
///
/// The input is trimmed first. Each format is a fully-anchored match:
/// trailing text after a date makes the candidate fail rather than match
/// partially. Calendar-illegal dates (month outside 1-12, day overflowing
/// the month's actual length, Feb 29 outside leap years) fail the
/// candidate the same way.
///
/// Returns `None` when no format matches. Parsing never panics and never
/// returns an error: an unparseable date is a skip decision for the
/// caller, not a fault.
///
/// # Examples
///
/// ```
/// use absence_engine::parsing::parse_date;
/// use chrono::NaiveDate;
///
/// // Ambiguous slash dates resolve day-first
/// assert_eq!(
///     parse_date("05/12/2023"),
///     NaiveDate::from_ymd_opt(2023, 12, 5),
/// );
///
/// // Feb 30 does not exist in any year
/// assert_eq!(parse_date("30.02.2023"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Checks whether a row of cells is likely a column-label header.
///
/// A row with fewer than two cells is never a header. Otherwise the row is
/// a header if either of the first two cells (trimmed, lowercased)
/// contains a header keyword such as `start`, `end` or `date`, or, failing
/// that, if either of the first two cells does not parse as a date. A row
/// whose first two cells are both valid dates and keyword-free is data.
///
/// # Examples
///
/// ```
/// use absence_engine::parsing::is_header_row;
///
/// assert!(is_header_row(&["Start", "End"]));
/// assert!(is_header_row(&["col_a", "col_b"]));
/// assert!(!is_header_row(&["25.05.2023", "10.08.2023"]));
/// ```
pub fn is_header_row(cells: &[&str]) -> bool {
    if cells.len() < 2 {
        return false;
    }

    let first = cells[0].trim().to_lowercase();
    let second = cells[1].trim().to_lowercase();

    if HEADER_KEYWORDS
        .iter()
        .any(|keyword| first.contains(keyword) || second.contains(keyword))
    {
        return true;
    }

    // A row that isn't recognizably two dates is assumed to be labels.
    parse_date(cells[0]).is_none() || parse_date(cells[1]).is_none()
}

/// Renders a date as zero-padded `dd.mm.yyyy`.
///
/// This is the wire date format of the JSON report and the display format
/// of the text report.
///
/// # Examples
///
/// ```
/// use absence_engine::parsing::format_date;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2023, 5, 9).unwrap();
/// assert_eq!(format_date(date), "09.05.2023");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
