//! Input parsing for the absence calculation engine.
//!
//! This module converts free-form text into the engine's domain models:
//! the date parser turns a single cell of text into a calendar date, and
//! the trip parser turns delimited multi-line text into a sorted trip list.
//!
//! Parsing never fails with an error: unparseable cells and malformed rows
//! are skip decisions, and the worst outcome is an empty trip list.

mod date;
mod trips;

pub use date::{DATE_FORMATS, format_date, is_header_row, parse_date};
pub use trips::parse_trips_from_text;
