//! Report rendering for calculation results.
//!
//! This module turns analysis rows and a status result into the two
//! output surfaces: a machine-readable JSON document and a human-readable
//! text report with a ruled per-trip table and a status block.
//!
//! Rendering is pure: both renderers return strings and never print or
//! exit, leaving stream handling to the caller.

mod json;
mod text;

pub use json::{JsonReport, ReportConfig, ReportStatus, ReportTrip};
pub use text::{render_status, render_trip_analysis};
