//! JSON report document.
//!
//! This module defines the wire shape of the JSON report: camelCase field
//! names, dates rendered as `dd.mm.yyyy` strings, and the three top-level
//! sections `config`, `trips` and `status`.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AnalysisRow, CalculationConfig, ComplianceStatus, StatusResult};
use crate::parsing::format_date;

/// The `config` section of the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportConfig {
    /// Length of the rolling window in months.
    pub window_months: u32,
    /// Maximum allowed absence days within the window.
    pub absence_limit: i64,
}

/// One entry of the `trips` section of the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTrip {
    /// Trip start date as `dd.mm.yyyy`.
    pub start: String,
    /// Trip end date as `dd.mm.yyyy`.
    pub end: String,
    /// Inclusive trip length in days.
    pub days: i64,
    /// Absence days in the window ending on this trip's end date.
    pub days_in_window: i64,
    /// Remaining allowance for that window; negative when over the limit.
    pub days_remaining: i64,
}

/// The `status` section of the JSON report.
///
/// Whether the evaluation date was explicit or the caller's "today" is
/// deliberately not part of the document; the dates speak for themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatus {
    /// The evaluation date as `dd.mm.yyyy`.
    pub target_date: String,
    /// End date of the chronologically last trip as `dd.mm.yyyy`.
    pub last_trip_end: String,
    /// Whole days between the last trip's end and the target date.
    pub days_since_last_trip: i64,
    /// Start of the rolling window as `dd.mm.yyyy`.
    pub window_start: String,
    /// End of the rolling window as `dd.mm.yyyy`.
    pub window_end: String,
    /// Total absence days inside the window.
    pub total_days_outside: i64,
    /// Remaining allowance; negative when over the limit.
    pub days_remaining: i64,
    /// The compliance classification (`"ok"`, `"caution"` or `"exceeded"`).
    pub status: ComplianceStatus,
}

/// The complete JSON report document.
///
/// # Example
///
/// ```
/// use absence_engine::calculation::{analyze_trips, calculate_status};
/// use absence_engine::models::CalculationConfig;
/// use absence_engine::parsing::parse_trips_from_text;
/// use absence_engine::report::JsonReport;
/// use chrono::NaiveDate;
///
/// let trips = parse_trips_from_text("25.05.2023,10.08.2023\n");
/// let config = CalculationConfig {
///     window_months: 12,
///     absence_limit: 180,
///     evaluation_date: NaiveDate::from_ymd_opt(2024, 1, 1),
/// };
/// let rows = analyze_trips(&trips, &config);
/// let status = calculate_status(&trips, &config, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .unwrap();
///
/// let report = JsonReport::build(&config, &rows, &status);
/// let json = report.render().unwrap();
/// assert!(json.contains("\"daysInWindow\": 78"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonReport {
    /// The calculation parameters the report was produced with.
    pub config: ReportConfig,
    /// Per-trip window analysis, in the order the rows were supplied.
    pub trips: Vec<ReportTrip>,
    /// The aggregate compliance status.
    pub status: ReportStatus,
}

impl JsonReport {
    /// Assembles the report document from calculation outputs.
    pub fn build(
        config: &CalculationConfig,
        rows: &[AnalysisRow],
        status: &StatusResult,
    ) -> Self {
        JsonReport {
            config: ReportConfig {
                window_months: config.window_months,
                absence_limit: config.absence_limit,
            },
            trips: rows
                .iter()
                .map(|row| ReportTrip {
                    start: format_date(row.trip.start),
                    end: format_date(row.trip.end),
                    days: row.trip.days,
                    days_in_window: row.days_in_window,
                    days_remaining: row.days_remaining,
                })
                .collect(),
            status: ReportStatus {
                target_date: format_date(status.target_date),
                last_trip_end: format_date(status.last_trip_end),
                days_since_last_trip: status.days_since_last_trip,
                window_start: format_date(status.window_start),
                window_end: format_date(status.window_end),
                total_days_outside: status.total_days_outside,
                days_remaining: status.days_remaining,
                status: status.status,
            },
        }
    }

    /// Renders the document as pretty-printed JSON with two-space indent.
    pub fn render(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
