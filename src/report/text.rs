//! Human-readable text report.
//!
//! This module renders the per-trip analysis table and the status block as
//! plain text with 90-column rules, the same material the JSON report
//! carries in machine form.

use crate::calculation::warning_threshold;
use crate::models::{AnalysisRow, CalculationConfig, ComplianceStatus, StatusResult};
use crate::parsing::format_date;

/// Width of the horizontal rules framing the report sections.
const RULE_WIDTH: usize = 90;

/// Renders the per-trip analysis table.
///
/// Each row shows the trip's dates, its inclusive length, the absence
/// total in the window ending on the trip's end date, and the remaining
/// allowance. Rows over the limit get an indented warning line beneath
/// them.
///
/// # Arguments
///
/// * `rows` - The analysis rows, typically sorted ascending by end date
/// * `config` - The window length and absence limit the rows were
///   computed with
///
/// # Returns
///
/// The table as a multi-line string, including a trailing explanatory
/// note.
pub fn render_trip_analysis(rows: &[AnalysisRow], config: &CalculationConfig) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "ABSENCE CALCULATOR - Rolling {}-Month Window Analysis\n",
        config.window_months
    ));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");
    out.push_str(&format!(
        "Allowed absence: {} days in any rolling {}-month period\n\n",
        config.absence_limit, config.window_months
    ));

    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<12} | {:<12} | {:<6} | {:<20} | {:<12}\n",
        "Trip Start",
        "Trip End",
        "Days",
        format!("Days in {}mo Window", config.window_months),
        "Days Remaining"
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<12} | {:<12} | {:>6} | {:>20} | {:>12}\n",
            format_date(row.trip.start),
            format_date(row.trip.end),
            row.trip.days,
            row.days_in_window,
            row.days_remaining
        ));

        if row.days_remaining < 0 {
            out.push_str(&format!(
                "{:12} WARNING: exceeded the {}-day limit by {} days\n",
                "",
                config.absence_limit,
                -row.days_remaining
            ));
        }
    }

    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "\nNote: The {}-month window ends on each trip's end date and starts {} months before.\n",
        config.window_months, config.window_months
    ));
    out.push_str("Days in window include all days from trips that overlap with that window.\n");

    out
}

/// Renders the status block for the evaluation date.
///
/// The heading distinguishes an explicit evaluation date ("ESTIMATED
/// STATUS") from the caller's today ("CURRENT STATUS"). The closing line
/// mirrors the compliance classification: a warning when exceeded, a
/// caution when the remaining allowance is under the warning threshold,
/// and a confirmation otherwise.
pub fn render_status(status: &StatusResult, config: &CalculationConfig) -> String {
    let mut out = String::new();

    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    if status.is_custom_date {
        out.push_str(&format!(
            "ESTIMATED STATUS - As of {}\n",
            format_date(status.target_date)
        ));
    } else {
        out.push_str("CURRENT STATUS - As of Today\n");
    }
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push_str("\n\n");

    if status.is_custom_date {
        out.push_str(&format!("Estimated date: {}\n", format_date(status.target_date)));
    } else {
        out.push_str(&format!("Today's date: {}\n", format_date(status.target_date)));
    }
    out.push_str(&format!("Last trip ended: {}\n", format_date(status.last_trip_end)));
    out.push_str(&format!(
        "Days since last trip: {} days\n",
        status.days_since_last_trip
    ));
    out.push_str(&format!(
        "Rolling {}-month window: {} to {}\n\n",
        config.window_months,
        format_date(status.window_start),
        format_date(status.window_end)
    ));

    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "Days absent (last {} months): {} days\n",
        config.window_months, status.total_days_outside
    ));
    out.push_str(&format!(
        "Days remaining (out of {}): {} days\n",
        config.absence_limit, status.days_remaining
    ));
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    match status.status {
        ComplianceStatus::Exceeded => {
            out.push_str(&format!(
                "\nWARNING: the {}-day limit is exceeded by {} days\n",
                config.absence_limit, -status.days_remaining
            ));
        }
        ComplianceStatus::Caution => {
            out.push_str(&format!(
                "\nCAUTION: fewer than {} days remaining in the allowance\n",
                warning_threshold(config.absence_limit)
            ));
        }
        ComplianceStatus::Ok => {
            out.push_str(&format!(
                "\nOK: within the {}-day limit\n",
                config.absence_limit
            ));
        }
    }

    out
}
