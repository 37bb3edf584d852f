//! End-to-end tests for the absence calculation engine.
//!
//! This test suite drives the full pipeline from raw delimited text
//! through parsing, per-trip window analysis and status calculation to
//! both report surfaces, covering:
//! - The reference scenario with a header row and two trips
//! - JSON document shape, field names and date formatting
//! - Text report content
//! - Status classification across ok, caution and exceeded inputs
//! - Messy input (mixed delimiters, mixed date formats, malformed rows)
//! - Window edges (aging out, clipping, day-of-month clamping)

use chrono::NaiveDate;
use serde_json::Value;

use absence_engine::calculation::{analyze_trips, calculate_status, warning_threshold};
use absence_engine::error::EngineError;
use absence_engine::models::{CalculationConfig, ComplianceStatus};
use absence_engine::parsing::parse_trips_from_text;
use absence_engine::report::{JsonReport, render_status, render_trip_analysis};

// =============================================================================
// Test Helpers
// =============================================================================

const SAMPLE_INPUT: &str = "Start,End\n25.05.2023,10.08.2023\n15.09.2023,20.09.2023";

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn make_config(evaluation_date: Option<&str>) -> CalculationConfig {
    CalculationConfig {
        window_months: 12,
        absence_limit: 180,
        evaluation_date: evaluation_date.map(make_date),
    }
}

fn sample_json(evaluation_date: &str) -> Value {
    let trips = parse_trips_from_text(SAMPLE_INPUT);
    let config = make_config(Some(evaluation_date));
    let rows = analyze_trips(&trips, &config);
    let status = calculate_status(&trips, &config, make_date(evaluation_date)).unwrap();
    let report = JsonReport::build(&config, &rows, &status);
    serde_json::from_str(&report.render().unwrap()).unwrap()
}

// =============================================================================
// Reference scenario
// =============================================================================

#[test]
fn test_reference_scenario_trip_rows() {
    let trips = parse_trips_from_text(SAMPLE_INPUT);
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0].days, 78);
    assert_eq!(trips[1].days, 6);

    let config = make_config(None);
    let rows = analyze_trips(&trips, &config);

    assert_eq!(rows[0].days_in_window, 78);
    assert_eq!(rows[0].days_remaining, 102);
    assert_eq!(rows[1].days_in_window, 84);
    assert_eq!(rows[1].days_remaining, 96);
}

#[test]
fn test_reference_scenario_status() {
    let trips = parse_trips_from_text(SAMPLE_INPUT);
    let config = make_config(Some("2024-01-01"));

    let status = calculate_status(&trips, &config, make_date("2024-01-01")).unwrap();

    assert_eq!(status.target_date, make_date("2024-01-01"));
    assert!(status.is_custom_date);
    assert_eq!(status.last_trip_end, make_date("2023-09-20"));
    assert_eq!(status.days_since_last_trip, 103);
    assert_eq!(status.window_start, make_date("2023-01-01"));
    assert_eq!(status.window_end, make_date("2024-01-01"));
    assert_eq!(status.total_days_outside, 84);
    assert_eq!(status.days_remaining, 96);
    assert_eq!(status.status, ComplianceStatus::Ok);
}

// =============================================================================
// JSON document shape
// =============================================================================

#[test]
fn test_json_document_config_section() {
    let json = sample_json("2024-01-01");
    assert_eq!(json["config"]["windowMonths"], 12);
    assert_eq!(json["config"]["absenceLimit"], 180);
}

#[test]
fn test_json_document_trips_section() {
    let json = sample_json("2024-01-01");
    let trips = json["trips"].as_array().unwrap();
    assert_eq!(trips.len(), 2);

    assert_eq!(trips[0]["start"], "25.05.2023");
    assert_eq!(trips[0]["end"], "10.08.2023");
    assert_eq!(trips[0]["days"], 78);
    assert_eq!(trips[0]["daysInWindow"], 78);
    assert_eq!(trips[0]["daysRemaining"], 102);

    assert_eq!(trips[1]["start"], "15.09.2023");
    assert_eq!(trips[1]["end"], "20.09.2023");
    assert_eq!(trips[1]["days"], 6);
    assert_eq!(trips[1]["daysInWindow"], 84);
    assert_eq!(trips[1]["daysRemaining"], 96);
}

#[test]
fn test_json_document_status_section() {
    let json = sample_json("2024-01-01");
    let status = &json["status"];

    assert_eq!(status["targetDate"], "01.01.2024");
    assert_eq!(status["lastTripEnd"], "20.09.2023");
    assert_eq!(status["daysSinceLastTrip"], 103);
    assert_eq!(status["windowStart"], "01.01.2023");
    assert_eq!(status["windowEnd"], "01.01.2024");
    assert_eq!(status["totalDaysOutside"], 84);
    assert_eq!(status["daysRemaining"], 96);
    assert_eq!(status["status"], "ok");
}

#[test]
fn test_json_document_has_no_extra_status_fields() {
    let json = sample_json("2024-01-01");
    let status = json["status"].as_object().unwrap();
    assert_eq!(status.len(), 8);
    assert!(!status.contains_key("isCustomDate"));
}

// =============================================================================
// Text report
// =============================================================================

#[test]
fn test_text_report_contains_table_and_status() {
    let trips = parse_trips_from_text(SAMPLE_INPUT);
    let config = make_config(Some("2024-01-01"));
    let rows = analyze_trips(&trips, &config);
    let status = calculate_status(&trips, &config, make_date("2024-01-01")).unwrap();

    let table = render_trip_analysis(&rows, &config);
    let block = render_status(&status, &config);

    assert!(table.contains("ABSENCE CALCULATOR - Rolling 12-Month Window Analysis"));
    assert!(table.contains("25.05.2023"));
    assert!(table.contains("20.09.2023"));

    assert!(block.contains("ESTIMATED STATUS - As of 01.01.2024"));
    assert!(block.contains("Days absent (last 12 months): 84 days"));
    assert!(block.contains("OK: within the 180-day limit"));
}

// =============================================================================
// Status classification
// =============================================================================

#[test]
fn test_exceeded_end_to_end() {
    // 200 absence days in the year ending 01.01.2024
    let trips = parse_trips_from_text("01.06.2023,17.12.2023");
    let config = make_config(Some("2024-01-01"));

    let status = calculate_status(&trips, &config, make_date("2024-01-01")).unwrap();

    assert_eq!(status.total_days_outside, 200);
    assert_eq!(status.days_remaining, -20);
    assert_eq!(status.status, ComplianceStatus::Exceeded);

    let json = sample_status_json(&trips, &config);
    assert_eq!(json["status"]["status"], "exceeded");
}

#[test]
fn test_caution_end_to_end() {
    // 160 absence days leaves 20 remaining, under the threshold of 27
    let trips = parse_trips_from_text("01.06.2023,07.11.2023");
    let config = make_config(Some("2024-01-01"));

    let status = calculate_status(&trips, &config, make_date("2024-01-01")).unwrap();

    assert_eq!(warning_threshold(config.absence_limit), 27);
    assert_eq!(status.days_remaining, 20);
    assert_eq!(status.status, ComplianceStatus::Caution);
}

fn sample_status_json(
    trips: &[absence_engine::models::Trip],
    config: &CalculationConfig,
) -> Value {
    let rows = analyze_trips(trips, config);
    let status = calculate_status(
        trips,
        config,
        config.evaluation_date.unwrap_or_else(|| make_date("2024-01-01")),
    )
    .unwrap();
    let report = JsonReport::build(config, &rows, &status);
    serde_json::from_str(&report.render().unwrap()).unwrap()
}

#[test]
fn test_empty_input_cannot_produce_a_status() {
    let trips = parse_trips_from_text("");
    let config = make_config(Some("2024-01-01"));

    let result = calculate_status(&trips, &config, make_date("2024-01-01"));

    assert!(matches!(result, Err(EngineError::NoTrips)));
}

// =============================================================================
// Messy input
// =============================================================================

#[test]
fn test_messy_input_survives_the_pipeline() {
    let input = "Departure Date\tArrival Date\n\
                 2023-05-25\t10/08/2023\n\
                 not,a,date\n\
                 \n\
                 15 Sep 2023,20 September 2023,conference";

    let trips = parse_trips_from_text(input);
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[1].notes.as_deref(), Some("conference"));

    let config = make_config(Some("2024-01-01"));
    let rows = analyze_trips(&trips, &config);
    assert_eq!(rows[1].days_in_window, 84);
}

#[test]
fn test_unsorted_input_is_sorted_before_analysis() {
    let trips = parse_trips_from_text("15.09.2023,20.09.2023\n25.05.2023,10.08.2023");

    assert_eq!(trips[0].end, make_date("2023-08-10"));
    assert_eq!(trips[1].end, make_date("2023-09-20"));

    let config = make_config(None);
    let rows = analyze_trips(&trips, &config);
    assert_eq!(rows[0].days_in_window, 78);
    assert_eq!(rows[1].days_in_window, 84);
}

// =============================================================================
// Window edges
// =============================================================================

#[test]
fn test_old_trips_age_out_of_the_window() {
    let trips = parse_trips_from_text("01.01.2021,30.06.2021\n01.11.2023,10.11.2023");
    let config = make_config(Some("2024-01-01"));

    let status = calculate_status(&trips, &config, make_date("2024-01-01")).unwrap();

    assert_eq!(status.total_days_outside, 10);
    assert_eq!(status.status, ComplianceStatus::Ok);
}

#[test]
fn test_trip_straddling_the_window_start_is_clipped() {
    // Window 01.01.2023 to 01.01.2024; trip contributes 01.01 to 15.01.2023
    let trips = parse_trips_from_text("20.12.2022,15.01.2023");
    let config = make_config(Some("2024-01-01"));

    let status = calculate_status(&trips, &config, make_date("2024-01-01")).unwrap();

    assert_eq!(status.total_days_outside, 15);
}

#[test]
fn test_leap_day_evaluation_date_clamps_window_start() {
    let trips = parse_trips_from_text("01.02.2023,10.02.2023");
    let config = CalculationConfig {
        window_months: 12,
        absence_limit: 180,
        evaluation_date: Some(make_date("2024-02-29")),
    };

    let status = calculate_status(&trips, &config, make_date("2024-02-29")).unwrap();

    assert_eq!(status.window_start, make_date("2023-02-28"));
    assert_eq!(status.total_days_outside, 10);
}

#[test]
fn test_shorter_window_and_limit_are_honored() {
    // Schengen-style 90 days in 6 months
    let trips = parse_trips_from_text("01.05.2023,31.07.2023");
    let config = CalculationConfig {
        window_months: 6,
        absence_limit: 90,
        evaluation_date: Some(make_date("2023-08-15")),
    };

    let status = calculate_status(&trips, &config, make_date("2023-08-15")).unwrap();

    assert_eq!(status.window_start, make_date("2023-02-15"));
    assert_eq!(status.total_days_outside, 92);
    assert_eq!(status.days_remaining, -2);
    assert_eq!(status.status, ComplianceStatus::Exceeded);
}
