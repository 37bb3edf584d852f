//! Command-line interface for the rolling-window absence calculator.
//!
//! This binary reads a delimited trip file, runs the per-trip analysis
//! and the aggregate status calculation, and prints either the text
//! report or the JSON document.

use std::fs;
use std::process;

use chrono::Utc;
use clap::Parser;
use tracing::debug;

use absence_engine::calculation::{analyze_trips, calculate_status};
use absence_engine::error::{EngineError, EngineResult};
use absence_engine::models::CalculationConfig;
use absence_engine::parsing::{parse_date, parse_trips_from_text};
use absence_engine::report::{JsonReport, render_status, render_trip_analysis};

#[derive(Debug, Parser)]
#[command(name = "absence-engine")]
#[command(version, about = "Rolling-window absence calculator for residence compliance rules")]
struct Cli {
    /// Trip file with one start/end date pair per line (comma or tab delimited)
    file: String,

    /// Evaluate as of this date instead of today (e.g. 01.01.2026)
    #[arg(long = "date")]
    date: Option<String>,

    /// Rolling window period in months
    #[arg(long = "window", default_value_t = 12)]
    window: u32,

    /// Maximum allowed absence days in the window
    #[arg(long = "limit", default_value_t = 180)]
    limit: i64,

    /// Output results as JSON
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> EngineResult<()> {
    let config = build_config(cli)?;

    let text = fs::read_to_string(&cli.file).map_err(|error| EngineError::InputFile {
        path: cli.file.clone(),
        message: error.to_string(),
    })?;

    let trips = parse_trips_from_text(&text);
    if trips.is_empty() {
        eprintln!("No valid trip data found in '{}'.", cli.file);
        eprintln!("Expected format: start date, end date (with or without a header row).");
        eprintln!(
            "Supported date formats: dd.mm.yyyy, dd/mm/yyyy, yyyy-mm-dd, mm/dd/yyyy, and others."
        );
        return Err(EngineError::NoTrips);
    }
    debug!(count = trips.len(), "parsed trips");

    let rows = analyze_trips(&trips, &config);
    let status = calculate_status(&trips, &config, Utc::now().date_naive())?;

    if cli.json {
        let report = JsonReport::build(&config, &rows, &status);
        println!("{}", report.render()?);
    } else {
        print!("{}", render_trip_analysis(&rows, &config));
        print!("{}", render_status(&status, &config));
    }

    Ok(())
}

/// Validates the CLI flags and assembles the calculation configuration.
fn build_config(cli: &Cli) -> EngineResult<CalculationConfig> {
    if cli.window == 0 {
        return Err(EngineError::InvalidConfig {
            field: "window".to_string(),
            message: "must be a positive number of months".to_string(),
        });
    }
    if cli.limit <= 0 {
        return Err(EngineError::InvalidConfig {
            field: "limit".to_string(),
            message: "must be a positive number of days".to_string(),
        });
    }

    let evaluation_date = match &cli.date {
        Some(text) => Some(
            parse_date(text).ok_or_else(|| EngineError::InvalidDate { text: text.clone() })?,
        ),
        None => None,
    };

    Ok(CalculationConfig {
        window_months: cli.window,
        absence_limit: cli.limit,
        evaluation_date,
    })
}
