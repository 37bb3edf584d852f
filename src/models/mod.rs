//! Core data models for the absence calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis;
mod config;
mod trip;

pub use analysis::{AnalysisRow, ComplianceStatus, StatusResult};
pub use config::CalculationConfig;
pub use trip::Trip;
