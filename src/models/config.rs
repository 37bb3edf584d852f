//! Calculation configuration model.
//!
//! This module defines the [`CalculationConfig`] struct holding the input
//! parameters for one calculation run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input parameters for a rolling-window absence calculation.
///
/// Both numeric fields must be strictly positive. Validating this is a
/// caller-level concern (the CLI rejects non-positive values before the
/// engine runs); the pure calculation functions assume a valid
/// configuration.
///
/// # Example
///
/// ```
/// use absence_engine::models::CalculationConfig;
///
/// // UK ILR: at most 180 days absent in any rolling 12-month window
/// let config = CalculationConfig {
///     window_months: 12,
///     absence_limit: 180,
///     evaluation_date: None,
/// };
/// assert_eq!(config.window_months, 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationConfig {
    /// Length of the rolling window in months.
    pub window_months: u32,
    /// Maximum allowed absence days within the window.
    pub absence_limit: i64,
    /// Optional explicit evaluation date. When absent, the caller injects
    /// its "now" (today as a UTC calendar date) before invoking the
    /// status calculation; the engine itself never reads the clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_date: Option<NaiveDate>,
}
