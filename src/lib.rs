//! Rolling-Window Absence Calculator
//!
//! This crate decides whether a traveler complies with a rolling-window absence
//! rule (for example the UK ILR 180-days-in-12-months rule or the Schengen
//! 90/180 rule). Given a history of trips away from a home jurisdiction, it
//! computes the total days spent outside that jurisdiction within any trailing
//! N-month window and classifies the result against a configured limit.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod parsing;
pub mod report;
