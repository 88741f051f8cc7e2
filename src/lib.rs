//! Customer Analytics - regional transaction dashboard
//!
//! Loads a CSV of transaction records once and renders average price and
//! volume line charts for the selected region, customer type, and date range.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod telemetry;
