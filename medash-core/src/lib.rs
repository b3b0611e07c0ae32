//! Target-independent logic behind the M&E dashboard behavior layer.
//!
//! Nothing in this crate touches the DOM, so everything here is tested with
//! plain `cargo test`. The browser side lives in `medash-ui`.
//!
//! This crate provides:
//! - `markers`: the attribute contract with the server-rendered markup
//! - `config`: page-level settings with defaults for every field
//! - `format`: number, currency, date and percentage display strings
//! - `csv_export`: records to quoted CSV text
//! - `validation`: field rules (required, email-shaped)
//! - `table_filter`: case-insensitive row matching
//! - `chart`: chart payload parsing and Chart.js configuration
//! - `tooltip`: overlay placement above an anchor
//! - `notification`: success banner dismissal timing

pub mod chart;
pub mod config;
pub mod csv_export;
pub mod error;
pub mod format;
pub mod markers;
pub mod notification;
pub mod table_filter;
pub mod tooltip;
pub mod validation;

pub use config::DashboardConfig;
pub use markers::{Behavior, Markers};
