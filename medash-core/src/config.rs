//! Page-level settings.
//!
//! Every field has a default matching the dashboard templates, so a page
//! without a config block behaves exactly like one with `{}`. A page may
//! override any subset through a JSON block:
//!
//! ```html
//! <script type="application/json" id="medash-config">
//!   {"defaultCurrency": "EUR", "notification": {"delayMs": 8000}}
//! </script>
//! ```

use crate::chart::ChartStyle;
use crate::format::{NumberLocale, DEFAULT_CURRENCY};
use crate::markers::Markers;
use crate::notification::DismissSchedule;
use crate::tooltip::TooltipStyle;
use crate::validation::Messages;
use anyhow::Context;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Id of the `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "medash-config";

/// Where the anti-forgery token comes from and where it goes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CsrfConfig {
    /// `name` of the hidden form field holding the token
    pub field_name: String,
    /// Request header carrying the token
    pub header_name: String,
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            field_name: "csrfmiddlewaretoken".to_string(),
            header_name: "X-CSRFToken".to_string(),
        }
    }
}

/// Classes applied by the validation and table behaviors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Classes {
    /// Full class list of an inline error element
    pub field_error: String,
    /// Class that identifies an inline error element
    pub field_error_marker: String,
    /// Class marking a field invalid
    pub invalid_field: String,
    /// Class list of the injected table search box
    pub search_input: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            field_error: "text-red-500 text-sm mt-1 field-error".to_string(),
            field_error_marker: "field-error".to_string(),
            invalid_field: "border-red-500".to_string(),
            search_input: "form-input mb-4".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub markers: Markers,
    pub classes: Classes,
    pub messages: Messages,
    pub tooltip: TooltipStyle,
    pub chart: ChartStyle,
    pub notification: DismissSchedule,
    pub csrf: CsrfConfig,
    /// Separators used by the number, currency and percentage formatters
    pub locale: NumberLocale,
    pub default_currency: String,
    pub search_placeholder: String,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            markers: Markers::default(),
            classes: Classes::default(),
            messages: Messages::default(),
            tooltip: TooltipStyle::default(),
            chart: ChartStyle::default(),
            notification: DismissSchedule::default(),
            csrf: CsrfConfig::default(),
            locale: NumberLocale::default(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            search_placeholder: "Search...".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Parse a (possibly partial) JSON override block.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("Failed to parse dashboard config")
    }

    /// The configured log level, or `Info` when it does not parse.
    pub fn log_level(&self) -> LevelFilter {
        LevelFilter::from_str(self.log_level.trim()).unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_is_all_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.default_currency, "USD");
        assert_eq!(config.csrf.header_name, "X-CSRFToken");
        assert_eq!(config.csrf.field_name, "csrfmiddlewaretoken");
        assert_eq!(config.tooltip.gap_px, 5.0);
        assert_eq!(config.notification.delay_ms, 5000);
        assert_eq!(config.notification.fade_ms, 300);
    }

    #[test]
    fn nested_overrides_merge_over_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"defaultCurrency": "EUR", "notification": {"delayMs": 8000}, "messages": {"required": "Required"}}"#,
        )
        .unwrap();
        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.notification.delay_ms, 8000);
        assert_eq!(config.notification.fade_ms, 300);
        assert_eq!(config.messages.required, "Required");
        assert_eq!(config.messages.invalid_email, "Please enter a valid email address");
    }

    #[test]
    fn locale_separators_are_configurable() {
        let config =
            DashboardConfig::from_json(r#"{"locale": {"groupSeparator": ".", "decimalSeparator": ","}}"#)
                .unwrap();
        assert_eq!(config.locale.format_number(1234567.5), "1.234.567,5");
        assert_eq!(config.locale.format_currency(1234.5, "EUR"), "€1.234,50");
        assert_eq!(config.locale.format_percentage(12.34), "12,3%");

        let partial = DashboardConfig::from_json(r#"{"locale": {"groupSeparator": " "}}"#).unwrap();
        assert_eq!(partial.locale.format_number(1234.5), "1 234.5");
    }

    #[test]
    fn malformed_block_is_an_error() {
        let err = DashboardConfig::from_json("{oops").unwrap_err();
        assert!(err.to_string().contains("dashboard config"));
    }

    #[test]
    fn log_level_parses_or_defaults() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.log_level(), LevelFilter::Info);
        config.log_level = "DEBUG".to_string();
        assert_eq!(config.log_level(), LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level(), LevelFilter::Info);
    }
}
