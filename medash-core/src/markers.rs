//! Marker attributes: the binding contract with the server-rendered markup.
//!
//! Templates opt elements into a behavior by carrying one of these
//! attributes (or, for banners, a CSS class). The names are part of the
//! page contract and must stay stable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A behavior the dashboard knows how to attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    Tooltip,
    Validation,
    Chart,
    Table,
    Notification,
}

impl Behavior {
    /// Every behavior, in binding order. The order carries no meaning.
    pub const ALL: [Behavior; 5] = [
        Behavior::Tooltip,
        Behavior::Validation,
        Behavior::Chart,
        Behavior::Table,
        Behavior::Notification,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Behavior::Tooltip => "tooltip",
            Behavior::Validation => "validation",
            Behavior::Chart => "chart",
            Behavior::Table => "table",
            Behavior::Notification => "notification",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute and class names that mark elements for each behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Markers {
    /// Holds the tooltip text
    pub tooltip: String,
    /// Flag on `<form>` elements that opt into client-side validation
    pub validate: String,
    /// Holds the chart kind (`line`, `bar`, `pie`, ...)
    pub chart_kind: String,
    /// Holds the serialized chart data
    pub chart_data: String,
    /// Flag on tables that get a search box
    pub table: String,
    /// Class of banners that dismiss themselves
    pub success_banner: String,
    /// Flag on the close control inside a banner
    pub dismiss: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            tooltip: "data-tooltip".to_string(),
            validate: "data-validate".to_string(),
            chart_kind: "data-chart".to_string(),
            chart_data: "data-chart-data".to_string(),
            table: "data-table".to_string(),
            success_banner: "alert-success".to_string(),
            dismiss: "data-dismiss".to_string(),
        }
    }
}

impl Markers {
    /// CSS selector matching every element marked for `behavior`.
    pub fn selector(&self, behavior: Behavior) -> String {
        match behavior {
            Behavior::Tooltip => format!("[{}]", self.tooltip),
            Behavior::Validation => format!("form[{}]", self.validate),
            Behavior::Chart => format!("[{}]", self.chart_kind),
            Behavior::Table => format!("[{}]", self.table),
            Behavior::Notification => format!(".{}", self.success_banner),
        }
    }

    /// Selector for the manual-dismiss control inside a banner.
    pub fn dismiss_selector(&self) -> String {
        format!("[{}]", self.dismiss)
    }
}

/// Fields a validation pass looks at inside a marked form.
pub const VALIDATED_FIELDS: &str = "[required], input[type=\"email\"]";

/// Body rows of a marked table; header rows are never filtered.
pub const TABLE_BODY_ROWS: &str = "tbody tr";
