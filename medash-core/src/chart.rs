//! Chart payload parsing and Chart.js configuration.
//!
//! A chart element carries its kind in one attribute and the Chart.js
//! `data` object as JSON text in another. The payload is parsed once into a
//! [`ChartSpec`], then [`ChartConfig::build`] produces the configuration the
//! external engine consumes.

use crate::error::ChartError;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Chart.js chart type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
    Radar,
    PolarArea,
    Scatter,
    Bubble,
    /// Any type registered with the engine by a plugin
    Other(String),
}

impl ChartKind {
    pub fn parse(text: &str) -> Result<Self, ChartError> {
        let text = text.trim();
        Ok(match text {
            "" => return Err(ChartError::MissingKind),
            "line" => ChartKind::Line,
            "bar" => ChartKind::Bar,
            "pie" => ChartKind::Pie,
            "doughnut" => ChartKind::Doughnut,
            "radar" => ChartKind::Radar,
            "polarArea" => ChartKind::PolarArea,
            "scatter" => ChartKind::Scatter,
            "bubble" => ChartKind::Bubble,
            other => ChartKind::Other(other.to_string()),
        })
    }

    pub fn as_str(&self) -> &str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Radar => "radar",
            ChartKind::PolarArea => "polarArea",
            ChartKind::Scatter => "scatter",
            ChartKind::Bubble => "bubble",
            ChartKind::Other(name) => name,
        }
    }

    /// Pie and doughnut charts have no x/y axes.
    pub fn has_cartesian_axes(&self) -> bool {
        !matches!(self, ChartKind::Pie | ChartKind::Doughnut)
    }
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// The Chart.js `data` object embedded in markup.
///
/// Every key (`labels`, `datasets`, engine extensions) is kept exactly as
/// written and handed to the engine unchanged. Only `title` is read here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChartData(pub Map<String, Value>);

impl ChartData {
    /// Title text as the page shows it: falsy values (`null`, `false`, `0`,
    /// `""`) give an empty title, other scalars their plain text.
    pub fn title_text(&self) -> String {
        self.0.get("title").map(display_text).unwrap_or_default()
    }
}

fn display_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_string(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        Value::Number(n) => n.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                Value::Bool(b) => b.to_string(),
                Value::Number(n) => n.to_string(),
                other => display_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// A parsed chart declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub data: ChartData,
}

impl ChartSpec {
    /// Parse the kind attribute and the JSON payload attribute.
    pub fn from_markup(kind: Option<&str>, payload: Option<&str>) -> Result<Self, ChartError> {
        let kind = ChartKind::parse(kind.ok_or(ChartError::MissingKind)?)?;
        let value: Value = serde_json::from_str(payload.ok_or(ChartError::MissingPayload)?)?;
        match value {
            Value::Object(map) => Ok(Self {
                kind,
                data: ChartData(map),
            }),
            other => Err(ChartError::NotAnObject(json_type_name(&other))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Look of every chart on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartStyle {
    pub grid_color: String,
    pub legend_position: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            grid_color: "#E0E0E0".to_string(),
            legend_position: "top".to_string(),
        }
    }
}

/// Configuration object handed to `new Chart(ctx, config)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

/// Serializes to `{}` when the chart has no axes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scales {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Axis>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub color: String,
}

impl ChartConfig {
    pub fn build(spec: ChartSpec, style: &ChartStyle) -> Self {
        let scales = if spec.kind.has_cartesian_axes() {
            let grid = Grid {
                color: style.grid_color.clone(),
            };
            Scales {
                y: Some(Axis {
                    begin_at_zero: Some(true),
                    grid: grid.clone(),
                }),
                x: Some(Axis {
                    begin_at_zero: None,
                    grid,
                }),
            }
        } else {
            Scales::default()
        };

        let title = spec.data.title_text();
        Self {
            kind: spec.kind,
            data: spec.data,
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: Legend {
                        position: style.legend_position.clone(),
                    },
                    title: Title {
                        display: true,
                        text: title,
                    },
                },
                scales,
            },
        }
    }
}
