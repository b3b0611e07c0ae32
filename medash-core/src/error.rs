/// Error types for the dashboard core
use thiserror::Error;

/// Failure to turn chart markup into a rendering configuration.
#[derive(Error, Debug)]
pub enum ChartError {
    /// The `data-chart` attribute was missing or blank
    #[error("chart kind is missing")]
    MissingKind,

    /// The `data-chart-data` attribute was missing
    #[error("chart payload is missing")]
    MissingPayload,

    /// The payload text is not JSON
    #[error("chart payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The payload parsed, but not to an object
    #[error("chart payload must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Failure to render records as CSV.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A record was not a key/value object
    #[error("record {0} is not an object")]
    NotARecord(usize),

    /// The escaping writer failed
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The escaping writer could not be flushed
    #[error("failed to flush CSV writer: {0}")]
    Flush(String),

    /// The escaping writer produced bytes that are not UTF-8
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failure to format a display string.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// The date text matched none of the accepted layouts
    #[error("Invalid time value: {0:?}")]
    InvalidDate(String),
}
