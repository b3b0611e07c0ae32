//! Records to CSV text.
//!
//! Output layout: a header row taken from the first record's keys, then one
//! line per record, every field wrapped in double quotes, fields joined by
//! `,` and lines by `\n` (no trailing newline).
//!
//! By default field text is written between the quotes as-is: embedded `"`
//! or `,` are not escaped. Exports consumed by existing spreadsheets depend
//! on that layout, so escaping is an explicit opt-in via
//! [`QuotePolicy::Escaped`].

use crate::error::ExportError;
use serde_json::{Map, Value};

/// MIME type of exported files.
pub const CSV_MIME: &str = "text/csv";

/// Extension appended to export filenames.
pub const CSV_EXTENSION: &str = ".csv";

/// How field text is placed between the quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuotePolicy {
    /// Field text is copied verbatim.
    #[default]
    Verbatim,
    /// Embedded quotes are doubled (RFC 4180).
    Escaped,
}

/// Render `records` with the default [`QuotePolicy::Verbatim`].
pub fn to_csv(records: &[Value]) -> Result<String, ExportError> {
    to_csv_with(records, QuotePolicy::default())
}

pub fn to_csv_with(records: &[Value], policy: QuotePolicy) -> Result<String, ExportError> {
    let rows = as_records(records)?;
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let lines = rows
        .iter()
        .map(|row| headers.iter().map(|h| cell_text(row.get(*h))).collect::<Vec<_>>());

    match policy {
        QuotePolicy::Verbatim => {
            let mut out = Vec::with_capacity(rows.len() + 1);
            out.push(quote_line(headers.iter().map(|h| h.to_string())));
            out.extend(lines.map(|cells| quote_line(cells.into_iter())));
            Ok(out.join("\n"))
        }
        QuotePolicy::Escaped => {
            let mut writer = csv::WriterBuilder::new()
                .quote_style(csv::QuoteStyle::Always)
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            writer.write_record(&headers)?;
            for cells in lines {
                writer.write_record(&cells)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| ExportError::Flush(e.error().to_string()))?;
            let mut text = String::from_utf8(bytes)?;
            if text.ends_with('\n') {
                text.pop();
            }
            Ok(text)
        }
    }
}

fn as_records(records: &[Value]) -> Result<Vec<&Map<String, Value>>, ExportError> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| record.as_object().ok_or(ExportError::NotARecord(i)))
        .collect()
}

fn quote_line(cells: impl Iterator<Item = String>) -> String {
    cells
        .map(|cell| format!("\"{cell}\""))
        .collect::<Vec<_>>()
        .join(",")
}

/// Missing keys and falsy values (`null`, `false`, `0`, `""`) render empty;
/// strings render without JSON quotes.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
