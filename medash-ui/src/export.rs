//! Client-side file downloads.

use crate::dom;
use crate::error::BehaviorError;
use medash_core::csv_export::{to_csv_with, QuotePolicy, CSV_EXTENSION, CSV_MIME};
use serde_json::Value;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url};

/// Offer `content` to the user as a file named `filename`.
pub fn download_file(
    document: &Document,
    content: &str,
    filename: &str,
    mime_type: &str,
) -> Result<(), BehaviorError> {
    let parts = js_sys::Array::of1(&content.into());
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = dom::create(document, "a")?;
    link.set_href(&url);
    link.set_download(filename);
    let body = dom::body(document)?;
    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;

    Url::revoke_object_url(&url)?;
    Ok(())
}

/// Render `records` as CSV and download them as `<filename>.csv`.
///
/// An empty record list still downloads an empty file.
pub fn export_to_csv(
    document: &Document,
    records: &[Value],
    filename: &str,
    policy: QuotePolicy,
) -> Result<(), BehaviorError> {
    let csv = to_csv_with(records, policy)?;
    let name = format!("{filename}{CSV_EXTENSION}");
    download_file(document, &csv, &name, CSV_MIME)?;
    log::info!("export: {} records to {name}", records.len());
    Ok(())
}
