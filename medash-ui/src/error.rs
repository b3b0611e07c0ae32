/// Error types for the browser behaviors
use medash_core::error::{ChartError, ExportError};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failure while attaching or running a behavior.
#[derive(Error, Debug)]
pub enum BehaviorError {
    /// A DOM or JS call threw
    #[error("JS call failed: {0}")]
    Js(String),

    /// A required global (window, document, body) is missing
    #[error("{0} not available")]
    Missing(&'static str),

    /// An element was not of the expected type
    #[error("element is not a {0}")]
    WrongElement(&'static str),

    /// Chart markup could not be turned into a configuration
    #[error("bad chart markup: {0}")]
    Chart(#[from] ChartError),

    /// Records could not be rendered as CSV
    #[error("export failed: {0}")]
    Export(#[from] ExportError),

    /// A value could not cross the JS boundary
    #[error("failed to convert value: {0}")]
    Convert(String),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        BehaviorError::Js(describe(&value))
    }
}

impl From<serde_wasm_bindgen::Error> for BehaviorError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        BehaviorError::Convert(err.to_string())
    }
}

impl From<BehaviorError> for JsValue {
    fn from(err: BehaviorError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Failure of a call made through the request helper.
///
/// Callers decide whether to retry or tell the user; nothing here does.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The server answered with a non-2xx status
    #[error("Network response was not ok")]
    NotOk { status: u16 },

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not JSON
    #[error("response body is not JSON: {0}")]
    Body(String),

    /// The method name is not one the helper sends
    #[error("unsupported HTTP method {0:?}")]
    Method(String),

    /// The request body could not be serialized
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

impl From<gloo_net::Error> for RequestError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => RequestError::Encode(e),
            other => RequestError::Transport(other.to_string()),
        }
    }
}

impl From<RequestError> for JsValue {
    fn from(err: RequestError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Human-readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{value:?}")
}
