//! JSON requests to dashboard endpoints.
//!
//! Every call carries `Content-Type: application/json` and the page's
//! anti-forgery token. A non-2xx status is an error; otherwise the body is
//! parsed as JSON. Calls are single-shot: no retry, timeout or cancellation.

use crate::dom;
use crate::error::RequestError;
use gloo_net::http::{self, RequestBuilder};
use medash_core::config::CsrfConfig;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Put => http::Method::PUT,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(RequestError::Method(other.to_string())),
        }
    }
}

/// Map an HTTP status to success or [`RequestError::NotOk`].
pub fn ensure_ok(status: u16) -> Result<(), RequestError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(RequestError::NotOk { status })
    }
}

/// Token from the hidden `[name=<field>]` input, or an empty string.
pub fn csrf_token(document: &Document, field_name: &str) -> String {
    document
        .query_selector(&format!("[name={field_name}]"))
        .ok()
        .flatten()
        .map(|field| token_value(&field))
        .unwrap_or_default()
}

fn token_value(field: &Element) -> String {
    match field.dyn_ref::<HtmlInputElement>() {
        Some(input) => input.value(),
        None => field.get_attribute("value").unwrap_or_default(),
    }
}

/// Sends JSON requests with the anti-forgery header.
#[derive(Debug, Clone, Default)]
pub struct RequestHelper {
    csrf: CsrfConfig,
}

impl RequestHelper {
    pub fn new(csrf: CsrfConfig) -> Self {
        Self { csrf }
    }

    /// Issue one request and resolve with the parsed JSON body.
    pub async fn send(
        &self,
        url: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, RequestError> {
        let document = dom::document().map_err(|e| RequestError::Transport(e.to_string()))?;
        let token = csrf_token(&document, &self.csrf.field_name);
        let builder = RequestBuilder::new(url)
            .method(method.into())
            .header("Content-Type", "application/json")
            .header(&self.csrf.header_name, &token);
        let request = match body {
            Some(body) => builder.json(body)?,
            None => builder.build()?,
        };

        log::debug!("request: {method} {url}");
        let response = request.send().await?;
        if let Err(e) = ensure_ok(response.status()) {
            log::warn!("request: {method} {url} answered {}", response.status());
            return Err(e);
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| RequestError::Body(e.to_string()))
    }
}
