//! Browser side of the M&E dashboard behavior layer.
//!
//! This crate provides:
//! - `bootstrap`: the binding table and the `Dashboard` that owns every
//!   attached behavior for the life of the page
//! - `behaviors`: tooltip, validation, chart, table and notification modules
//! - `request`: JSON fetch helper carrying the anti-forgery token
//! - `export`: CSV download through a Blob URL
//! - `js_bridge`: typed binding to the external Chart.js engine
//! - `logger`: `log` facade backend writing to the browser console

pub mod behaviors;
pub mod bootstrap;
pub mod dom;
pub mod error;
pub mod export;
pub mod js_bridge;
pub mod logger;
pub mod request;

pub use bootstrap::{BindReport, Dashboard};
pub use error::{BehaviorError, RequestError};
