//! WASM entry point for the M&E dashboard.
//!
//! `start` runs when the module is instantiated: it installs the console
//! logger and the page error hook, reads the optional config block and binds
//! every behavior once the document is ready. The remaining exports are the
//! page's JS interface to the formatters, the request and export helpers and
//! chart refresh.

use chrono::NaiveDate;
use medash_core::csv_export::QuotePolicy;
use medash_core::error::FormatError;
use medash_core::format;
use medash_core::DashboardConfig;
use medash_ui::bootstrap::{self, Dashboard};
use medash_ui::dom::{self, Listener};
use medash_ui::request::{Method, RequestHelper};
use medash_ui::{export, logger, RequestError};
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Everything the page keeps alive between calls.
struct Runtime {
    config: DashboardConfig,
    dashboard: Option<Dashboard>,
    _hooks: Vec<Listener>,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

fn with_config<R>(f: impl FnOnce(&DashboardConfig) -> R) -> R {
    RUNTIME.with(|runtime| match runtime.try_borrow() {
        Ok(guard) => match guard.as_ref() {
            Some(runtime) => f(&runtime.config),
            None => f(&DashboardConfig::default()),
        },
        Err(_) => f(&DashboardConfig::default()),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logger::init(log::LevelFilter::Info);
    logger::install_panic_hook();

    let window = dom::window()?;
    let document = dom::document()?;
    let config = bootstrap::load_config(&document);
    logger::init(config.log_level());

    let error_hook = bootstrap::install_error_listener(&window)?;
    RUNTIME.with(|runtime| {
        *runtime.borrow_mut() = Some(Runtime {
            config,
            dashboard: None,
            _hooks: vec![error_hook],
        });
    });

    // Binding may happen right here when the document is already parsed.
    if let Some(pending) = bootstrap::on_ready(&document, bind_dashboard)? {
        RUNTIME.with(|runtime| {
            if let Some(runtime) = runtime.borrow_mut().as_mut() {
                runtime._hooks.push(pending);
            }
        });
    }
    log::info!("medash: started");
    Ok(())
}

fn bind_dashboard() {
    let (window, document) = match (dom::window(), dom::document()) {
        (Ok(window), Ok(document)) => (window, document),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("medash: cannot bind behaviors: {e}");
            return;
        }
    };
    RUNTIME.with(|runtime| {
        let mut runtime = runtime.borrow_mut();
        let Some(runtime) = runtime.as_mut() else {
            return;
        };
        if runtime.dashboard.is_some() {
            return;
        }
        let mut dashboard = Dashboard::new(window, document, &runtime.config);
        dashboard.bind();
        runtime.dashboard = Some(dashboard);
    });
}

fn to_js_error(message: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&message.to_string()).into()
}

/// Grouped number with up to three fraction digits, in the configured locale.
#[wasm_bindgen(js_name = formatNumber)]
pub fn format_number(value: f64) -> String {
    with_config(|config| config.locale.format_number(value))
}

/// Currency amount; `currency` defaults to the configured code.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64, currency: Option<String>) -> String {
    with_config(|config| {
        let code = currency.as_deref().unwrap_or(&config.default_currency);
        config.locale.format_currency(amount, code)
    })
}

/// `Jan 5, 2024` from a date string, a JS `Date` or epoch milliseconds.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: JsValue) -> Result<String, JsValue> {
    if let Some(text) = value.as_string() {
        return format::format_date(&text).map_err(to_js_error);
    }
    let date = match (value.dyn_ref::<js_sys::Date>(), value.as_f64()) {
        (Some(date), _) => date.clone(),
        (None, Some(_)) => js_sys::Date::new(&value),
        (None, None) => return Err(to_js_error(FormatError::InvalidDate(format!("{value:?}")))),
    };
    calendar_date(&date)
        .map(|date| format::format_calendar_date(&date))
        .map_err(to_js_error)
}

/// The date's local calendar day.
fn calendar_date(date: &js_sys::Date) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::InvalidDate(String::from(date.to_string()));
    if date.get_time().is_nan() {
        return Err(invalid());
    }
    let year = i32::try_from(date.get_full_year()).map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, date.get_month() + 1, date.get_date()).ok_or_else(invalid)
}

/// `v` is already a percentage: `42.3` renders as `42.3%`.
#[wasm_bindgen(js_name = formatPercentage)]
pub fn format_percentage(value: f64) -> String {
    with_config(|config| config.locale.format_percentage(value))
}

/// JSON request carrying the anti-forgery header. Resolves with the parsed
/// body and rejects with "Network response was not ok" on a non-2xx status.
#[wasm_bindgen(js_name = makeAjaxRequest)]
pub async fn make_ajax_request(
    url: String,
    method: Option<String>,
    data: JsValue,
) -> Result<JsValue, JsValue> {
    let method = match method {
        Some(name) => name.parse::<Method>()?,
        None => Method::default(),
    };
    let body: Option<Value> = if data.is_undefined() || data.is_null() {
        None
    } else {
        Some(
            serde_wasm_bindgen::from_value(data)
                .map_err(|e| RequestError::Body(e.to_string()))?,
        )
    };
    let helper = with_config(|config| RequestHelper::new(config.csrf.clone()));
    let response = helper.send(&url, method, body.as_ref()).await?;
    response
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| RequestError::Body(e.to_string()).into())
}

/// Download `data` (an array of flat objects) as `<filename>.csv`. Pass
/// `escape = true` to double embedded quotes.
#[wasm_bindgen(js_name = exportToCSV)]
pub fn export_to_csv(data: JsValue, filename: String, escape: Option<bool>) -> Result<(), JsValue> {
    let records: Vec<Value> = serde_wasm_bindgen::from_value(data).map_err(to_js_error)?;
    let policy = if escape.unwrap_or(false) {
        QuotePolicy::Escaped
    } else {
        QuotePolicy::Verbatim
    };
    let document = dom::document()?;
    export::export_to_csv(&document, &records, &filename, policy)?;
    Ok(())
}

/// Redraw every chart the dashboard rendered.
#[wasm_bindgen(js_name = refreshCharts)]
pub fn refresh_charts() {
    RUNTIME.with(|runtime| match runtime.try_borrow() {
        Ok(guard) => match guard.as_ref().and_then(|runtime| runtime.dashboard.as_ref()) {
            Some(dashboard) => dashboard.charts().refresh(),
            None => log::warn!("charts: nothing to refresh before the page is bound"),
        },
        Err(_) => log::warn!("charts: refresh skipped while binding"),
    });
}
