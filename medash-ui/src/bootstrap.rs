//! Composition root: discovers marked elements and wires every behavior once.
//!
//! The binding table maps each behavior's marker selector to its module and
//! is built once when the page is ready. Each element is attached on its
//! own; a failure is logged and counted without stopping the rest.

use crate::behaviors::{
    BehaviorModule, ChartBehavior, FieldErrorRenderer, NotificationBehavior, TableBehavior,
    TooltipBehavior, ValidationBehavior,
};
use crate::dom::{self, Listener};
use crate::error::BehaviorError;
use medash_core::config::CONFIG_ELEMENT_ID;
use medash_core::{Behavior, DashboardConfig, Markers};
use std::fmt;
use wasm_bindgen::JsCast;
use web_sys::{Document, ErrorEvent, Window};

/// What binding one behavior achieved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindReport {
    pub behavior: Behavior,
    pub attached: usize,
    pub failed: usize,
}

impl fmt::Display for BindReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} attached, {} failed",
            self.behavior, self.attached, self.failed
        )
    }
}

struct Binding<'a> {
    selector: String,
    module: &'a mut dyn BehaviorModule,
}

/// Marker selector to behavior module, in no particular order.
pub struct BindingTable<'a> {
    bindings: Vec<Binding<'a>>,
}

impl<'a> BindingTable<'a> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    pub fn register(&mut self, selector: String, module: &'a mut dyn BehaviorModule) {
        self.bindings.push(Binding { selector, module });
    }

    /// Query the document once per binding and attach every match.
    pub fn bind_all(self, document: &Document) -> Vec<BindReport> {
        self.bindings
            .into_iter()
            .map(|binding| bind_one(document, binding))
            .collect()
    }
}

impl Default for BindingTable<'_> {
    fn default() -> Self {
        Self::new()
    }
}

fn bind_one(document: &Document, binding: Binding<'_>) -> BindReport {
    let behavior = binding.module.behavior();
    let mut report = BindReport {
        behavior,
        attached: 0,
        failed: 0,
    };
    let elements = match dom::query_all(document, &binding.selector) {
        Ok(elements) => elements,
        Err(e) => {
            log::error!("{behavior}: bad selector {:?}: {e}", binding.selector);
            return report;
        }
    };
    for element in elements {
        match binding.module.attach(element) {
            Ok(()) => report.attached += 1,
            Err(e) => {
                log::warn!("{behavior}: attach failed: {e}");
                report.failed += 1;
            }
        }
    }
    report
}

/// Every behavior attached to the page. Dropping it detaches them all.
pub struct Dashboard {
    document: Document,
    markers: Markers,
    tooltip: TooltipBehavior,
    validation: ValidationBehavior,
    charts: ChartBehavior,
    tables: TableBehavior,
    notifications: NotificationBehavior,
    reports: Option<Vec<BindReport>>,
}

impl Dashboard {
    pub fn new(window: Window, document: Document, config: &DashboardConfig) -> Self {
        let markers = &config.markers;
        Self {
            tooltip: TooltipBehavior::new(
                window,
                document.clone(),
                &markers.tooltip,
                config.tooltip.clone(),
            ),
            validation: ValidationBehavior::new(FieldErrorRenderer::new(
                document.clone(),
                config.messages.clone(),
                config.classes.clone(),
            )),
            charts: ChartBehavior::new(markers.clone(), config.chart.clone()),
            tables: TableBehavior::new(
                document.clone(),
                &config.search_placeholder,
                &config.classes.search_input,
            ),
            notifications: NotificationBehavior::new(markers.clone(), config.notification),
            markers: markers.clone(),
            document,
            reports: None,
        }
    }

    /// Attach every behavior to its marked elements. Runs once; later calls
    /// return the first run's reports.
    pub fn bind(&mut self) -> &[BindReport] {
        let Self {
            document,
            markers,
            tooltip,
            validation,
            charts,
            tables,
            notifications,
            reports,
        } = &mut *self;

        if reports.is_some() {
            log::warn!("bootstrap: behaviors already bound, ignoring");
        } else {
            let modules: [&mut dyn BehaviorModule; 5] =
                [tooltip, validation, charts, tables, notifications];
            let mut table = BindingTable::new();
            for module in modules {
                let selector = markers.selector(module.behavior());
                table.register(selector, module);
            }
            let bound = table.bind_all(document);
            for report in &bound {
                log::info!("bootstrap: {report}");
            }
            *reports = Some(bound);
        }
        self.reports()
    }

    pub fn reports(&self) -> &[BindReport] {
        self.reports.as_deref().unwrap_or_default()
    }

    pub fn charts(&self) -> &ChartBehavior {
        &self.charts
    }
}

/// Read the JSON override block, falling back to defaults.
pub fn load_config(document: &Document) -> DashboardConfig {
    let Some(block) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return DashboardConfig::default();
    };
    let text = block.text_content().unwrap_or_default();
    match DashboardConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("bootstrap: {e:#}; using defaults");
            DashboardConfig::default()
        }
    }
}

/// Run `ready` once the document has been parsed.
///
/// Returns the pending listener when the document is still loading; keep it
/// alive until it fires.
pub fn on_ready(
    document: &Document,
    ready: impl FnOnce() + 'static,
) -> Result<Option<Listener>, BehaviorError> {
    if document.ready_state() != "loading" {
        ready();
        return Ok(None);
    }
    let mut ready = Some(ready);
    let listener = Listener::attach(document, "DOMContentLoaded", move |_| {
        if let Some(ready) = ready.take() {
            ready();
        }
    })?;
    Ok(Some(listener))
}

/// Log uncaught page errors. Logging only: nothing is retried or resubmitted.
pub fn install_error_listener(window: &Window) -> Result<Listener, BehaviorError> {
    Listener::attach(window, "error", |event| match event.dyn_ref::<ErrorEvent>() {
        Some(error) => log::error!(
            "JavaScript error: {} ({}:{}:{})",
            error.message(),
            error.filename(),
            error.lineno(),
            error.colno()
        ),
        None => log::error!("JavaScript error: {}", event.type_()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_display() {
        let report = BindReport {
            behavior: Behavior::Chart,
            attached: 3,
            failed: 1,
        };
        assert_eq!(report.to_string(), "chart: 3 attached, 1 failed");
    }
}
