//! Charts declared with `data-chart` + `data-chart-data`.
//!
//! A malformed payload fails only its own element: nothing is drawn and the
//! orchestrator counts it as failed. Each element is rendered once. Charts
//! are destroyed when the behavior is dropped.

use super::BehaviorModule;
use crate::error::BehaviorError;
use crate::js_bridge::{self, Chart};
use medash_core::chart::{ChartConfig, ChartSpec, ChartStyle};
use medash_core::{Behavior, Markers};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlCanvasElement};

pub struct ChartBehavior {
    markers: Markers,
    style: ChartStyle,
    charts: Vec<Chart>,
}

impl ChartBehavior {
    pub fn new(markers: Markers, style: ChartStyle) -> Self {
        Self {
            markers,
            style,
            charts: Vec::new(),
        }
    }

    /// Ask every chart to redraw.
    pub fn refresh(&self) {
        for chart in &self.charts {
            chart.update();
        }
        log::info!("charts: refreshed {}", self.charts.len());
    }
}

impl Drop for ChartBehavior {
    fn drop(&mut self) {
        for chart in self.charts.drain(..) {
            chart.destroy();
        }
    }
}

/// Chart.js draws into a canvas 2D context.
fn drawing_context(element: &Element) -> Result<JsValue, BehaviorError> {
    let canvas = element
        .dyn_ref::<HtmlCanvasElement>()
        .ok_or(BehaviorError::WrongElement("canvas"))?;
    canvas
        .get_context("2d")?
        .map(JsValue::from)
        .ok_or(BehaviorError::Missing("2d context"))
}

impl BehaviorModule for ChartBehavior {
    fn behavior(&self) -> Behavior {
        Behavior::Chart
    }

    fn attach(&mut self, element: Element) -> Result<(), BehaviorError> {
        let kind = element.get_attribute(&self.markers.chart_kind);
        let payload = element.get_attribute(&self.markers.chart_data);
        let spec = ChartSpec::from_markup(kind.as_deref(), payload.as_deref())?;
        let config = ChartConfig::build(spec, &self.style);
        let context = drawing_context(&element)?;
        let chart = js_bridge::render(&context, &js_bridge::to_js(&config)?)?;
        log::debug!("chart: rendered {} chart", config.kind.as_str());
        self.charts.push(chart);
        Ok(())
    }
}
