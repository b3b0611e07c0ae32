//! Typed binding to the external Chart.js engine.
//!
//! The page loads Chart.js as a classic script, which exposes the global
//! `Chart` constructor. Configurations cross the boundary as plain JS
//! objects built from the serde representation in `medash_core::chart`.

use crate::error::BehaviorError;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A live Chart.js chart.
    #[derive(Debug, Clone)]
    pub type Chart;

    /// `new Chart(item, config)`; throws if the engine rejects the config.
    #[wasm_bindgen(constructor, catch)]
    pub fn new(item: &JsValue, config: &JsValue) -> Result<Chart, JsValue>;

    /// Redraw with the current data and options.
    #[wasm_bindgen(method)]
    pub fn update(this: &Chart);

    #[wasm_bindgen(method)]
    pub fn destroy(this: &Chart);
}

/// True when the page has loaded the engine.
pub fn engine_available() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
}

/// Serialize into a plain JS object (maps become objects, not `Map`s).
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue, BehaviorError> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

/// Render a chart on `item` (a canvas 2D context or the canvas itself).
pub fn render(item: &JsValue, config: &JsValue) -> Result<Chart, BehaviorError> {
    if !engine_available() {
        return Err(BehaviorError::Missing("Chart.js engine"));
    }
    Ok(Chart::new(item, config)?)
}
