//! Small helpers over `web-sys` used by every behavior.

use crate::error::{describe, BehaviorError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::Missing("window"))
}

pub fn document() -> Result<Document, BehaviorError> {
    window()?.document().ok_or(BehaviorError::Missing("document"))
}

pub fn body(document: &Document) -> Result<HtmlElement, BehaviorError> {
    document.body().ok_or(BehaviorError::Missing("document body"))
}

/// Collect a `NodeList` into its element nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

/// Create an element and cast it to its concrete type.
pub fn create<T: JsCast>(document: &Document, tag: &'static str) -> Result<T, BehaviorError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| BehaviorError::WrongElement(tag))
}

/// An event listener that stays registered for as long as this value lives.
///
/// Dropping it unregisters the handler and frees the closure.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, BehaviorError> {
        let closure = Closure::<dyn FnMut(Event)>::wrap(Box::new(handler));
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref())
        {
            log::debug!("listener: cannot remove {} handler: {}", self.kind, describe(&e));
        }
    }
}
