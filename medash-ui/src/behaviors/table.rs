//! Search box for tables marked `data-table`.

use super::BehaviorModule;
use crate::dom::{self, Listener};
use crate::error::BehaviorError;
use medash_core::markers::TABLE_BODY_ROWS;
use medash_core::table_filter::SearchTerm;
use medash_core::Behavior;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

pub struct TableBehavior {
    document: Document,
    placeholder: String,
    input_class: String,
    listeners: Vec<Listener>,
}

impl TableBehavior {
    pub fn new(document: Document, placeholder: &str, input_class: &str) -> Self {
        Self {
            document,
            placeholder: placeholder.to_string(),
            input_class: input_class.to_string(),
            listeners: Vec::new(),
        }
    }
}

/// Show body rows whose text contains `term` and hide the rest. Returns the
/// number of rows left visible.
pub fn filter_rows(table: &Element, term: &str) -> Result<usize, BehaviorError> {
    let term = SearchTerm::new(term);
    let mut visible = 0;
    for row in dom::query_all_in(table, TABLE_BODY_ROWS)? {
        let Some(row) = row.dyn_ref::<HtmlElement>() else {
            continue;
        };
        let text = row.text_content().unwrap_or_default();
        if term.matches(&text) {
            row.style().remove_property("display")?;
            visible += 1;
        } else {
            row.style().set_property("display", "none")?;
        }
    }
    Ok(visible)
}

impl BehaviorModule for TableBehavior {
    fn behavior(&self) -> Behavior {
        Behavior::Table
    }

    fn attach(&mut self, table: Element) -> Result<(), BehaviorError> {
        let input: HtmlInputElement = dom::create(&self.document, "input")?;
        input.set_type("text");
        input.set_placeholder(&self.placeholder);
        input.set_class_name(&self.input_class);
        table.before_with_node_1(&input)?;

        let search = input.clone();
        let listener = Listener::attach(&input, "input", move |_| {
            if let Err(e) = filter_rows(&table, &search.value()) {
                log::warn!("table: filtering failed: {e}");
            }
        })?;
        self.listeners.push(listener);
        Ok(())
    }
}
