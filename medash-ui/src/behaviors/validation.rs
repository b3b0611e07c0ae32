//! Client-side validation for `form[data-validate]`.
//!
//! On submit every `[required]` and `input[type=email]` field is judged once.
//! A failing field gets a single inline error element placed directly after
//! it; a passing field has any earlier error cleared. If anything failed the
//! submit event is cancelled and no request leaves the page.

use super::BehaviorModule;
use crate::dom::{self, Listener};
use crate::error::BehaviorError;
use medash_core::config::Classes;
use medash_core::markers::VALIDATED_FIELDS;
use medash_core::validation::{check_field, FieldConstraints, FieldKind, FormReport, Messages};
use medash_core::Behavior;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Shows and clears inline field errors.
pub struct FieldErrorRenderer {
    document: Document,
    messages: Messages,
    classes: Classes,
}

impl FieldErrorRenderer {
    pub fn new(document: Document, messages: Messages, classes: Classes) -> Self {
        Self {
            document,
            messages,
            classes,
        }
    }

    /// Validate every field of `form`, updating inline errors.
    ///
    /// Running it again on an unchanged form changes nothing visible.
    pub fn validate(&self, form: &Element) -> Result<bool, BehaviorError> {
        let mut report = FormReport::default();
        for (index, field) in dom::query_all_in(form, VALIDATED_FIELDS)?.iter().enumerate() {
            let outcome = check_field(&field_value(field), constraints(field));
            match outcome {
                Ok(()) => self.clear_error(field)?,
                Err(error) => self.show_error(field, error.message(&self.messages))?,
            }
            report.record(index, outcome);
        }
        if !report.is_valid() {
            log::debug!(
                "validation: {} of {} fields failed",
                report.failures.len(),
                report.checked
            );
        }
        Ok(report.is_valid())
    }

    fn show_error(&self, field: &Element, message: &str) -> Result<(), BehaviorError> {
        self.clear_error(field)?;
        field.class_list().add_1(&self.classes.invalid_field)?;
        let note = self.document.create_element("div")?;
        note.set_class_name(&self.classes.field_error);
        note.set_text_content(Some(message));
        field.after_with_node_1(&note)?;
        Ok(())
    }

    fn clear_error(&self, field: &Element) -> Result<(), BehaviorError> {
        field.class_list().remove_1(&self.classes.invalid_field)?;
        if let Some(next) = field.next_element_sibling() {
            if next.class_list().contains(&self.classes.field_error_marker) {
                next.remove();
            }
        }
        Ok(())
    }
}

fn constraints(field: &Element) -> FieldConstraints {
    let is_email = field
        .dyn_ref::<HtmlInputElement>()
        .is_some_and(|input| input.type_().eq_ignore_ascii_case("email"));
    FieldConstraints {
        required: field.has_attribute("required"),
        kind: if is_email {
            FieldKind::Email
        } else {
            FieldKind::Text
        },
    }
}

fn field_value(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub struct ValidationBehavior {
    renderer: Rc<FieldErrorRenderer>,
    listeners: Vec<Listener>,
}

impl ValidationBehavior {
    pub fn new(renderer: FieldErrorRenderer) -> Self {
        Self {
            renderer: Rc::new(renderer),
            listeners: Vec::new(),
        }
    }
}

impl BehaviorModule for ValidationBehavior {
    fn behavior(&self) -> Behavior {
        Behavior::Validation
    }

    fn attach(&mut self, form: Element) -> Result<(), BehaviorError> {
        let renderer = Rc::clone(&self.renderer);
        let target = form.clone();
        let listener = Listener::attach(&form, "submit", move |event| {
            match renderer.validate(&target) {
                Ok(true) => {}
                Ok(false) => event.prevent_default(),
                // A broken check lets the submission through.
                Err(e) => log::warn!("validation: check failed, submitting anyway: {e}"),
            }
        })?;
        self.listeners.push(listener);
        Ok(())
    }
}
