//! Hover tooltips for elements carrying `data-tooltip`.
//!
//! All marked elements share one overlay slot owned by this behavior, so at
//! most one tooltip exists at a time no matter how events interleave.

use super::BehaviorModule;
use crate::dom::{self, Listener};
use crate::error::BehaviorError;
use medash_core::tooltip::{place_above, Rect, TooltipStyle};
use medash_core::Behavior;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, HtmlElement, Window};

pub struct TooltipBehavior {
    overlay: Rc<Overlay>,
    listeners: Vec<Listener>,
}

struct Overlay {
    window: Window,
    document: Document,
    text_attr: String,
    style: TooltipStyle,
    live: RefCell<Option<HtmlElement>>,
}

impl Overlay {
    fn show(&self, anchor: &Element) -> Result<(), BehaviorError> {
        self.hide();

        let text = anchor.get_attribute(&self.text_attr).unwrap_or_default();
        let tip: HtmlElement = dom::create(&self.document, "div")?;
        tip.set_class_name(&self.style.class);
        tip.set_id(&self.style.id);
        tip.set_text_content(Some(&text));
        dom::body(&self.document)?.append_child(&tip)?;
        // Stored before positioning so a failure below still leaves it removable.
        *self.live.borrow_mut() = Some(tip.clone());

        let bounds = anchor.get_bounding_client_rect();
        let anchor_rect = Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        };
        let scroll = (self.window.scroll_x()?, self.window.scroll_y()?);
        let placement = place_above(
            anchor_rect,
            f64::from(tip.offset_height()),
            self.style.gap_px,
            scroll,
        );
        let css = tip.style();
        css.set_property("left", &placement.left_px())?;
        css.set_property("top", &placement.top_px())?;
        Ok(())
    }

    fn hide(&self) {
        if let Some(tip) = self.live.borrow_mut().take() {
            tip.remove();
        }
    }
}

impl TooltipBehavior {
    pub fn new(window: Window, document: Document, text_attr: &str, style: TooltipStyle) -> Self {
        Self {
            overlay: Rc::new(Overlay {
                window,
                document,
                text_attr: text_attr.to_string(),
                style,
                live: RefCell::new(None),
            }),
            listeners: Vec::new(),
        }
    }
}

impl BehaviorModule for TooltipBehavior {
    fn behavior(&self) -> Behavior {
        Behavior::Tooltip
    }

    fn attach(&mut self, element: Element) -> Result<(), BehaviorError> {
        let overlay = Rc::clone(&self.overlay);
        let anchor = element.clone();
        let enter = Listener::attach(&element, "mouseenter", move |_| {
            if let Err(e) = overlay.show(&anchor) {
                log::warn!("tooltip: failed to show: {e}");
            }
        })?;

        let overlay = Rc::clone(&self.overlay);
        let leave = Listener::attach(&element, "mouseleave", move |_| overlay.hide())?;

        self.listeners.push(enter);
        self.listeners.push(leave);
        Ok(())
    }
}
