//! Auto-dismissal of success banners.
//!
//! Both timers (fade, then removal) are scheduled when the banner is
//! attached and held by the behavior. Dropping the behavior clears them. A manual dismissal through the banner's
//! `[data-dismiss]` control removes the banner and cancels the timers, and
//! a timer that fires after the banner left the document does nothing.

use super::BehaviorModule;
use crate::dom::Listener;
use crate::error::{describe, BehaviorError};
use gloo_timers::callback::Timeout;
use medash_core::notification::{is_auto_dismissed, BannerState, DismissSchedule};
use medash_core::{Behavior, Markers};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

struct Banner {
    element: HtmlElement,
    fade_ms: u32,
    state: RefCell<BannerState>,
    timers: RefCell<Vec<Timeout>>,
}

impl Banner {
    fn fade(&self) {
        if !self.state.borrow_mut().begin_fade() {
            return;
        }
        if !self.element.is_connected() {
            self.state.borrow_mut().finish();
            return;
        }
        let style = self.element.style();
        let transition = format!("opacity {}ms", self.fade_ms);
        for (property, value) in [("transition", transition.as_str()), ("opacity", "0")] {
            if let Err(e) = style.set_property(property, value) {
                log::debug!("notification: cannot set {property}: {}", describe(&e));
            }
        }
    }

    fn remove(&self) {
        if !self.state.borrow_mut().finish() {
            return;
        }
        if self.element.is_connected() {
            self.element.remove();
        }
    }

    fn cancel(&self) {
        self.timers.borrow_mut().clear();
    }

    /// Remove the banner now and cancel its timers.
    fn dismiss(&self) {
        self.cancel();
        self.remove();
    }
}

/// Pending dismissal of one banner.
struct DismissHandle {
    _banner: Rc<Banner>,
    _close: Option<Listener>,
}

pub struct NotificationBehavior {
    markers: Markers,
    schedule: DismissSchedule,
    banners: Vec<DismissHandle>,
}

impl NotificationBehavior {
    pub fn new(markers: Markers, schedule: DismissSchedule) -> Self {
        Self {
            markers,
            schedule,
            banners: Vec::new(),
        }
    }
}

fn schedule(banner: &Rc<Banner>, millis: u32, step: fn(&Banner)) -> Timeout {
    let weak: Weak<Banner> = Rc::downgrade(banner);
    Timeout::new(millis, move || {
        if let Some(banner) = weak.upgrade() {
            step(&banner);
        }
    })
}

impl BehaviorModule for NotificationBehavior {
    fn behavior(&self) -> Behavior {
        Behavior::Notification
    }

    fn attach(&mut self, element: Element) -> Result<(), BehaviorError> {
        if !is_auto_dismissed(&element.class_name(), &self.markers.success_banner) {
            return Ok(());
        }
        let element = element
            .dyn_into::<HtmlElement>()
            .map_err(|_| BehaviorError::WrongElement("HTML element"))?;

        let banner = Rc::new(Banner {
            element,
            fade_ms: self.schedule.fade_ms,
            state: RefCell::new(BannerState::default()),
            timers: RefCell::new(Vec::new()),
        });
        banner.timers.borrow_mut().extend([
            schedule(&banner, self.schedule.delay_ms, Banner::fade),
            schedule(&banner, self.schedule.total_ms(), Banner::remove),
        ]);

        let close = match banner
            .element
            .query_selector(&self.markers.dismiss_selector())?
        {
            Some(control) => {
                let weak = Rc::downgrade(&banner);
                Some(Listener::attach(&control, "click", move |event| {
                    event.prevent_default();
                    if let Some(banner) = weak.upgrade() {
                        banner.dismiss();
                    }
                })?)
            }
            None => None,
        };

        self.banners.push(DismissHandle {
            _banner: banner,
            _close: close,
        });
        Ok(())
    }
}
