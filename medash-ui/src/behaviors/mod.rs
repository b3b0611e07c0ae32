//! Behavior modules. Each one wires a single feature onto marked elements
//! and owns everything it creates (listeners, overlays, timers, charts).
//! Modules share no mutable state, so binding order does not matter.

mod chart;
mod notification;
mod table;
mod tooltip;
mod validation;

pub use chart::ChartBehavior;
pub use notification::NotificationBehavior;
pub use table::{filter_rows, TableBehavior};
pub use tooltip::TooltipBehavior;
pub use validation::{FieldErrorRenderer, ValidationBehavior};

use crate::error::BehaviorError;
use medash_core::Behavior;
use web_sys::Element;

/// A behavior that can be attached to elements carrying its marker.
pub trait BehaviorModule {
    fn behavior(&self) -> Behavior;

    /// Wire the behavior onto one element. An error affects only this
    /// element; the caller logs it and moves on.
    fn attach(&mut self, element: Element) -> Result<(), BehaviorError>;
}
