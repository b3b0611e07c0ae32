//! Success banner dismissal timing.
//!
//! A banner stays for `delay_ms`, fades for `fade_ms`, then leaves the
//! document. [`BannerState`] makes each step happen at most once, whichever
//! of the timers or a manual dismissal gets there first.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DismissSchedule {
    pub delay_ms: u32,
    pub fade_ms: u32,
}

impl Default for DismissSchedule {
    fn default() -> Self {
        Self {
            delay_ms: 5000,
            fade_ms: 300,
        }
    }
}

impl DismissSchedule {
    /// Time from attachment until the banner is gone.
    pub fn total_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.fade_ms)
    }
}

/// Lifecycle of one banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerState {
    #[default]
    Shown,
    Fading,
    Gone,
}

impl BannerState {
    /// Start the fade. False if the banner is already fading or gone.
    pub fn begin_fade(&mut self) -> bool {
        if *self == BannerState::Shown {
            *self = BannerState::Fading;
            true
        } else {
            false
        }
    }

    /// Take the banner out. False if it is already gone, so removal of a
    /// detached banner is a no-op.
    pub fn finish(&mut self) -> bool {
        if *self == BannerState::Gone {
            false
        } else {
            *self = BannerState::Gone;
            true
        }
    }
}

/// Whether a banner with `class_list` dismisses itself.
pub fn is_auto_dismissed(class_list: &str, success_class: &str) -> bool {
    class_list.split_whitespace().any(|class| class == success_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_is_five_seconds_then_fade() {
        let schedule = DismissSchedule::default();
        assert_eq!(schedule.delay_ms, 5000);
        assert_eq!(schedule.total_ms(), 5300);
    }

    #[test]
    fn state_steps_happen_once() {
        let mut state = BannerState::default();
        assert!(state.begin_fade());
        assert!(!state.begin_fade());
        assert!(state.finish());
        assert!(!state.finish());
        assert!(!state.begin_fade());
    }

    #[test]
    fn manual_dismissal_before_timers() {
        let mut state = BannerState::default();
        assert!(state.finish());
        // Both timers later find nothing to do.
        assert!(!state.begin_fade());
        assert!(!state.finish());
    }

    #[test]
    fn only_success_banners_dismiss_themselves() {
        assert!(is_auto_dismissed("alert alert-success mb-2", "alert-success"));
        assert!(!is_auto_dismissed("alert alert-error", "alert-success"));
        assert!(!is_auto_dismissed("alert-successful", "alert-success"));
    }

    #[test]
    fn partial_schedule_override() {
        let schedule: DismissSchedule = serde_json::from_str(r#"{"delayMs": 8000}"#).unwrap();
        assert_eq!(schedule.total_ms(), 8300);
    }
}
