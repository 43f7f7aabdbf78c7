//! Scroll-triggered reveal state.

use serde::Deserialize;

/// Presentational state of an element that fades in on scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Returns the CSS class for this state.
    pub fn css_class(&self) -> &'static str {
        match self {
            RevealState::Hidden => "reveal-hidden",
            RevealState::Visible => "reveal-visible",
        }
    }
}

/// One intersection entry as reported by the page observer.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct IntersectionReport {
    pub intersecting: bool,
    pub ratio: f64,
}

/// Two-state machine driven by viewport intersection reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    /// Fraction of the element (0.0..=1.0) that must be in view.
    pub threshold: f64,
    /// Once visible, stay visible.
    pub once: bool,
    state: RevealState,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(0.1, true)
    }
}

impl RevealTrigger {
    pub fn new(threshold: f64, once: bool) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            once,
            state: RevealState::Hidden,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Feeds one intersection report and returns the resulting state.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> RevealState {
        let in_view = intersecting && ratio >= self.threshold;
        self.state = match (self.state, in_view) {
            (_, true) => RevealState::Visible,
            (RevealState::Visible, false) if self.once => RevealState::Visible,
            (_, false) => RevealState::Hidden,
        };
        self.state
    }

    pub fn observe_report(&mut self, report: IntersectionReport) -> RevealState {
        self.observe(report.intersecting, report.ratio)
    }

    /// Shows the element unconditionally. Used when no observer can be
    /// installed, so content is never left hidden.
    pub fn reveal(&mut self) {
        self.state = RevealState::Visible;
    }

    /// True once no further report can change the state.
    pub fn is_settled(&self) -> bool {
        self.once && self.state == RevealState::Visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        assert_eq!(RevealTrigger::default().state(), RevealState::Hidden);
    }

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut trigger = RevealTrigger::new(0.5, true);
        assert_eq!(trigger.observe(true, 0.2), RevealState::Hidden);
        assert_eq!(trigger.observe(true, 0.5), RevealState::Visible);
    }

    #[test]
    fn test_once_stays_visible() {
        let mut trigger = RevealTrigger::new(0.1, true);
        trigger.observe(true, 0.3);
        assert_eq!(trigger.observe(false, 0.0), RevealState::Visible);
    }

    #[test]
    fn test_repeating_reverts_on_exit() {
        let mut trigger = RevealTrigger::new(0.1, false);
        assert_eq!(trigger.observe(true, 1.0), RevealState::Visible);
        assert_eq!(trigger.observe(false, 0.0), RevealState::Hidden);
        assert_eq!(trigger.observe(true, 0.4), RevealState::Visible);
    }

    #[test]
    fn test_entry_below_threshold_waits_for_crossing() {
        // A card entering the viewport first reports a sliver, then the
        // observer reports again once the threshold is crossed.
        let mut trigger = RevealTrigger::default();
        assert_eq!(trigger.observe(true, 20.0 / 600.0), RevealState::Hidden);
        assert!(!trigger.is_settled());

        let crossing = IntersectionReport { intersecting: true, ratio: 0.1 };
        assert_eq!(trigger.observe_report(crossing), RevealState::Visible);
        assert!(trigger.is_settled());
    }

    #[test]
    fn test_reveal_without_observer() {
        let mut trigger = RevealTrigger::default();
        trigger.reveal();
        assert_eq!(trigger.state(), RevealState::Visible);
        assert!(trigger.is_settled());
        assert!(!RevealTrigger::new(0.1, false).is_settled());
    }

    #[test]
    fn test_report_deserializes() {
        let report: IntersectionReport =
            serde_json::from_str(r#"{"intersecting":true,"ratio":0.25}"#).unwrap();
        assert_eq!(report, IntersectionReport { intersecting: true, ratio: 0.25 });
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTrigger::new(4.0, true).threshold, 1.0);
        assert_eq!(RevealTrigger::new(-1.0, true).threshold, 0.0);
    }
}
