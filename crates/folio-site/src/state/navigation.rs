//! Section navigation and scroll tracking.
//!
//! The home page is one long document cut into named sections. The navbar
//! highlights whichever section straddles a fixed line near the top of the
//! viewport, and clicking an entry scrolls to it. From any other route the
//! click first returns to the root route; the scroll happens once the home
//! page has mounted and claimed the pending anchor.

use serde::Deserialize;

/// Distance from the top of the viewport, in CSS pixels, of the line a
/// section must straddle to be active.
pub const ACTIVE_LINE_OFFSET: f64 = 100.0;

/// Vertical scroll, in CSS pixels, past which the navbar turns compact.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// Named anchors of the home page, in document order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Experience,
    Gallery,
    Contact,
}

impl SectionId {
    /// Every navigable section, in the order they are checked.
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Returns the DOM id of the section.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    /// Returns the navbar label.
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }

    /// Path shown in the terminal prompt.
    pub fn terminal_path(&self) -> &'static str {
        match self {
            SectionId::Home => "~",
            other => other.anchor(),
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.trim_start_matches('#');
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

/// Bounding box edges of a section relative to the viewport top.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// What the page script reports on every scroll event.
///
/// `sections` follows [`SectionId::ALL`]; `None` marks an anchor missing
/// from the DOM.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub sections: Vec<Option<SectionBounds>>,
}

/// Returns the first section, in list order, that straddles `line`.
pub fn active_section<I>(sections: I, line: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = (SectionId, Option<SectionBounds>)>,
{
    sections
        .into_iter()
        .find(|(_, bounds)| bounds.is_some_and(|b| b.straddles(line)))
        .map(|(id, _)| id)
}

/// What a navigation click should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollAction {
    /// Already on the root route: scroll to the anchor.
    ScrollNow(SectionId),
    /// Go to the root route first; the anchor is left pending.
    NavigateHome,
}

/// Navbar state shared by every page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub active: SectionId,
    pub scrolled: bool,
    pub menu_open: bool,
    pending: Option<SectionId>,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one scroll report. The active section only changes when some
    /// section straddles the line; otherwise the last one is kept.
    pub fn apply_snapshot(&mut self, snapshot: &ScrollSnapshot) {
        self.scrolled = snapshot.scroll_y > SCROLLED_THRESHOLD;

        let pairs = SectionId::ALL
            .into_iter()
            .zip(snapshot.sections.iter().copied().chain(std::iter::repeat(None)));
        if let Some(active) = active_section(pairs, ACTIVE_LINE_OFFSET) {
            if active != self.active {
                tracing::debug!("Active section: {}", active.anchor());
                self.active = active;
            }
        }
    }

    /// Handles a click on a navigation entry.
    pub fn request_scroll(&mut self, target: SectionId, on_root: bool) -> ScrollAction {
        self.menu_open = false;
        if on_root {
            self.pending = None;
            ScrollAction::ScrollNow(target)
        } else {
            self.pending = Some(target);
            ScrollAction::NavigateHome
        }
    }

    /// Claims the anchor left by a cross-route click.
    pub fn take_pending(&mut self) -> Option<SectionId> {
        self.pending.take()
    }

    pub fn pending(&self) -> Option<SectionId> {
        self.pending
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(top: f64, bottom: f64) -> Option<SectionBounds> {
        Some(SectionBounds { top, bottom })
    }

    fn snapshot(scroll_y: f64, sections: Vec<Option<SectionBounds>>) -> ScrollSnapshot {
        ScrollSnapshot { scroll_y, sections }
    }

    #[test]
    fn test_about_straddles_line() {
        let sections = [
            (SectionId::Home, b(-900.0, 40.0)),
            (SectionId::About, b(40.0, 800.0)),
            (SectionId::Projects, b(800.0, 1600.0)),
        ];
        assert_eq!(active_section(sections, ACTIVE_LINE_OFFSET), Some(SectionId::About));
    }

    #[test]
    fn test_first_match_in_list_order_wins() {
        let sections = [
            (SectionId::Projects, b(0.0, 200.0)),
            (SectionId::About, b(50.0, 150.0)),
        ];
        assert_eq!(active_section(sections, ACTIVE_LINE_OFFSET), Some(SectionId::Projects));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        assert!(SectionBounds { top: 100.0, bottom: 300.0 }.straddles(100.0));
        assert!(SectionBounds { top: -50.0, bottom: 100.0 }.straddles(100.0));
        assert!(!SectionBounds { top: 101.0, bottom: 300.0 }.straddles(100.0));
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let sections = [(SectionId::Home, None), (SectionId::About, b(0.0, 500.0))];
        assert_eq!(active_section(sections, ACTIVE_LINE_OFFSET), Some(SectionId::About));
        assert_eq!(active_section([(SectionId::Home, None)], ACTIVE_LINE_OFFSET), None);
    }

    #[test]
    fn test_snapshot_updates_active_and_scrolled() {
        let mut nav = NavState::new();
        nav.apply_snapshot(&snapshot(
            720.0,
            vec![b(-720.0, -20.0), b(-20.0, 700.0), b(700.0, 1500.0)],
        ));
        assert_eq!(nav.active, SectionId::About);
        assert!(nav.scrolled);
    }

    #[test]
    fn test_snapshot_without_match_keeps_active() {
        let mut nav = NavState::new();
        nav.active = SectionId::Experience;
        nav.apply_snapshot(&snapshot(10.0, vec![None, b(400.0, 900.0)]));
        assert_eq!(nav.active, SectionId::Experience);
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_request_scroll_on_root() {
        let mut nav = NavState::new();
        nav.menu_open = true;
        assert_eq!(
            nav.request_scroll(SectionId::Contact, true),
            ScrollAction::ScrollNow(SectionId::Contact)
        );
        assert!(!nav.menu_open);
        assert_eq!(nav.take_pending(), None);
    }

    #[test]
    fn test_request_scroll_off_root_leaves_pending() {
        let mut nav = NavState::new();
        assert_eq!(nav.request_scroll(SectionId::Gallery, false), ScrollAction::NavigateHome);
        assert_eq!(nav.pending(), Some(SectionId::Gallery));
        assert_eq!(nav.take_pending(), Some(SectionId::Gallery));
        assert_eq!(nav.take_pending(), None);
    }

    #[test]
    fn test_anchor_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("#about"), Some(SectionId::About));
        assert_eq!(SectionId::from_anchor("testimonials"), None);
    }
}
