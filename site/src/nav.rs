use tracing::debug;

use crate::{
    scroll::{SectionSpan, locate},
    section::Section,
};

// how the address bar should be updated after a navigation transition
//
// scrolling replaces the current entry, clicking pushes a new one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryOp {
    Replace(Section),
    Push(Section),
}

impl HistoryOp {
    pub fn section(self) -> Section {
        match self {
            Self::Replace(section) | Self::Push(section) => section,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    // recompute the active section from the scroll position
    //
    // current_fragment is the raw location.hash; a history replace is only requested when it
    // does not already name the active section.  when no span contains the offset the state
    // is left alone
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        spans: &[SectionSpan],
        current_fragment: &str,
    ) -> Option<HistoryOp> {
        let section = locate(scroll_y, spans)?;

        if section != self.active {
            debug!({ from = %self.active, to = %section }, "active section changed");
            self.active = section;
        }

        match Section::from_fragment(current_fragment) {
            Some(current) if current == section => None,
            _ => Some(HistoryOp::Replace(section)),
        }
    }

    // a click on a nav control or call-to-action
    //
    // the active section is set optimistically; the scroll events fired by the smooth scroll
    // will agree with it once the animation settles
    pub fn navigate(&mut self, section: Section) -> HistoryOp {
        debug!({ section = %section }, "navigating");
        self.active = section;
        self.menu_open = false;
        HistoryOp::Push(section)
    }

    // page opened with a fragment already in the url; nothing is pushed since the entry exists
    pub fn restore(&mut self, fragment: &str) -> Option<Section> {
        let section = Section::from_fragment(fragment)?;
        self.active = section;
        Some(section)
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionSpan> {
        vec![
            SectionSpan::new(Section::Home, 0.0, 900.0),
            SectionSpan::new(Section::About, 900.0, 700.0),
            SectionSpan::new(Section::Services, 1600.0, 800.0),
            SectionSpan::new(Section::Portfolio, 2400.0, 1100.0),
            SectionSpan::new(Section::Contact, 3500.0, 800.0),
        ]
    }

    #[test]
    fn starts_at_home_with_menu_closed() {
        let nav = NavState::new();
        assert_eq!(nav.active, Section::Home);
        assert!(!nav.menu_open);
    }

    #[test]
    fn scroll_replaces_history_when_fragment_differs() {
        let mut nav = NavState::new();
        let spans = layout();

        let op = nav.on_scroll(1700.0, &spans, "#about");
        assert_eq!(nav.active, Section::Services);
        assert_eq!(op, Some(HistoryOp::Replace(Section::Services)));

        let op = nav.on_scroll(1700.0, &spans, "");
        assert_eq!(op, Some(HistoryOp::Replace(Section::Services)));
    }

    #[test]
    fn scroll_is_quiet_when_fragment_matches() {
        let mut nav = NavState::new();

        let op = nav.on_scroll(2500.0, &layout(), "#portfolio");
        assert_eq!(nav.active, Section::Portfolio);
        assert_eq!(op, None);
    }

    #[test]
    fn scroll_outside_spans_keeps_state() {
        let mut nav = NavState::new();
        let spans = layout();

        nav.on_scroll(3600.0, &spans, "");
        assert_eq!(nav.active, Section::Contact);

        let op = nav.on_scroll(10_000.0, &spans, "#contact");
        assert_eq!(op, None);
        assert_eq!(nav.active, Section::Contact);
    }

    #[test]
    fn navigate_pushes_and_closes_menu() {
        for section in Section::ALL {
            let mut nav = NavState::new();
            nav.toggle_menu();
            assert!(nav.menu_open);

            let op = nav.navigate(section);

            assert_eq!(op, HistoryOp::Push(section));
            assert_eq!(op.section().fragment(), format!("#{}", section.id()));
            assert_eq!(nav.active, section);
            assert!(!nav.menu_open);
        }
    }

    #[test]
    fn navigate_with_menu_closed_leaves_it_closed() {
        let mut nav = NavState::new();
        nav.navigate(Section::About);
        assert!(!nav.menu_open);
    }

    #[test]
    fn restore_from_fragment() {
        let mut nav = NavState::new();

        assert_eq!(nav.restore("#services"), Some(Section::Services));
        assert_eq!(nav.active, Section::Services);

        assert_eq!(nav.restore("#nowhere"), None);
        assert_eq!(nav.active, Section::Services);
    }

    #[test]
    fn toggle_menu_flips() {
        let mut nav = NavState::new();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
        nav.toggle_menu();
        assert!(nav.menu_open);
    }
}
