use crate::models::{NavItem, NavTarget};

use super::resolver::{resolve, SectionLayout};

/// Scroll position as the bar sees it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub offset_px: u32,
    pub past_threshold: bool,
}

impl ScrollState {
    /// Overscroll bounce can report negative offsets; those count as 0.
    pub fn from_offset(offset: f64, threshold_px: u32) -> Self {
        let offset_px = if offset.is_finite() && offset > 0.0 {
            offset.round() as u32
        } else {
            0
        };

        Self {
            offset_px,
            past_threshold: offset_px > threshold_px,
        }
    }
}

/// What the caller must do after an item was clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Suppress the link's default navigation and scroll to the section.
    ScrollTo { section_id: String },
    /// Let the browser or router follow the href.
    Follow,
}

impl Activation {
    /// Whether the link's own navigation must be suppressed.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Activation::ScrollTo { .. })
    }
}

/// Visual state of one navigation bar.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    active: Option<String>,
    menu_open: bool,
    scroll: ScrollState,
}

impl NavState {
    /// The first item is active until the page has been measured.
    pub fn new(items: &[NavItem]) -> Self {
        Self {
            active: items.first().map(|item| item.name.clone()),
            ..Self::default()
        }
    }

    /// Starts with `name` selected, if it is one of `items`.
    pub fn starting_at(items: &[NavItem], name: &str) -> Self {
        let mut state = Self::new(items);
        if items.iter().any(|item| item.name == name) {
            state.active = Some(name.to_owned());
        }
        state
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.as_deref() == Some(name)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Returns true when the scroll state changed.
    pub fn record_scroll(&mut self, offset: f64, threshold_px: u32) -> bool {
        let scroll = ScrollState::from_offset(offset, threshold_px);
        if scroll == self.scroll {
            return false;
        }
        self.scroll = scroll;
        true
    }

    /// Moves the selection to the section under the cursor. A cursor over
    /// no section keeps the current selection.
    ///
    /// Returns true when the selection changed.
    pub fn resolve_scroll<L>(
        &mut self,
        items: &[NavItem],
        layout: &L,
        scroll_offset: f64,
        anchor_offset: f64,
    ) -> bool
    where
        L: SectionLayout + ?Sized,
    {
        match resolve(items, layout, scroll_offset, anchor_offset) {
            Some(name) if !self.is_active(name) => {
                self.active = Some(name.to_owned());
                true
            }
            _ => false,
        }
    }

    /// Selects `item` right away, ahead of any scroll, and closes the menu.
    pub fn activate(&mut self, item: &NavItem) -> Activation {
        self.active = Some(item.name.clone());
        self.menu_open = false;

        match item.target() {
            NavTarget::Anchor(id) => Activation::ScrollTo {
                section_id: id.to_owned(),
            },
            NavTarget::External(_) => Activation::Follow,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Returns true if the menu was open.
    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.menu_open, false)
    }

    /// Widening to the desktop layout closes the mobile menu. Returns true
    /// when that happened.
    pub fn viewport_resized(&mut self, width: f64, breakpoint: f64) -> bool {
        width >= breakpoint && self.close_menu()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::navigation::SectionBounds;

    fn items() -> Vec<NavItem> {
        vec![
            NavItem::new("Home", "#home"),
            NavItem::new("About", "#about"),
            NavItem::new("Docs", "/docs"),
        ]
    }

    #[test]
    fn test_first_item_is_initial_selection() {
        assert_eq!(NavState::new(&items()).active(), Some("Home"));
        assert_eq!(NavState::new(&[]).active(), None);
    }

    #[test]
    fn test_starting_at_ignores_unknown_names() {
        let items = items();
        assert_eq!(NavState::starting_at(&items, "Docs").active(), Some("Docs"));
        assert_eq!(NavState::starting_at(&items, "Blog").active(), Some("Home"));
    }

    #[test]
    fn test_scroll_threshold() {
        assert_eq!(
            ScrollState::from_offset(20.0, 20),
            ScrollState {
                offset_px: 20,
                past_threshold: false,
            }
        );
        assert!(ScrollState::from_offset(21.0, 20).past_threshold);
        assert_eq!(ScrollState::from_offset(-35.0, 20).offset_px, 0);
        assert_eq!(ScrollState::from_offset(f64::NAN, 20).offset_px, 0);
    }

    #[test]
    fn test_record_scroll_reports_changes() {
        let mut state = NavState::new(&items());
        assert!(state.record_scroll(40.0, 20));
        assert!(!state.record_scroll(40.2, 20));
        assert!(state.scroll().past_threshold);
    }

    #[test]
    fn test_resolve_outside_sections_keeps_selection() {
        let items = items();
        let layout: HashMap<&str, SectionBounds> = [
            ("home", SectionBounds::new(200.0, 400.0)),
            ("about", SectionBounds::new(600.0, 600.0)),
        ]
        .into_iter()
        .collect();
        let mut state = NavState::new(&items);

        assert!(state.resolve_scroll(&items, &layout, 700.0, 100.0));
        assert_eq!(state.active(), Some("About"));

        // Above the first section
        assert!(!state.resolve_scroll(&items, &layout, 0.0, 100.0));
        assert_eq!(state.active(), Some("About"));
    }

    #[test]
    fn test_activate_anchor_scrolls() {
        let items = items();
        let mut state = NavState::new(&items);
        state.toggle_menu();

        let activation = state.activate(&items[1]);

        assert_eq!(
            activation,
            Activation::ScrollTo {
                section_id: "about".to_string(),
            }
        );
        assert!(activation.prevents_default());
        assert_eq!(state.active(), Some("About"));
        assert!(!state.menu_open());
    }

    #[test]
    fn test_activate_external_follows_link() {
        let items = items();
        let mut state = NavState::new(&items);
        state.toggle_menu();

        let activation = state.activate(&items[2]);
        assert_eq!(activation, Activation::Follow);
        assert!(!activation.prevents_default());
        assert_eq!(state.active(), Some("Docs"));
        assert!(!state.menu_open());
    }

    #[test]
    fn test_resize_closes_open_menu_at_breakpoint() {
        let mut state = NavState::default();
        state.toggle_menu();

        assert!(!state.viewport_resized(767.0, 768.0));
        assert!(state.menu_open());

        assert!(state.viewport_resized(768.0, 768.0));
        assert!(!state.menu_open());
    }

    #[test]
    fn test_resize_while_closed_does_nothing() {
        let mut state = NavState::default();
        assert!(!state.viewport_resized(400.0, 768.0));
        assert!(!state.viewport_resized(1024.0, 768.0));
        assert!(!state.menu_open());
    }
}
