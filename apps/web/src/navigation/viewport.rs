use std::fmt;

use super::resolver::SectionLayout;

pub type Result<T> = std::result::Result<T, ViewportError>;

/// Why the browser viewport could not be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    NoWindow,
    NoDocument,
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportError::NoWindow => write!(f, "no global window"),
            ViewportError::NoDocument => write!(f, "window has no document"),
        }
    }
}

impl std::error::Error for ViewportError {}

/// The page the navigation bar lives on.
pub trait Viewport: SectionLayout {
    /// Vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;

    fn width(&self) -> f64;

    /// Smoothly scrolls the document so `top` is at the viewport's top edge.
    fn scroll_to(&self, top: f64);
}

/// Scroll offset that puts section `id` just below a fixed header of
/// `header_height` pixels. `None` if the section is not rendered.
pub fn anchor_scroll_top<L>(layout: &L, id: &str, header_height: f64) -> Option<f64>
where
    L: SectionLayout + ?Sized,
{
    layout
        .section_bounds(id)
        .map(|bounds| (bounds.top - header_height).max(0.0))
}

#[cfg(feature = "web")]
mod browser {
    use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

    use super::{Result, Viewport, ViewportError};
    use crate::navigation::resolver::{SectionBounds, SectionLayout};

    pub struct BrowserViewport {
        window: Window,
        document: Document,
    }

    impl BrowserViewport {
        pub fn new() -> Result<Self> {
            let window = web_sys::window().ok_or(ViewportError::NoWindow)?;
            let document = window.document().ok_or(ViewportError::NoDocument)?;
            Ok(Self { window, document })
        }
    }

    impl SectionLayout for BrowserViewport {
        fn section_bounds(&self, id: &str) -> Option<SectionBounds> {
            let element = self.document.get_element_by_id(id)?;
            let rect = element.get_bounding_client_rect();
            // Client rects are viewport-relative
            Some(SectionBounds::new(
                rect.top() + self.scroll_offset(),
                rect.height(),
            ))
        }
    }

    impl Viewport for BrowserViewport {
        fn scroll_offset(&self) -> f64 {
            self.window.scroll_y().unwrap_or(0.0)
        }

        fn width(&self) -> f64 {
            self.window
                .inner_width()
                .ok()
                .and_then(|width| width.as_f64())
                .unwrap_or(0.0)
        }

        fn scroll_to(&self, top: f64) {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            self.window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

#[cfg(feature = "web")]
pub use browser::BrowserViewport;

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::navigation::SectionBounds;

    #[test]
    fn test_anchor_scroll_top_leaves_room_for_header() {
        let layout: HashMap<&str, SectionBounds> =
            [("about", SectionBounds::new(600.0, 600.0))].into_iter().collect();

        assert_eq!(anchor_scroll_top(&layout, "about", 80.0), Some(520.0));
        assert_eq!(anchor_scroll_top(&layout, "missing", 80.0), None);
    }

    #[test]
    fn test_anchor_scroll_top_clamps_at_page_top() {
        let layout: HashMap<&str, SectionBounds> =
            [("home", SectionBounds::new(0.0, 600.0))].into_iter().collect();

        assert_eq!(anchor_scroll_top(&layout, "home", 80.0), Some(0.0));
    }

    #[test]
    fn test_viewport_error_display() {
        assert_eq!(ViewportError::NoWindow.to_string(), "no global window");
        assert_eq!(ViewportError::NoDocument.to_string(), "window has no document");
    }
}
