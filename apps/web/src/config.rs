//! Tunables for the navigation bar.

use serde::{Deserialize, Serialize};

/// Lookahead added to the scroll offset before resolving the active
/// section, so a section counts as current once it clears the fixed bar.
pub const DEFAULT_ANCHOR_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 80.0;
pub const DEFAULT_SCROLL_THRESHOLD_PX: u32 = 20;
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 100;
/// Tailwind's `md` breakpoint. The mobile menu is hidden at and above it.
pub const DEFAULT_MENU_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavConfig {
    pub anchor_offset_px: f64,
    /// Space left above a section after a click-scroll.
    pub header_height_px: f64,
    /// Scroll offset past which the bar switches to its "scrolled" style.
    pub scroll_threshold_px: u32,
    /// Quiet period before the active section is recomputed.
    pub debounce_ms: u32,
    /// Wait after a click before scrolling, so the closing mobile menu
    /// does not shift the target.
    pub settle_delay_ms: u32,
    pub menu_breakpoint_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            anchor_offset_px: DEFAULT_ANCHOR_OFFSET_PX,
            header_height_px: DEFAULT_HEADER_HEIGHT_PX,
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            menu_breakpoint_px: DEFAULT_MENU_BREAKPOINT_PX,
        }
    }
}
