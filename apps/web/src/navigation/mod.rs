//! Scroll-aware navigation logic, independent of the markup that shows it.

mod controller;
mod debounce;
mod resolver;
mod state;
mod viewport;

pub use controller::NavController;
pub use debounce::{Debouncer, Scheduler};
pub use resolver::{resolve, SectionBounds, SectionLayout};
pub use state::{Activation, NavState, ScrollState};
pub use viewport::{anchor_scroll_top, Viewport, ViewportError};

#[cfg(feature = "web")]
pub use debounce::TimeoutScheduler;
#[cfg(feature = "web")]
pub use viewport::BrowserViewport;
