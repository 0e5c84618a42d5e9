use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::config::NavConfig;
use crate::models::NavItem;

use super::debounce::{Debouncer, Scheduler};
use super::state::{Activation, NavState};
use super::viewport::{anchor_scroll_top, Viewport};

/// Feeds page events into a bar's `NavState`.
///
/// Timer callbacks hold a weak reference, so dropping the controller also
/// stops anything still pending.
pub struct NavController<V, S: Scheduler> {
    state: RwSignal<NavState>,
    items: Vec<NavItem>,
    config: NavConfig,
    viewport: V,
    resolve_timer: RefCell<Debouncer<S>>,
    scroll_timer: RefCell<Debouncer<S>>,
}

impl<V, S> NavController<V, S>
where
    V: Viewport + 'static,
    S: Scheduler + Clone + 'static,
{
    pub fn new(
        state: RwSignal<NavState>,
        items: Vec<NavItem>,
        config: NavConfig,
        viewport: V,
        scheduler: S,
    ) -> Rc<Self> {
        let resolve_timer = Debouncer::new(scheduler.clone(), config.debounce_ms);
        let scroll_timer = Debouncer::new(scheduler, config.settle_delay_ms);

        Rc::new(Self {
            state,
            items,
            config,
            viewport,
            resolve_timer: RefCell::new(resolve_timer),
            scroll_timer: RefCell::new(scroll_timer),
        })
    }

    pub fn state(&self) -> RwSignal<NavState> {
        self.state
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Resolves the active section against the current scroll position.
    pub fn resolve_now(&self) {
        let offset = self.viewport.scroll_offset();
        let anchor_offset = self.config.anchor_offset_px;

        self.state.maybe_update(|s| {
            let changed = s.resolve_scroll(&self.items, &self.viewport, offset, anchor_offset);
            if changed {
                log::debug!("active section at {}px: {:?}", offset, s.active());
            }
            changed
        });
    }

    /// Updates the scroll state now and resolves once scrolling settles.
    pub fn on_scroll(self: &Rc<Self>) {
        let offset = self.viewport.scroll_offset();
        let threshold = self.config.scroll_threshold_px;
        self.state.maybe_update(|s| s.record_scroll(offset, threshold));

        let this = Rc::downgrade(self);
        self.resolve_timer.borrow_mut().call(move || {
            if let Some(this) = this.upgrade() {
                this.resolve_now();
            }
        });
    }

    /// Returns true if the mobile menu was closed.
    pub fn on_resize(&self) -> bool {
        let width = self.viewport.width();
        let breakpoint = self.config.menu_breakpoint_px;
        let mut closed = false;

        self.state.maybe_update(|s| {
            closed = s.viewport_resized(width, breakpoint);
            closed
        });
        if closed {
            log::debug!("closed mobile menu at {}px wide", width);
        }
        closed
    }

    /// Selects `item` and, for anchors, schedules the smooth scroll.
    ///
    /// A pending scroll resolution is dropped first: it was measured before
    /// the click and would overwrite the new selection.
    pub fn activate(self: &Rc<Self>, item: &NavItem) -> Activation {
        self.resolve_timer.borrow_mut().cancel();

        let activation = self
            .state
            .try_update(|s| s.activate(item))
            .unwrap_or(Activation::Follow);
        log::debug!("activated {} -> {}", item.name, item.url);

        if let Activation::ScrollTo { section_id } = &activation {
            let this = Rc::downgrade(self);
            let section_id = section_id.clone();
            self.scroll_timer.borrow_mut().call(move || {
                if let Some(this) = this.upgrade() {
                    this.scroll_to_section(&section_id);
                }
            });
        }
        activation
    }

    /// Cancels both pending timers.
    pub fn teardown(&self) {
        self.resolve_timer.borrow_mut().cancel();
        self.scroll_timer.borrow_mut().cancel();
    }

    fn scroll_to_section(&self, id: &str) {
        match anchor_scroll_top(&self.viewport, id, self.config.header_height_px) {
            Some(top) => self.viewport.scroll_to(top),
            None => log::debug!("section #{} not rendered, skipping scroll", id),
        }
    }
}
