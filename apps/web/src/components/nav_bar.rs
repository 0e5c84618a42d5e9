//! Responsive navigation bar with scroll-aware highlighting.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::config::NavConfig;
use crate::models::NavItem;
use crate::navigation::NavState;

#[component]
pub fn NavBar(
    /// Items in display order. Names must be unique.
    items: Vec<NavItem>,
    /// Item selected before the page is measured; defaults to the first
    #[prop(optional_no_strip)]
    initial_active: Option<String>,
    /// Extra classes for the outer `<nav>`
    #[prop(optional, into)]
    class: String,
    #[prop(optional, into)] logo: ViewFn,
    /// Trailing content, e.g. a call-to-action button
    #[prop(optional, into)]
    actions: ViewFn,
    #[prop(optional)] config: NavConfig,
) -> impl IntoView {
    if items.is_empty() {
        log::warn!("NavBar rendered without items");
    }

    let state = RwSignal::new(match &initial_active {
        Some(name) => NavState::starting_at(&items, name),
        None => NavState::new(&items),
    });

    #[cfg(feature = "web")]
    let controller = wiring::connect(state, items.clone(), config);
    #[cfg(not(feature = "web"))]
    let _ = config;

    let items = StoredValue::new(items);

    let on_activate = move |ev: MouseEvent, item: &NavItem| {
        #[cfg(feature = "web")]
        let activation = match controller {
            Some(controller) => Some(controller.with_value(|c| c.activate(item))),
            None => state.try_update(|s| s.activate(item)),
        };
        #[cfg(not(feature = "web"))]
        let activation = state.try_update(|s| s.activate(item));

        if activation.is_some_and(|a| a.prevents_default()) {
            ev.prevent_default();
        }
    };

    let nav_class = move || {
        let scrolled = state.with(|s| s.scroll().past_threshold);
        format!(
            "sticky top-0 z-50 transition-all duration-300 {} {}",
            if scrolled {
                "bg-paper-50/95 backdrop-blur-sm shadow-elevation-2"
            } else {
                "bg-transparent"
            },
            class
        )
    };

    let menu_open = move || state.with(|s| s.menu_open());

    view! {
        <nav class=nav_class role="navigation" aria-label="Main navigation">
            <div class="container-wide">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center">
                        {logo.run()}
                    </div>

                    // Desktop items
                    <ul class="hidden md:flex items-center gap-1 rounded-full border border-paper-300 bg-paper-50/80 px-1 py-1">
                        {items.with_value(|items| {
                            items
                                .iter()
                                .cloned()
                                .map(|item| {
                                    view! { <li>{nav_link(item, state, on_activate, false)}</li> }
                                })
                                .collect_view()
                        })}
                    </ul>

                    <div class="flex items-center gap-2">
                        {actions.run()}

                        // Mobile menu button
                        <button
                            type="button"
                            class="md:hidden p-2 rounded-md text-ink-600 hover:text-ink-900 hover:bg-paper-200"
                            aria-label="Toggle menu"
                            aria-expanded=move || menu_open().to_string()
                            on:click=move |_| state.update(|s| s.toggle_menu())
                        >
                            <Show
                                when=menu_open
                                fallback=|| view! {
                                    <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                    </svg>
                                }
                            >
                                <svg class="h-6 w-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                                </svg>
                            </Show>
                        </button>
                    </div>
                </div>
            </div>

            // Mobile menu; height and opacity are animated by CSS transitions
            <div
                class=move || {
                    if menu_open() {
                        "md:hidden overflow-hidden border-t border-paper-200 transition-all duration-300 max-h-96 opacity-100"
                    } else {
                        "md:hidden overflow-hidden transition-all duration-300 max-h-0 opacity-0"
                    }
                }
                aria-hidden=move || (!menu_open()).to_string()
            >
                <ul class="px-4 py-4 space-y-1">
                    {items.with_value(|items| {
                        items
                            .iter()
                            .cloned()
                            .map(|item| {
                                view! { <li>{nav_link(item, state, on_activate, true)}</li> }
                            })
                            .collect_view()
                    })}
                </ul>
            </div>
        </nav>
    }
}

fn nav_link(
    item: NavItem,
    state: RwSignal<NavState>,
    on_activate: impl Fn(MouseEvent, &NavItem) + Copy + 'static,
    mobile: bool,
) -> impl IntoView {
    let label = item.name.clone();
    let href = item.url.clone();
    let icon = item.icon;
    let name = item.name.clone();
    let is_active = Memo::new(move |_| state.with(|s| s.is_active(&name)));

    let class = move || {
        let layout = if mobile {
            "relative flex items-center gap-3 px-3 py-2 rounded-md"
        } else {
            "relative inline-flex items-center gap-2 px-4 py-2 rounded-full"
        };
        let tone = if is_active.get() {
            "text-clay-700 font-medium"
        } else {
            "text-ink-600 hover:text-ink-900"
        };
        format!(
            "{} {} text-body-sm transition-colors duration-200",
            layout, tone
        )
    };

    view! {
        <a
            href=href
            class=class
            aria-current=move || is_active.get().then_some("page")
            on:click=move |ev| on_activate(ev, &item)
        >
            // The lamp: a pill behind the active item that fades between items
            <span
                class=move || {
                    if is_active.get() {
                        "absolute inset-0 -z-10 rounded-full bg-clay-100 transition-opacity duration-300 opacity-100"
                    } else {
                        "absolute inset-0 -z-10 rounded-full bg-clay-100 transition-opacity duration-300 opacity-0"
                    }
                }
                aria-hidden="true"
            ></span>
            {icon.map(|icon| view! {
                <svg class="w-4 h-4" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true">
                    <path d=icon.path() />
                </svg>
            })}
            <span>{label}</span>
        </a>
    }
}

#[cfg(feature = "web")]
mod wiring {
    use std::rc::Rc;

    use leptos::ev;
    use leptos::prelude::*;

    use crate::config::NavConfig;
    use crate::models::NavItem;
    use crate::navigation::{BrowserViewport, NavController, NavState, TimeoutScheduler};

    pub type Controller =
        StoredValue<Rc<NavController<BrowserViewport, TimeoutScheduler>>, LocalStorage>;

    /// Subscribes the bar to window scroll and resize. Listeners and timers
    /// are released when the owning component is cleaned up. Without a
    /// window the bar stays static.
    pub fn connect(
        state: RwSignal<NavState>,
        items: Vec<NavItem>,
        config: NavConfig,
    ) -> Option<Controller> {
        let viewport = match BrowserViewport::new() {
            Ok(viewport) => viewport,
            Err(e) => {
                log::warn!("navigation bar cannot track scrolling: {}", e);
                return None;
            }
        };
        let controller: Controller = StoredValue::new_local(NavController::new(
            state,
            items,
            config,
            viewport,
            TimeoutScheduler,
        ));

        // Reflect the initial scroll position once the sections are mounted
        Effect::new(move |_| controller.with_value(|c| c.resolve_now()));

        let on_scroll = window_event_listener(ev::scroll, move |_| {
            controller.with_value(|c| c.on_scroll());
        });
        let on_resize = window_event_listener(ev::resize, move |_| {
            controller.with_value(|c| c.on_resize());
        });

        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
            controller.with_value(|c| c.teardown());
        });

        Some(controller)
    }
}
