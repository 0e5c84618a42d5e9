use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::NavBar;
use crate::models::{Icon, NavItem};
use crate::pages::{DocsPage, LandingPage};

const HOME_ICON: Icon = Icon("M3 12l9-9 9 9M5 10v10h14V10");
const ABOUT_ICON: Icon = Icon("M12 8v4m0 4h.01M12 3a9 9 0 100 18 9 9 0 000-18z");
const FEATURES_ICON: Icon = Icon("M4 6h16M4 12h16M4 18h7");
const CONTACT_ICON: Icon = Icon("M4 4h16v16H4zM4 4l8 8 8-8");
const DOCS_ICON: Icon = Icon("M6 2h9l5 5v15H6zM14 2v6h6");

/// Landing page bar: its four sections plus the docs route.
pub fn landing_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "#home").with_icon(HOME_ICON),
        NavItem::new("About", "#about").with_icon(ABOUT_ICON),
        NavItem::new("Features", "#features").with_icon(FEATURES_ICON),
        NavItem::new("Contact", "#contact").with_icon(CONTACT_ICON),
        NavItem::new("Docs", "/docs").with_icon(DOCS_ICON),
    ]
}

/// Docs bar. The landing sections do not exist here, so every item is a
/// route.
pub fn docs_nav_items() -> Vec<NavItem> {
    vec![
        NavItem::new("Home", "/").with_icon(HOME_ICON),
        NavItem::new("Docs", "/docs").with_icon(DOCS_ICON),
    ]
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Section Nav" />
        <Router>
            <div class="min-h-screen bg-paper-50 text-ink-800">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=LandingRoute />
                    <Route path=path!("/docs") view=DocsRoute />
                </Routes>
            </div>
        </Router>
    }
}

// Each route mounts its own bar, so the selection is measured afresh on
// every navigation.

#[component]
fn LandingRoute() -> impl IntoView {
    view! {
        <SiteNav items=landing_nav_items() />
        <main>
            <LandingPage />
        </main>
    }
}

#[component]
fn DocsRoute() -> impl IntoView {
    view! {
        <SiteNav items=docs_nav_items() initial_active="Docs" />
        <main>
            <DocsPage />
        </main>
    }
}

#[component]
fn SiteNav(
    items: Vec<NavItem>,
    #[prop(optional, into)] initial_active: Option<String>,
) -> impl IntoView {
    view! {
        <NavBar
            items=items
            initial_active=initial_active
            logo=|| view! { <Logo /> }
            actions=|| view! {
                <a href="/docs" class="hidden sm:inline-flex btn-primary text-body-sm px-4 py-2">
                    "Get Started"
                </a>
            }
        />
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <a href="/" class="flex items-center gap-2 text-ink-900 hover:text-clay-600 transition-colors duration-200">
            <span class="w-8 h-8 rounded-md bg-clay-100 flex items-center justify-center font-display text-clay-700">
                "§"
            </span>
            <span class="hidden sm:block font-display text-xl font-medium tracking-tight">
                "Section Nav"
            </span>
        </a>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="text-center py-20">
            <h1 class="text-6xl font-bold text-ink-200 mb-4">"404"</h1>
            <h2 class="text-2xl font-display text-ink-900 mb-4">"Page Not Found"</h2>
            <a href="/" class="btn-primary px-6 py-3">"Back to the start"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_bar_has_no_section_anchors() {
        assert!(docs_nav_items().iter().all(|item| item.section_id().is_none()));
    }

    #[test]
    fn test_landing_anchors_match_landing_sections() {
        let anchors: Vec<String> = landing_nav_items()
            .iter()
            .filter_map(|item| item.section_id().map(str::to_owned))
            .collect();

        assert_eq!(anchors, ["home", "about", "features", "contact"]);
    }
}
