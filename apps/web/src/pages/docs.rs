use leptos::prelude::*;

/// A separate route, reached through the bar's external link.
#[component]
pub fn DocsPage() -> impl IntoView {
    view! {
        <div class="container-narrow py-24">
            <h1 class="font-display text-display-sm text-ink-900 mb-6">"Docs"</h1>
            <p class="text-body-lg text-ink-600 mb-4">
                "Pass a list of items to the navigation bar. Items whose url starts with a hash scroll to that section; anything else is an ordinary link."
            </p>
            <a href="/#home" class="text-clay-600 hover:text-clay-700">"Back to the landing page"</a>
        </div>
    }
}
