use leptos::prelude::*;

/// Long single page whose sections the navigation bar tracks.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div>
            <HeroSection />
            <AboutSection />
            <FeaturesSection />
            <ContactSection />
        </div>
    }
}

// -- Hero -------------------------------------------------------------------

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section id="home" class="min-h-screen flex items-center">
            <div class="container-wide py-16 md:py-24">
                <div class="max-w-xl animate-fade-in">
                    <h1 class="font-display text-display-xl md:text-display-2xl text-ink-900 tracking-tight mb-6">
                        "Know where you are on the page."
                    </h1>
                    <p class="text-body-lg text-ink-600 mb-8 max-w-md">
                        "The bar above follows your scrolling and takes you to any section in one click."
                    </p>
                    <a href="#features" class="btn-primary text-lg px-8 py-4">"See the features"</a>
                </div>
            </div>
        </section>
    }
}

// -- About ------------------------------------------------------------------

#[component]
fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="min-h-screen bg-paper-100">
            <div class="container-narrow text-center py-24">
                <h2 class="font-display text-display-sm text-ink-900 mb-6">"About"</h2>
                <p class="font-display text-heading-xl text-ink-800 leading-relaxed">
                    "A single navigation bar for long pages: it highlights the section under the header and stays out of the way on small screens."
                </p>
            </div>
        </section>
    }
}

// -- Features ---------------------------------------------------------------

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="min-h-screen">
            <div class="container-wide py-24">
                <h2 class="font-display text-display-sm text-ink-900 text-center mb-12">"Features"</h2>
                <div class="grid md:grid-cols-3 gap-6">
                    <FeatureCard
                        title="Scroll tracking"
                        text="The active item follows the section under the header once scrolling settles."
                    />
                    <FeatureCard
                        title="Smooth anchors"
                        text="Clicking a section link scrolls there smoothly, leaving room for the bar."
                    />
                    <FeatureCard
                        title="Mobile menu"
                        text="A collapsible menu on narrow screens that closes itself on navigation."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="card p-6 bg-paper-50">
            <h3 class="text-heading-md text-ink-900 mb-2">{title}</h3>
            <p class="text-body-sm text-ink-600">{text}</p>
        </div>
    }
}

// -- Contact ----------------------------------------------------------------

#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="min-h-screen bg-paper-100">
            <div class="container-narrow text-center py-24">
                <h2 class="font-display text-display-sm text-ink-900 mb-6">"Contact"</h2>
                <p class="text-body-lg text-ink-600">"Questions or patches are welcome."</p>
            </div>
        </section>
    }
}
