//! Recruitment landing page
//!
//! Single page made of:
//! - SEO meta tags
//! - Fixed navigation bar that turns solid once the page is scrolled
//! - Hero with the reveal animation, countdown and "Apply Now"
//! - Domain cards ("Choose Your Path")
//! - Apply section, shown once the visitor asks to apply
//! - Footer and background theme music

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::{ApplyFlow, Domain};
use crate::ui::apply::ApplySection;
use crate::ui::audio::ThemeAudio;
use crate::ui::hero::Hero;

/// Scroll offset (px) past which the navigation bar becomes opaque.
#[cfg(any(feature = "hydrate", test))]
const NAV_SOLID_AFTER: f64 = 50.0;

/// Delay before scrolling to the apply section, so it has rendered.
#[cfg(feature = "hydrate")]
const APPLY_SCROLL_DELAY_MS: u64 = 100;

#[cfg(any(feature = "hydrate", test))]
fn nav_is_solid(scroll_y: f64) -> bool {
    scroll_y > NAV_SOLID_AFTER
}

/// Recruitment page component
#[component]
pub fn RecruitmentPage() -> impl IntoView {
    let flow = RwSignal::new(ApplyFlow::new());

    let open_apply = Callback::new(move |_: ()| {
        flow.update(|f| {
            f.open();
        });

        #[cfg(feature = "hydrate")]
        set_timeout(scroll_to_apply, std::time::Duration::from_millis(APPLY_SCROLL_DELAY_MS));
    });

    view! {
        <SeoMeta />

        <div class="min-h-screen overflow-x-hidden">
            <NavBar on_apply=open_apply />
            <ThemeAudio />

            <Hero on_apply=open_apply />

            <DomainsSection />

            <ApplySection flow=flow />

            <Footer />
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn scroll_to_apply() {
    use crate::ui::apply::APPLY_SECTION_ID;

    let Some(section) = document().get_element_by_id(APPLY_SECTION_ID) else {
        leptos::logging::warn!("#{} not rendered, skipping scroll", APPLY_SECTION_ID);
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

/// SEO meta tags component
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="ACM SIGKDD Recruitments 2025" />

        <Meta name="description" content="Join ACM SIGKDD. Applications for Web/App Development, Research and Development, Corporate and Creatives are open." />
        <Meta name="keywords" content="ACM SIGKDD, recruitments, SRM, data science, web development, research, creatives, corporate" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="ACM SIGKDD Recruitments 2025" />
        <Meta property="og:description" content="Exploring the frontiers of knowledge and data. Apply now." />

        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:title" content="ACM SIGKDD Recruitments 2025" />
    }
}

/// Fixed navigation bar
#[component]
fn NavBar(on_apply: Callback<()>) -> impl IntoView {
    let solid = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let handle_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = window().scroll_y().unwrap_or_default();
            solid.set(nav_is_solid(scroll_y));
        });

        on_cleanup(move || handle_scroll.remove());
    }

    view! {
        <nav class=move || {
            if solid.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-stone-900/95 shadow-lg backdrop-blur-md"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <a href="#home" class="text-2xl font-bold text-primary font-space-grotesk text-shadow-western">
                        "ACM SIGKDD"
                    </a>
                    <div class="flex items-center gap-6 font-dm-sans text-white">
                        <a href="#home" class="nav-link">"Home"</a>
                        <a href="#domains" class="nav-link">"Domains"</a>
                        <button class="nav-link" on:click=move |_| on_apply.run(())>
                            "Apply"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// "Choose Your Path" grid of domain cards
#[component]
fn DomainsSection() -> impl IntoView {
    view! {
        <section id="domains" class="py-20 bg-background">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-primary mb-4 font-space-grotesk">
                        "Choose Your Path"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto font-dm-sans">
                        "Every frontier needs its pioneers. Pick the trail that suits you best."
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {Domain::ALL
                        .into_iter()
                        .map(|domain| view! { <DomainCard domain=domain /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DomainCard(domain: Domain) -> impl IntoView {
    view! {
        <div class="western-border card group hover:scale-105 transition-transform duration-300">
            <div class="overflow-hidden rounded-t-lg">
                <img
                    src=domain.image()
                    alt=domain.image_alt()
                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
                    loading="lazy"
                />
            </div>
            <div class="card-content p-6">
                <h3 class="text-xl font-bold text-primary mb-2 font-space-grotesk">{domain.title()}</h3>
                <p class="text-muted-foreground mb-4 font-dm-sans">{domain.description()}</p>
                <span class="badge">{domain.badge()}</span>
            </div>
        </div>
    }
}

/// Footer social links. Account URLs are not published yet, so they point at the page.
const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Twitter", "#"),
    ("LinkedIn", "#"),
    ("GitHub", "#"),
    ("Instagram", "#"),
];

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-stone-900 text-white py-12">
            <div class="container mx-auto px-4 text-center">
                <h3 class="text-2xl font-bold text-primary mb-2 font-space-grotesk">"ACM SIGKDD"</h3>
                <p class="text-stone-400 mb-6 font-dm-sans">
                    "Exploring the frontiers of knowledge and data"
                </p>
                <div class="flex justify-center gap-6 mb-6">
                    {SOCIAL_LINKS
                        .into_iter()
                        .map(|(name, href)| {
                            view! {
                                <a
                                    href=href
                                    class="text-stone-400 hover:text-primary transition-colors"
                                >
                                    {name}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-sm text-stone-500 font-dm-sans">
                    "© 2025 ACM SIGKDD. All rights reserved. Ride responsibly."
                </p>
            </div>
        </footer>
    }
}
