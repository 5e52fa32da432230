//! Not found page component
//!
//! A 404 page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="hero-section min-h-screen flex flex-col items-center justify-center p-4">
            <div class="text-center text-white">
                <h1 class="text-6xl font-bold text-primary mb-4 font-space-grotesk text-shadow-western">"404"</h1>

                <h2 class="text-2xl font-semibold mb-2 font-space-grotesk">
                    "Lost on the Trail"
                </h2>

                <p class="text-stone-300 mb-8 max-w-md mx-auto font-dm-sans">
                    "This page rode off into the sunset. Head back to town and try again."
                </p>

                <A href="/" attr:class="western-btn px-6 py-3 font-space-grotesk">
                    "Go Home"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-stone-400">"© 2025 ACM SIGKDD"</p>
            </div>
        </div>
    }
}
