//! Inline message components

use leptos::prelude::*;

/// Error message component
/// Shows the message when Some, hidden when None
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="error-message" role="alert">
                <span aria-hidden="true">"⚠"</span>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
