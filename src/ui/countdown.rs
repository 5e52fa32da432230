//! Countdown flip cards

use leptos::prelude::*;

use crate::core::HeroState;

/// Days/hours/minutes/seconds until applications close
///
/// A unit that changed since the last tick gets the flip class for one tick.
#[component]
pub fn CountdownDisplay(state: Signal<HeroState>) -> impl IntoView {
    view! {
        <div class="countdown" aria-live="polite">
            {move || {
                let snapshot = state.get();
                if snapshot.is_closed() {
                    view! {
                        <p class="text-lg font-space-grotesk text-primary">"Applications are closed"</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <p class="text-sm uppercase tracking-widest mb-3 font-dm-sans text-stone-300">
                            "Applications close in"
                        </p>
                        <div class="flex justify-center gap-3 md:gap-5">
                            {snapshot
                                .countdown_units()
                                .into_iter()
                                .map(|unit| {
                                    let class = format!("countdown-value {}", unit.class());
                                    view! {
                                        <div class="countdown-card western-border">
                                            <span class=class>{unit.value}</span>
                                            <span class="countdown-label">{unit.label}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
