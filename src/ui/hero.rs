//! Hero section: animated title, year swap, tagline, countdown and call-to-action
//!
//! The reveal sequencer and the countdown ticker are mounted once in the browser and
//! owned by this component; both are dropped (and their timers cleared) when the
//! component is cleaned up.

use leptos::prelude::*;

use crate::core::animation::{
    NEW_YEAR_TEXT, OLD_YEAR_TEXT, TAGLINE_TEXT, TITLE_TEXT, fade_grow, fade_up, new_year_letter,
    old_year_letter, title_letter,
};
use crate::core::{HeroState, Phase, TimeRemaining};
use crate::ui::countdown::CountdownDisplay;

/// Hero section component
#[component]
pub fn Hero(
    /// Called when "Apply Now" is pressed
    on_apply: Callback<()>,
) -> impl IntoView {
    let phase = RwSignal::new(Phase::HIDDEN);
    let remaining = RwSignal::new(None::<TimeRemaining>);

    #[cfg(feature = "hydrate")]
    {
        use crate::core::countdown::{BrowserClock, CountdownTicker, recruitment_deadline};
        use crate::core::reveal::{HERO_REVEAL, RevealSequencer};
        use crate::core::timers::BrowserTimers;

        type Mounted = (
            RevealSequencer<BrowserTimers>,
            CountdownTicker<BrowserTimers>,
        );

        let mounted = StoredValue::new_local(None::<Mounted>);

        Effect::new(move |_| {
            let sequencer = RevealSequencer::mount(&BrowserTimers, &HERO_REVEAL, move |next| {
                phase.set(next);
            });
            let ticker = CountdownTicker::start(
                &BrowserTimers,
                BrowserClock,
                recruitment_deadline(),
                move |value| remaining.set(Some(value)),
            );
            mounted.set_value(Some((sequencer, ticker)));
        });

        on_cleanup(move || {
            mounted.try_update_value(|m| m.take());
        });
    }

    let hero_state = Signal::derive(move || HeroState {
        phase: phase.get(),
        remaining: remaining.get(),
    });

    view! {
        <section id="home" class="hero-section relative min-h-[100svh] flex items-center justify-center">
            <div class="text-center text-white px-4">
                <AnimatedWord text=TITLE_TEXT class="mb-2" phase=phase style_fn=title_letter />
                <AnimatedWord text=OLD_YEAR_TEXT class="mb-6" phase=phase style_fn=old_year_letter />
                <AnimatedWord text=NEW_YEAR_TEXT class="mb-6" phase=phase style_fn=new_year_letter />

                <p
                    class="text-xl md:text-2xl mb-8 font-dm-sans text-shadow-western"
                    style=move || fade_up(phase.get(), Phase::TAGLINE).to_css()
                >
                    {TAGLINE_TEXT}
                </p>

                <div
                    class="mb-10"
                    style=move || fade_up(phase.get(), Phase::COUNTDOWN).to_css()
                    aria-hidden=move || (!hero_state.get().shows_countdown()).to_string()
                >
                    <CountdownDisplay state=hero_state />
                </div>

                <div style=move || fade_grow(phase.get(), Phase::CALL_TO_ACTION).to_css()>
                    <button
                        class="western-btn text-lg px-8 py-4 animate-glow font-space-grotesk"
                        on:click=move |_| on_apply.run(())
                        disabled=move || !hero_state.get().shows_call_to_action()
                        aria-label="Apply now"
                    >
                        "Apply Now"
                    </button>
                </div>
            </div>
        </section>
    }
}

/// A word whose letters animate independently
#[component]
fn AnimatedWord(
    text: &'static str,
    class: &'static str,
    phase: RwSignal<Phase>,
    style_fn: fn(usize, Phase) -> crate::core::animation::LetterStyle,
) -> impl IntoView {
    view! {
        <div class=format!(
            "flex justify-center text-4xl md:text-6xl font-bold text-primary font-space-grotesk text-shadow-western {}",
            class
        )>
            {text
                .chars()
                .enumerate()
                .map(|(index, letter)| {
                    view! {
                        <span style=move || style_fn(index, phase.get()).to_css()>
                            {letter.to_string()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}
