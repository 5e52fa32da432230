//! Background theme music
//!
//! The audio elements and their window listeners live in an [`AudioGuard`] owned by
//! the component. Dropping the guard pauses and rewinds playback and removes the
//! listeners.

use leptos::prelude::*;

use crate::core::audio::{AudioEvent, AudioStatus};

#[cfg(feature = "hydrate")]
struct AudioGuard {
    theme: web_sys::HtmlAudioElement,
    prompt: Option<web_sys::HtmlAudioElement>,
    listeners: Vec<WindowListenerHandle>,
}

#[cfg(feature = "hydrate")]
impl AudioGuard {
    /// Start the theme muted and unmute it on the first interaction.
    fn acquire(status: RwSignal<AudioStatus>) -> Option<Self> {
        use std::cell::Cell;
        use std::rc::Rc;

        use crate::core::audio::{INTERACTION_EVENTS, THEME_TRACK, THEME_VOLUME};

        let theme = match web_sys::HtmlAudioElement::new_with_src(THEME_TRACK) {
            Ok(audio) => audio,
            Err(e) => {
                leptos::logging::warn!("Theme audio unavailable: {:?}", e);
                return None;
            }
        };
        theme.set_loop(true);
        theme.set_volume(THEME_VOLUME);
        theme.set_muted(true);
        play(&theme, status);

        let armed = Rc::new(Cell::new(true));
        let listeners = INTERACTION_EVENTS
            .into_iter()
            .map(|event| {
                let theme = theme.clone();
                let armed = Rc::clone(&armed);
                window_event_listener_untyped(event, move |_| {
                    if !armed.replace(false) {
                        return;
                    }
                    theme.set_muted(false);
                    status.update(|s| *s = s.on(AudioEvent::Interaction));
                    play(&theme, status);
                })
            })
            .collect();

        Some(Self {
            theme,
            prompt: None,
            listeners,
        })
    }

    /// Start the prompt track after the visitor pressed "Enable Audio".
    fn accept_prompt(&mut self, status: RwSignal<AudioStatus>) {
        use crate::core::audio::PROMPT_TRACK;

        let prompt = match web_sys::HtmlAudioElement::new_with_src(PROMPT_TRACK) {
            Ok(audio) => audio,
            Err(e) => {
                leptos::logging::warn!("Prompt audio unavailable: {:?}", e);
                return;
            }
        };
        status.update(|s| *s = s.on(AudioEvent::PromptAccepted));
        play(&prompt, status);
        if let Some(previous) = self.prompt.replace(prompt) {
            silence(&previous);
        }
    }
}

#[cfg(feature = "hydrate")]
impl Drop for AudioGuard {
    fn drop(&mut self) {
        silence(&self.theme);
        if let Some(prompt) = self.prompt.take() {
            silence(&prompt);
        }
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
    }
}

/// Call `play()` and report a rejected promise as refused playback.
#[cfg(feature = "hydrate")]
fn play(audio: &web_sys::HtmlAudioElement, status: RwSignal<AudioStatus>) {
    let promise = match audio.play() {
        Ok(promise) => promise,
        Err(e) => {
            leptos::logging::warn!("Audio play failed: {:?}", e);
            status.update(|s| *s = s.on(AudioEvent::PlaybackRefused));
            return;
        }
    };

    leptos::task::spawn_local(async move {
        if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
            status.try_update(|s| *s = s.on(AudioEvent::PlaybackRefused));
        }
    });
}

#[cfg(feature = "hydrate")]
fn silence(audio: &web_sys::HtmlAudioElement) {
    let _ = audio.pause();
    audio.set_current_time(0.0);
}

/// Theme music with an "Enable Audio" fallback prompt
#[component]
pub fn ThemeAudio() -> impl IntoView {
    let status = RwSignal::new(AudioStatus::default());

    #[cfg(feature = "hydrate")]
    let guard = {
        let guard = StoredValue::new_local(None::<AudioGuard>);

        Effect::new(move |_| {
            guard.set_value(AudioGuard::acquire(status));
        });

        on_cleanup(move || {
            guard.try_update_value(|g| g.take());
        });

        guard
    };

    let on_enable = move |_| {
        #[cfg(feature = "hydrate")]
        guard.update_value(|g| {
            if let Some(g) = g.as_mut() {
                g.accept_prompt(status);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        status.update(|s| *s = s.on(AudioEvent::PromptAccepted));
    };

    view! {
        <Show when=move || status.get().shows_prompt()>
            <button
                class="fixed bottom-6 right-6 z-50 western-btn px-4 py-2 font-space-grotesk animate-glow"
                on:click=on_enable
                aria-label="Enable audio"
            >
                "🔊 Enable Audio"
            </button>
        </Show>
    }
}
