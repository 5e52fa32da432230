//! Background theme music state
//!
//! Browsers refuse unmuted autoplay, so playback starts muted and is unmuted on the
//! first user interaction. If the browser still refuses, an "Enable Audio" prompt
//! lets the visitor start it by hand.

/// Track played in the background.
pub const THEME_TRACK: &str = "/western-theme.mp3";
/// Track started from the "Enable Audio" prompt.
pub const PROMPT_TRACK: &str = "/sound1.mp3";
pub const THEME_VOLUME: f64 = 0.3;

/// DOM events that count as the first interaction.
pub const INTERACTION_EVENTS: [&str; 4] = ["click", "touchstart", "scroll", "mousemove"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioStatus {
    /// Autoplaying muted, waiting for an interaction.
    #[default]
    Muted,
    Playing,
    /// Playback was refused; the prompt is shown.
    Blocked,
}

/// Events reported by the audio element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// First click/touch/scroll/mousemove on the page.
    Interaction,
    /// A `play()` call was rejected.
    PlaybackRefused,
    /// The visitor pressed "Enable Audio".
    PromptAccepted,
}

impl AudioStatus {
    pub fn on(self, event: AudioEvent) -> AudioStatus {
        match (self, event) {
            (AudioStatus::Muted, AudioEvent::Interaction) => AudioStatus::Playing,
            (AudioStatus::Blocked, AudioEvent::PromptAccepted) => AudioStatus::Playing,
            (_, AudioEvent::PlaybackRefused) => AudioStatus::Blocked,
            (status, _) => status,
        }
    }

    pub fn shows_prompt(self) -> bool {
        self == AudioStatus::Blocked
    }
}
