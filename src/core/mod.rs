//! Core domain models and page logic for the recruitment site
//!
//! Everything here is plain Rust that runs on both the server and in the browser,
//! except the `ssr`-only configuration, store and API modules.

pub mod animation;
pub mod audio;
pub mod countdown;
pub mod domains;
pub mod hero;
pub mod registration;
pub mod reveal;
pub mod timers;

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod supabase;

#[cfg(test)]
mod tests;

pub use countdown::{Clock, ClockError, CountdownEngine, CountdownTicker, TimeRemaining};
pub use domains::Domain;
pub use hero::HeroState;
pub use registration::{ApplyFlow, ApplyView, Field, Registration, RegistrationStore, StoreError};
pub use reveal::{HERO_REVEAL, Phase, RevealSequencer, RevealStep};
pub use timers::TimerHost;
