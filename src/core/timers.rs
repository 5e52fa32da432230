//! Timer abstraction shared by the reveal sequencer and the countdown ticker
//!
//! Every timer returns a handle; dropping the handle cancels the timer. This keeps
//! timer lifetime tied to whoever owns the handle (normally a component guard),
//! so nothing fires into a disposed view.

use std::time::Duration;

/// Something that can run callbacks after a delay or on a fixed period.
pub trait TimerHost {
    /// Cancels the timer when dropped.
    type Handle;

    /// Run `callback` once after `delay`.
    fn once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `callback` every `period` until the handle is dropped.
    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Clamp a duration to the `u32` millisecond range used by browser timers.
pub fn duration_to_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(feature = "hydrate")]
pub use browser::{BrowserTimer, BrowserTimers};

#[cfg(feature = "hydrate")]
mod browser {
    use super::{TimerHost, duration_to_millis};
    use gloo_timers::callback::{Interval, Timeout};
    use std::time::Duration;

    /// Timers backed by `setTimeout` / `setInterval`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserTimers;

    /// Live browser timer; cleared on drop.
    pub enum BrowserTimer {
        Timeout(Timeout),
        Interval(Interval),
    }

    impl TimerHost for BrowserTimers {
        type Handle = BrowserTimer;

        fn once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> BrowserTimer {
            BrowserTimer::Timeout(Timeout::new(duration_to_millis(delay), callback))
        }

        fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> BrowserTimer {
            BrowserTimer::Interval(Interval::new(duration_to_millis(period), callback))
        }
    }
}

#[cfg(test)]
pub use manual::{ManualHandle, ManualTimers};
