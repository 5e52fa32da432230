//! Reveal sequencer for the hero section
//!
//! The hero is revealed in numbered phases. Each phase is scheduled as a one-shot
//! timer relative to mount; a firing timer can only move the phase forward, so late
//! or reordered timers are harmless. Dropping the sequencer cancels whatever has not
//! fired yet.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::timers::TimerHost;

/// Reveal step marker. Higher phases include everything revealed before them.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("phase {_0}")]
pub struct Phase(pub u8);

impl Phase {
    /// Nothing revealed yet (state at mount).
    pub const HIDDEN: Phase = Phase(0);
    /// "RECRUITMENTS" letters rise in.
    pub const TITLE: Phase = Phase(1);
    /// Last year's number appears.
    pub const OLD_YEAR: Phase = Phase(2);
    /// Last year's number breaks apart into particles.
    pub const DISINTEGRATE: Phase = Phase(3);
    /// This year's number rises in.
    pub const NEW_YEAR: Phase = Phase(4);
    pub const TAGLINE: Phase = Phase(5);
    pub const COUNTDOWN: Phase = Phase(6);
    /// "Apply Now" becomes available. Final phase.
    pub const CALL_TO_ACTION: Phase = Phase(7);

    pub fn has_reached(self, other: Phase) -> bool {
        self >= other
    }
}

/// One scheduled transition: switch to `phase` after `delay` from mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub phase: Phase,
    pub delay: Duration,
}

impl RevealStep {
    pub const fn at_millis(phase: Phase, millis: u64) -> Self {
        Self {
            phase,
            delay: Duration::from_millis(millis),
        }
    }
}

/// Timeline of the hero reveal.
pub const HERO_REVEAL: [RevealStep; 7] = [
    RevealStep::at_millis(Phase::TITLE, 100),
    RevealStep::at_millis(Phase::OLD_YEAR, 1200),
    RevealStep::at_millis(Phase::DISINTEGRATE, 2500),
    RevealStep::at_millis(Phase::NEW_YEAR, 3500),
    RevealStep::at_millis(Phase::TAGLINE, 4000),
    RevealStep::at_millis(Phase::COUNTDOWN, 4300),
    RevealStep::at_millis(Phase::CALL_TO_ACTION, 4500),
];

/// Monotonic phase holder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTracker {
    current: Phase,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Phase {
        self.current
    }

    /// Move to `next` if it is ahead of the current phase.
    ///
    /// Returns true if the phase changed.
    pub fn advance(&mut self, next: Phase) -> bool {
        if next > self.current {
            self.current = next;
            true
        } else {
            false
        }
    }
}

struct SequencerState {
    tracker: Cell<PhaseTracker>,
    disposed: Cell<bool>,
    on_advance: Box<dyn Fn(Phase)>,
}

impl SequencerState {
    fn fire(&self, phase: Phase) {
        if self.disposed.get() {
            return;
        }
        let mut tracker = self.tracker.get();
        if tracker.advance(phase) {
            self.tracker.set(tracker);
            (self.on_advance)(phase);
        }
    }
}

/// Mounted reveal sequence. Owns its timers; drop it to unmount.
pub struct RevealSequencer<H: TimerHost> {
    state: Rc<SequencerState>,
    timers: Vec<H::Handle>,
}

impl<H: TimerHost> RevealSequencer<H> {
    /// Schedule every step on `host`. Phase starts at [`Phase::HIDDEN`].
    ///
    /// `on_advance` runs each time the phase moves forward.
    pub fn mount(host: &H, steps: &[RevealStep], on_advance: impl Fn(Phase) + 'static) -> Self {
        let state = Rc::new(SequencerState {
            tracker: Cell::new(PhaseTracker::new()),
            disposed: Cell::new(false),
            on_advance: Box::new(on_advance),
        });

        let timers = steps
            .iter()
            .map(|step| {
                let state = Rc::clone(&state);
                let phase = step.phase;
                host.once(step.delay, Box::new(move || state.fire(phase)))
            })
            .collect();

        Self { state, timers }
    }

    pub fn phase(&self) -> Phase {
        self.state.tracker.get().current()
    }

    /// Number of timers still owned (fired or not).
    #[cfg(test)]
    fn scheduled(&self) -> usize {
        self.timers.len()
    }
}

impl<H: TimerHost> Drop for RevealSequencer<H> {
    fn drop(&mut self) {
        self.state.disposed.set(true);
        self.timers.clear();
    }
}
