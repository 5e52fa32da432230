//! View state shared by the reveal sequencer and the countdown
//!
//! Both writers are independent; the render layer only reads.

use super::countdown::{TimeRemaining, pad_unit};
use super::reveal::Phase;

/// CSS class that plays the flip animation on a changed unit.
pub const FLIP_CLASS: &str = "countdown-flip";

/// Snapshot of everything the hero renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroState {
    pub phase: Phase,
    /// `None` until the first successful countdown tick.
    pub remaining: Option<TimeRemaining>,
}

/// One flip card of the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownUnit {
    pub label: &'static str,
    pub value: String,
    pub flip: bool,
}

impl CountdownUnit {
    pub fn class(&self) -> &'static str {
        if self.flip {
            FLIP_CLASS
        } else {
            ""
        }
    }
}

impl HeroState {
    pub fn shows_countdown(&self) -> bool {
        self.phase.has_reached(Phase::COUNTDOWN) && self.remaining.is_some()
    }

    pub fn shows_call_to_action(&self) -> bool {
        self.phase.has_reached(Phase::CALL_TO_ACTION)
    }

    pub fn is_closed(&self) -> bool {
        self.remaining.is_some_and(|r| r.is_expired())
    }

    /// Cards in display order. Empty before the first tick.
    pub fn countdown_units(&self) -> Vec<CountdownUnit> {
        let Some(r) = self.remaining else {
            return Vec::new();
        };
        vec![
            CountdownUnit {
                label: "Days",
                value: pad_unit(r.days),
                flip: r.changed.days,
            },
            CountdownUnit {
                label: "Hours",
                value: pad_unit(r.hours),
                flip: r.changed.hours,
            },
            CountdownUnit {
                label: "Minutes",
                value: pad_unit(r.minutes),
                flip: r.changed.minutes,
            },
            CountdownUnit {
                label: "Seconds",
                value: pad_unit(r.seconds),
                flip: r.changed.seconds,
            },
        ]
    }
}
