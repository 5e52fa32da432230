//! Countdown engine
//!
//! Recomputes the time left until the recruitment deadline on every tick. Each
//! tick derives the value fresh from `deadline - now`, so suspended tabs and clock
//! adjustments never accumulate drift.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::timers::TimerHost;

/// Deadline used when `RECRUITMENT_DEADLINE` is not set at build time.
pub const DEFAULT_DEADLINE: &str = "2025-09-04T23:59:59";

/// How often the countdown is recomputed.
pub const TICK_INTERVAL_MS: u64 = 1000;

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Countdown-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("Clock unavailable: {0}")]
    Unavailable(String),

    #[error("Clock returned an out-of-range timestamp: {0}")]
    OutOfRange(i64),

    #[error("Invalid deadline '{0}'")]
    InvalidDeadline(String),
}

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError>;
}

/// Wall clock of the host process.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "ssr")]
impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(Utc::now())
    }
}

/// Clock backed by `Date.now()` in the browser.
#[cfg(feature = "hydrate")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

#[cfg(feature = "hydrate")]
impl Clock for BrowserClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        let millis = js_sys::Date::now();
        if !millis.is_finite() {
            return Err(ClockError::Unavailable("Date.now() is not finite".to_string()));
        }
        let millis = millis as i64;
        DateTime::from_timestamp_millis(millis).ok_or(ClockError::OutOfRange(millis))
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<Utc>, ClockError> {
        Ok(self.0)
    }
}

/// Parse a deadline given either as RFC 3339 or as a naive local timestamp.
///
/// Naive timestamps (`2025-09-04T23:59:59`) are interpreted as UTC so that the
/// server render and the hydrated client compute the same countdown.
pub fn parse_deadline(raw: &str) -> Result<DateTime<Utc>, ClockError> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|_| ClockError::InvalidDeadline(raw.to_string()))
}

/// The recruitment deadline, fixed for the lifetime of the build.
pub fn recruitment_deadline() -> DateTime<Utc> {
    let raw = option_env!("RECRUITMENT_DEADLINE").unwrap_or(DEFAULT_DEADLINE);
    parse_deadline(raw)
        .or_else(|e| {
            leptos::logging::warn!("{}, falling back to {}", e, DEFAULT_DEADLINE);
            parse_deadline(DEFAULT_DEADLINE)
        })
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Which units changed since the previous tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitChanges {
    pub days: bool,
    pub hours: bool,
    pub minutes: bool,
    pub seconds: bool,
}

impl UnitChanges {
    pub fn any(&self) -> bool {
        self.days || self.hours || self.minutes || self.seconds
    }
}

/// Time left until the deadline, split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub changed: UnitChanges,
    /// The deadline has been reached. Set only when `now >= deadline`, not when
    /// the floored total happens to be zero.
    pub expired: bool,
}

impl TimeRemaining {
    /// All zeros, deadline reached.
    pub fn closed() -> Self {
        Self {
            expired: true,
            ..Self::default()
        }
    }

    /// Split `deadline - now` into units. Flags are left unset.
    pub fn between(deadline: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let distance_ms = (deadline - now).num_milliseconds();
        if distance_ms <= 0 {
            return Self::closed();
        }

        let total = (distance_ms / 1000) as u64;
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds: total % SECONDS_PER_MINUTE,
            changed: UnitChanges::default(),
            expired: false,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    fn with_changes_from(mut self, previous: &TimeRemaining) -> Self {
        self.changed = UnitChanges {
            days: self.days != previous.days,
            hours: self.hours != previous.hours,
            minutes: self.minutes != previous.minutes,
            seconds: self.seconds != previous.seconds,
        };
        self
    }
}

/// Stateful countdown: remembers the last good value to derive change flags.
#[derive(Debug, Clone)]
pub struct CountdownEngine {
    deadline: DateTime<Utc>,
    last: Option<TimeRemaining>,
}

impl CountdownEngine {
    pub fn new(deadline: DateTime<Utc>) -> Self {
        Self {
            deadline,
            last: None,
        }
    }

    /// Last successfully computed value, if any tick has succeeded yet.
    pub fn current(&self) -> Option<TimeRemaining> {
        self.last
    }

    /// Recompute from `now`.
    ///
    /// The first successful tick never flags a change. Once the deadline has
    /// passed the result is pinned to zero with no flags.
    pub fn tick_at(&mut self, now: DateTime<Utc>) -> TimeRemaining {
        let fresh = TimeRemaining::between(self.deadline, now);
        let next = match &self.last {
            Some(previous) if !fresh.is_expired() => fresh.with_changes_from(previous),
            _ => fresh,
        };
        self.last = Some(next);
        next
    }

    /// Sample `clock` and recompute.
    ///
    /// A failing clock skips the tick: the error is logged, `None` is returned and
    /// the previous value stays current.
    pub fn tick<C: Clock + ?Sized>(&mut self, clock: &C) -> Option<TimeRemaining> {
        match clock.now() {
            Ok(now) => Some(self.tick_at(now)),
            Err(e) => {
                leptos::logging::warn!("Skipping countdown tick: {}", e);
                None
            }
        }
    }
}

/// Drives a [`CountdownEngine`] from a repeating timer.
///
/// Ticks once immediately, then every [`TICK_INTERVAL_MS`]. Dropping the ticker
/// cancels the interval.
pub struct CountdownTicker<H: TimerHost> {
    _interval: H::Handle,
}

impl<H: TimerHost> CountdownTicker<H> {
    pub fn start<C>(
        host: &H,
        clock: C,
        deadline: DateTime<Utc>,
        on_tick: impl Fn(TimeRemaining) + 'static,
    ) -> Self
    where
        C: Clock + 'static,
    {
        let mut engine = CountdownEngine::new(deadline);
        if let Some(value) = engine.tick(&clock) {
            on_tick(value);
        }

        let interval = host.every(
            Duration::from_millis(TICK_INTERVAL_MS),
            Box::new(move || {
                if let Some(value) = engine.tick(&clock) {
                    on_tick(value);
                }
            }),
        );

        Self {
            _interval: interval,
        }
    }
}

/// Zero-padded two digit display used by the flip cards.
pub fn pad_unit(value: u64) -> String {
    format!("{:02}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timers::ManualTimers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn at(raw: &str) -> DateTime<Utc> {
        parse_deadline(raw).unwrap()
    }

    struct ScriptedClock {
        readings: RefCell<Vec<Result<DateTime<Utc>, ClockError>>>,
    }

    impl ScriptedClock {
        fn new(mut readings: Vec<Result<DateTime<Utc>, ClockError>>) -> Self {
            readings.reverse();
            Self {
                readings: RefCell::new(readings),
            }
        }
    }

    impl Clock for ScriptedClock {
        fn now(&self) -> Result<DateTime<Utc>, ClockError> {
            self.readings
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Err(ClockError::Unavailable("exhausted".to_string())))
        }
    }

    #[test]
    fn test_one_day_before_deadline() {
        let remaining = TimeRemaining::between(at("2025-09-04T23:59:59"), at("2025-09-03T23:59:59"));
        assert_eq!(remaining.days, 1);
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.minutes, 0);
        assert_eq!(remaining.seconds, 0);
    }

    #[test]
    fn test_unit_breakdown() {
        let deadline = at("2025-09-04T23:59:59");
        let now = deadline
            - chrono::Duration::days(2)
            - chrono::Duration::hours(5)
            - chrono::Duration::minutes(7)
            - chrono::Duration::seconds(9);
        let remaining = TimeRemaining::between(deadline, now);
        assert_eq!(
            (remaining.days, remaining.hours, remaining.minutes, remaining.seconds),
            (2, 5, 7, 9)
        );
    }

    #[test]
    fn test_total_seconds_floors_milliseconds() {
        let deadline = at("2025-09-04T23:59:59");
        for offset_ms in [1_i64, 999, 1_000, 1_001, 59_999, 86_400_500, 3_000_000_123] {
            let now = deadline - chrono::Duration::milliseconds(offset_ms);
            let remaining = TimeRemaining::between(deadline, now);
            assert_eq!(remaining.total_seconds(), (offset_ms / 1000) as u64, "offset {offset_ms}");
        }
    }

    #[test]
    fn test_total_strictly_decreases_each_second() {
        let deadline = at("2025-09-04T23:59:59");
        let start = deadline - chrono::Duration::seconds(90_061);
        let mut previous = u64::MAX;
        for step in 0..200 {
            let now = start + chrono::Duration::seconds(step);
            let total = TimeRemaining::between(deadline, now).total_seconds();
            assert!(total < previous);
            previous = total;
        }
    }

    #[test]
    fn test_expired_pins_to_zero() {
        let deadline = at("2025-09-04T23:59:59");
        let mut engine = CountdownEngine::new(deadline);
        engine.tick_at(deadline - chrono::Duration::seconds(2));
        engine.tick_at(deadline - chrono::Duration::seconds(1));

        for after in [0_i64, 1, 3_600, 86_400 * 400] {
            let value = engine.tick_at(deadline + chrono::Duration::seconds(after));
            assert_eq!(value, TimeRemaining::closed());
            assert!(!value.changed.any());
            assert!(value.is_expired());
        }
    }

    #[test]
    fn test_last_second_still_counts_down() {
        let deadline = at("2025-09-04T23:59:59");
        let mut engine = CountdownEngine::new(deadline);

        let one_left = engine.tick_at(deadline - chrono::Duration::milliseconds(1_500));
        assert_eq!(one_left.seconds, 1);

        let under_one = engine.tick_at(deadline - chrono::Duration::milliseconds(500));
        assert_eq!(under_one.total_seconds(), 0);
        assert!(under_one.changed.seconds);
        assert!(!under_one.is_expired());

        let at_deadline = engine.tick_at(deadline);
        assert!(at_deadline.is_expired());
        assert!(!at_deadline.changed.any());
    }

    #[test]
    fn test_first_tick_has_no_flags() {
        let deadline = at("2025-09-04T23:59:59");
        let mut engine = CountdownEngine::new(deadline);
        let first = engine.tick_at(deadline - chrono::Duration::seconds(90_061));
        assert!(!first.changed.any());
    }

    #[test]
    fn test_flags_track_unit_changes() {
        let deadline = at("2025-09-04T23:59:59");
        let mut engine = CountdownEngine::new(deadline);

        // 1d 00:00:01 -> 1d 00:00:00 -> 0d 23:59:59
        let start = deadline - chrono::Duration::seconds(86_401);
        engine.tick_at(start);

        let second = engine.tick_at(start + chrono::Duration::seconds(1));
        assert_eq!(
            second.changed,
            UnitChanges {
                days: false,
                hours: false,
                minutes: false,
                seconds: true,
            }
        );

        let third = engine.tick_at(start + chrono::Duration::seconds(2));
        assert_eq!(
            third.changed,
            UnitChanges {
                days: true,
                hours: true,
                minutes: true,
                seconds: true,
            }
        );
    }

    #[test]
    fn test_same_second_twice_has_no_flags() {
        let deadline = at("2025-09-04T23:59:59");
        let mut engine = CountdownEngine::new(deadline);
        let now = deadline - chrono::Duration::milliseconds(10_500);
        engine.tick_at(now);
        let again = engine.tick_at(now + chrono::Duration::milliseconds(200));
        assert!(!again.changed.any());
    }

    #[test]
    fn test_clock_failure_keeps_last_value() {
        let deadline = at("2025-09-04T23:59:59");
        let clock = ScriptedClock::new(vec![
            Ok(deadline - chrono::Duration::seconds(10)),
            Err(ClockError::Unavailable("suspended".to_string())),
            Ok(deadline - chrono::Duration::seconds(8)),
        ]);
        let mut engine = CountdownEngine::new(deadline);

        let first = engine.tick(&clock).unwrap();
        assert_eq!(first.seconds, 10);

        assert!(engine.tick(&clock).is_none());
        assert_eq!(engine.current(), Some(first));

        let third = engine.tick(&clock).unwrap();
        assert_eq!(third.seconds, 8);
        assert!(third.changed.seconds);
    }

    #[test]
    fn test_failing_first_tick_leaves_no_value() {
        let clock = ScriptedClock::new(vec![Err(ClockError::OutOfRange(i64::MAX))]);
        let mut engine = CountdownEngine::new(at("2025-09-04T23:59:59"));
        assert!(engine.tick(&clock).is_none());
        assert!(engine.current().is_none());
    }

    #[test]
    fn test_fixed_clock() {
        let deadline = at("2025-09-04T23:59:59");
        let mut engine = CountdownEngine::new(deadline);
        let value = engine.tick(&FixedClock(at("2025-09-03T23:59:59"))).unwrap();
        assert_eq!(value.days, 1);
    }

    #[test]
    fn test_parse_deadline_formats() {
        assert_eq!(
            parse_deadline("2025-09-04T23:59:59").unwrap(),
            parse_deadline("2025-09-04T23:59:59Z").unwrap()
        );
        assert_eq!(
            parse_deadline("2025-09-04T23:59:59+05:30").unwrap(),
            parse_deadline("2025-09-04T18:29:59Z").unwrap()
        );
        assert_eq!(
            parse_deadline("next friday"),
            Err(ClockError::InvalidDeadline("next friday".to_string()))
        );
    }

    #[test]
    fn test_recruitment_deadline_matches_default() {
        if option_env!("RECRUITMENT_DEADLINE").is_none() {
            assert_eq!(recruitment_deadline(), at(DEFAULT_DEADLINE));
        }
    }

    /// Clock that follows the virtual time of a [`ManualTimers`].
    struct TimerClock {
        start: DateTime<Utc>,
        timers: ManualTimers,
    }

    impl Clock for TimerClock {
        fn now(&self) -> Result<DateTime<Utc>, ClockError> {
            let elapsed = chrono::Duration::from_std(self.timers.now())
                .map_err(|e| ClockError::Unavailable(e.to_string()))?;
            Ok(self.start + elapsed)
        }
    }

    #[test]
    fn test_ticker_emits_every_second_until_dropped() {
        let deadline = at("2025-09-04T23:59:59");
        let timers = ManualTimers::new();
        let clock = TimerClock {
            start: deadline - chrono::Duration::seconds(65),
            timers: timers.clone(),
        };
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();

        let ticker = CountdownTicker::start(&timers, clock, deadline, move |value| {
            sink.borrow_mut().push(value)
        });
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(seen.borrow()[0].minutes, 1);
        assert_eq!(seen.borrow()[0].seconds, 5);

        timers.advance(Duration::from_secs(3));
        assert_eq!(seen.borrow().len(), 4);
        assert_eq!(seen.borrow()[3].seconds, 2);
        assert!(seen.borrow()[3].changed.seconds);
        assert!(!seen.borrow()[3].changed.minutes);

        drop(ticker);
        timers.advance(Duration::from_secs(10));
        assert_eq!(seen.borrow().len(), 4);
    }

    #[test]
    fn test_ticker_idles_at_zero_after_deadline() {
        let deadline = at("2025-09-04T23:59:59");
        let timers = ManualTimers::new();
        let clock = TimerClock {
            start: deadline - chrono::Duration::seconds(2),
            timers: timers.clone(),
        };
        let last = Rc::new(RefCell::new(TimeRemaining::default()));
        let sink = last.clone();

        let _ticker = CountdownTicker::start(&timers, clock, deadline, move |value| {
            *sink.borrow_mut() = value
        });
        timers.advance(Duration::from_secs(5));

        assert_eq!(*last.borrow(), TimeRemaining::closed());
    }

    #[test]
    fn test_pad_unit() {
        assert_eq!(pad_unit(0), "00");
        assert_eq!(pad_unit(7), "07");
        assert_eq!(pad_unit(123), "123");
    }
}
