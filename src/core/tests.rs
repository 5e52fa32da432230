#[cfg(test)]
mod tests {
    use crate::core::countdown::{CountdownTicker, FixedClock, parse_deadline};
    use crate::core::hero::HeroState;
    use crate::core::reveal::{HERO_REVEAL, Phase, RevealSequencer};
    use crate::core::timers::ManualTimers;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn mount_hero(
        timers: &ManualTimers,
        state: &Rc<RefCell<HeroState>>,
    ) -> (RevealSequencer<ManualTimers>, CountdownTicker<ManualTimers>) {
        let deadline = parse_deadline("2025-09-04T23:59:59").unwrap();
        let now = parse_deadline("2025-09-03T23:59:59").unwrap();

        let phase_sink = state.clone();
        let sequencer = RevealSequencer::mount(timers, &HERO_REVEAL, move |phase| {
            phase_sink.borrow_mut().phase = phase;
        });

        let countdown_sink = state.clone();
        let ticker = CountdownTicker::start(timers, FixedClock(now), deadline, move |value| {
            countdown_sink.borrow_mut().remaining = Some(value);
        });

        (sequencer, ticker)
    }

    #[test]
    fn test_countdown_is_ready_before_it_is_revealed() {
        let timers = ManualTimers::new();
        let state = Rc::new(RefCell::new(HeroState::default()));
        let _mounted = mount_hero(&timers, &state);

        let snapshot = *state.borrow();
        assert_eq!(snapshot.phase, Phase::HIDDEN);
        assert_eq!(snapshot.remaining.map(|r| r.days), Some(1));
        assert!(!snapshot.shows_countdown());

        timers.advance(Duration::from_millis(4300));
        assert!(state.borrow().shows_countdown());
        assert!(!state.borrow().shows_call_to_action());

        timers.advance(Duration::from_millis(200));
        assert!(state.borrow().shows_call_to_action());
    }

    #[test]
    fn test_frozen_clock_never_flags_changes() {
        let timers = ManualTimers::new();
        let state = Rc::new(RefCell::new(HeroState::default()));
        let _mounted = mount_hero(&timers, &state);

        timers.advance(Duration::from_secs(5));
        let units = state.borrow().countdown_units();
        assert!(units.iter().all(|u| !u.flip));
        assert_eq!(units[0].value, "01");
    }

    #[test]
    fn test_unmount_stops_all_writers() {
        let timers = ManualTimers::new();
        let state = Rc::new(RefCell::new(HeroState::default()));
        let mounted = mount_hero(&timers, &state);

        timers.advance(Duration::from_millis(1500));
        let before = *state.borrow();

        drop(mounted);
        assert_eq!(timers.pending(), 0);

        timers.advance(Duration::from_secs(30));
        assert_eq!(*state.borrow(), before);
        assert_eq!(before.phase, Phase::OLD_YEAR);
    }
}
