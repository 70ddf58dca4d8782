//! ButtonDriver driven through mock pin, clock and sink.

use embedded_hal::digital::InputPin;
use gesture_button::app::ports::Clock;
use gesture_button::config::{GestureConfig, Polarity};
use gesture_button::drivers::button::ButtonDriver;
use gesture_button::error::Error;
use gesture_button::events::{GestureEvent, GestureKind};
use gesture_button::fsm::StateId;

use crate::mock_hw::{MockClock, MockPin, RecordingSink};

/// Active-low button with pull-up: idle reads high.
struct Rig {
    pin: MockPin,
    clock: MockClock,
    button: ButtonDriver<MockPin, MockClock>,
    sink: RecordingSink,
}

impl Rig {
    fn new(config: GestureConfig) -> Self {
        let pin = MockPin::new(true);
        let clock = MockClock::new(0);
        let button = ButtonDriver::new("rig", pin.clone(), clock.clone(), config);
        Self {
            pin,
            clock,
            button,
            sink: RecordingSink::new(),
        }
    }

    /// Set the physical state at `t` and poll once.  Returns the busy flag.
    fn at(&mut self, t: u32, pressed: bool) -> bool {
        self.clock.set(t);
        self.pin.set_high(!pressed);
        self.button.poll(&mut self.sink).unwrap()
    }

    /// Poll every `step` ms over `[from, to]` with a fixed physical state.
    fn hold(&mut self, from: u32, to: u32, step: u32, pressed: bool) {
        let mut t = from;
        while t <= to {
            self.at(t, pressed);
            t += step;
        }
    }
}

fn multi() -> GestureConfig {
    GestureConfig {
        multi_click: true,
        ..GestureConfig::default()
    }
}

#[test]
fn reference_click_without_multi_click() {
    let mut rig = Rig::new(GestureConfig::default());
    rig.hold(0, 29, 1, true);
    assert!(rig.sink.events.is_empty());
    rig.at(30, true);
    assert_eq!(rig.sink.events, vec![GestureEvent::Start]);

    rig.hold(31, 49, 1, true);
    rig.at(50, false);
    assert_eq!(
        rig.sink.events,
        vec![
            GestureEvent::Start,
            GestureEvent::End,
            GestureEvent::Click { count: 1 },
        ]
    );

    rig.hold(51, 79, 1, false);
    assert!(rig.button.is_busy());
    assert!(!rig.at(80, false));
    assert_eq!(rig.sink.events.len(), 3);
}

#[test]
fn reference_click_with_multi_click_reports_after_merge_window() {
    let mut rig = Rig::new(multi());
    rig.hold(0, 49, 1, true);
    rig.hold(50, 329, 1, false);
    assert_eq!(rig.sink.events, vec![GestureEvent::Start]);
    assert_eq!(rig.button.current_gesture(), GestureKind::Click);

    assert!(!rig.at(330, false));
    assert_eq!(
        rig.sink.events,
        vec![
            GestureEvent::Start,
            GestureEvent::End,
            GestureEvent::Click { count: 1 },
        ]
    );
}

#[test]
fn triple_click_is_one_notification() {
    let mut rig = Rig::new(multi());
    let mut t = 0;
    for _ in 0..3 {
        rig.hold(t, t + 60, 5, true);
        rig.hold(t + 65, t + 150, 5, false);
        t += 155;
    }
    rig.hold(t, t + 400, 5, false);
    assert_eq!(rig.sink.clicks(), vec![3]);
    assert_eq!(
        rig.sink
            .events
            .iter()
            .filter(|e| **e == GestureEvent::Start)
            .count(),
        3
    );
    assert!(!rig.button.is_busy());
}

#[test]
fn clicks_further_apart_than_merge_window_are_separate() {
    let mut rig = Rig::new(multi());
    rig.hold(0, 60, 5, true);
    rig.hold(65, 600, 5, false);
    rig.hold(605, 660, 5, true);
    rig.hold(665, 1200, 5, false);
    assert_eq!(rig.sink.clicks(), vec![1, 1]);
}

#[test]
fn long_and_very_long_press() {
    let mut rig = Rig::new(GestureConfig::default());
    rig.hold(0, 1225, 5, true);
    assert_eq!(rig.button.current_gesture(), GestureKind::Click);
    rig.at(1230, true);
    assert_eq!(rig.button.current_gesture(), GestureKind::LongPress);
    rig.hold(1235, 4225, 5, true);
    assert!(!rig.sink.events.contains(&GestureEvent::VeryLongPress));
    rig.at(4230, true);
    assert_eq!(rig.sink.events.last(), Some(&GestureEvent::VeryLongPress));

    rig.hold(4235, 5000, 5, false);
    assert_eq!(
        rig.sink.events,
        vec![
            GestureEvent::Start,
            GestureEvent::VeryLongPress,
            GestureEvent::End,
        ]
    );
    assert_eq!(rig.sink.clicks(), Vec::<u16>::new());
}

#[test]
fn long_press_survives_clock_rollover() {
    let mut rig = Rig::new(GestureConfig::default());
    let start = u32::MAX - 600;
    let mut t = start;
    for _ in 0..300 {
        rig.at(t, true);
        t = t.wrapping_add(5);
    }
    // 1500ms held, crossing the wrap: long press, no spurious very-long.
    assert_eq!(rig.button.fsm().state(), StateId::LongPress);
    rig.at(t, false);
    assert_eq!(
        rig.sink.events,
        vec![
            GestureEvent::Start,
            GestureEvent::End,
            GestureEvent::LongPress,
        ]
    );
}

#[test]
fn contact_bounce_is_not_a_gesture() {
    let mut rig = Rig::new(GestureConfig::default());
    for (t, pressed) in [(0, true), (3, false), (6, true), (9, false), (12, false)] {
        rig.at(t, pressed);
    }
    rig.hold(15, 200, 5, false);
    assert!(rig.sink.events.is_empty());
    assert_eq!(rig.button.fsm().state(), StateId::Ready);
}

#[test]
fn idle_polarity_is_inferred_from_resting_level() {
    let pin = MockPin::new(false);
    let clock = MockClock::new(0);
    let mut button =
        ButtonDriver::with_idle_polarity("hi", pin.clone(), clock.clone(), GestureConfig::default())
            .unwrap();
    assert_eq!(button.fsm().config().polarity, Polarity::ActiveHigh);

    let mut sink = RecordingSink::new();
    pin.set_high(true);
    button.poll(&mut sink).unwrap();
    clock.set(30);
    button.poll(&mut sink).unwrap();
    assert_eq!(sink.events, vec![GestureEvent::Start]);
}

#[test]
fn pin_failure_is_reported_and_leaves_state_untouched() {
    let mut rig = Rig::new(GestureConfig::default());
    rig.at(0, true);
    rig.pin.set_failing(true);
    rig.clock.set(40);
    assert_eq!(rig.button.update().unwrap_err(), Error::InputRead);
    assert_eq!(rig.button.fsm().state(), StateId::Debounce);

    rig.pin.set_failing(false);
    let events = rig.button.update().unwrap();
    assert_eq!(events.as_slice(), &[GestureEvent::Start]);
}

#[test]
fn idle_polarity_fails_when_pin_unreadable() {
    let pin = MockPin::new(true);
    pin.set_failing(true);
    let result =
        ButtonDriver::with_idle_polarity("bad", pin, MockClock::new(0), GestureConfig::default());
    assert!(matches!(result, Err(Error::InputRead)));
}

#[test]
fn release_returns_peripherals() {
    let rig = Rig::new(GestureConfig::default());
    let (mut pin, clock) = rig.button.release();
    rig.pin.set_high(false);
    assert_eq!(pin.is_high(), Ok(false));
    rig.clock.set(7);
    assert_eq!(clock.now_ms(), 7);
}
