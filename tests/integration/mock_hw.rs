//! Mock hardware for integration tests.
//!
//! A pin and a clock whose values the test sets through shared handles,
//! plus a sink that records every notification.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};
use gesture_button::app::ports::{Clock, GestureSink};
use gesture_button::events::GestureEvent;

// ── MockPin ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Input pin whose level and failure mode are controlled by the test.
#[derive(Clone, Default)]
pub struct MockPin {
    level_high: Rc<Cell<bool>>,
    failing: Rc<Cell<bool>>,
}

#[allow(dead_code)]
impl MockPin {
    pub fn new(level_high: bool) -> Self {
        let pin = Self::default();
        pin.set_high(level_high);
        pin
    }

    pub fn set_high(&self, level_high: bool) {
        self.level_high.set(level_high);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl ErrorType for MockPin {
    type Error = PinFault;
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.failing.get() {
            Err(PinFault)
        } else {
            Ok(self.level_high.get())
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

// ── MockClock ─────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockClock {
    now: Rc<Cell<u32>>,
}

#[allow(dead_code)]
impl MockClock {
    pub fn new(now_ms: u32) -> Self {
        let clock = Self::default();
        clock.set(now_ms);
        clock
    }

    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }
}

impl Clock for MockClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<GestureEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clicks(&self) -> Vec<u16> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GestureEvent::Click { count } => Some(*count),
                _ => None,
            })
            .collect()
    }
}

impl GestureSink for RecordingSink {
    fn emit(&mut self, event: &GestureEvent) {
        self.events.push(*event);
    }
}
