//! Polled button driver with click, multi-click, long and very-long press
//! detection.
//!
//! ## Hardware
//!
//! Any momentary switch on a digital input that implements
//! `embedded_hal::digital::InputPin`.  No interrupt is used: the main loop
//! calls [`ButtonDriver::update`] (or [`ButtonDriver::poll`]) at least every
//! [`GestureConfig::poll_interval_ms`] milliseconds, and each call samples
//! the pin and the clock once.
//!
//! ## Gesture detection
//!
//! | Gesture         | Condition (defaults)                        | Event                  |
//! |-----------------|---------------------------------------------|------------------------|
//! | Click           | Release within 1200 ms of confirmed press   | `Click { count: 1 }`   |
//! | Multi-click     | Next press within 250 ms of last release    | `Click { count: n }`   |
//! | Long press      | Release after 1200 ms                       | `LongPress`            |
//! | Very long press | Held 3000 ms past the long-press threshold  | `VeryLongPress`        |

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::app::ports::{Clock, GestureSink};
use crate::config::{GestureConfig, Polarity};
use crate::error::{Error, Result};
use crate::events::{GestureKind, Notifications};
use crate::fsm::GestureFsm;

pub struct ButtonDriver<P, C> {
    pin: P,
    clock: C,
    fsm: GestureFsm,
}

impl<P: InputPin, C: Clock> ButtonDriver<P, C> {
    pub fn new(name: &'static str, pin: P, clock: C, config: GestureConfig) -> Self {
        Self {
            pin,
            clock,
            fsm: GestureFsm::new(name, config),
        }
    }

    /// Like [`new`](Self::new), but the polarity is inferred from the pin's
    /// current level, which is taken to be "released".  The button must not
    /// be held while this runs.
    pub fn with_idle_polarity(
        name: &'static str,
        mut pin: P,
        clock: C,
        config: GestureConfig,
    ) -> Result<Self> {
        let idle_high = read_level(&mut pin, name)?;
        let config = GestureConfig {
            polarity: Polarity::from_idle_level(idle_high),
            ..config
        };
        Ok(Self::new(name, pin, clock, config))
    }

    /// One polling cycle.  Returns the notifications fired, in order.
    pub fn update(&mut self) -> Result<Notifications> {
        let level_high = read_level(&mut self.pin, self.fsm.name())?;
        let now_ms = self.clock.now_ms();
        Ok(self.fsm.update(level_high, now_ms))
    }

    /// One polling cycle that pushes notifications into `sink`.
    /// Returns whether a gesture is still in progress.
    pub fn poll(&mut self, sink: &mut impl GestureSink) -> Result<bool> {
        for event in self.update()? {
            sink.emit(&event);
        }
        Ok(self.fsm.is_busy())
    }

    pub fn current_gesture(&self) -> GestureKind {
        self.fsm.current_gesture()
    }

    pub fn is_busy(&self) -> bool {
        self.fsm.is_busy()
    }

    pub fn fsm(&self) -> &GestureFsm {
        &self.fsm
    }

    /// Give back the pin and clock.
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }
}

fn read_level<P: InputPin>(pin: &mut P, name: &str) -> Result<bool> {
    pin.is_high().map_err(|e| {
        warn!("{}: input read failed: {:?}", name, e.kind());
        Error::InputRead
    })
}
