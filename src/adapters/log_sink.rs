//! Log-based gesture sink adapter.
//!
//! Implements [`GestureSink`] by writing each notification to the logger
//! (UART / USB-CDC on target).  An application that reacts to gestures
//! implements the same trait.

use log::info;

use crate::app::ports::GestureSink;
use crate::events::GestureEvent;

/// Adapter that logs every [`GestureEvent`] for one named button.
pub struct LogGestureSink {
    button: &'static str,
    emitted: u32,
}

impl LogGestureSink {
    pub fn new(button: &'static str) -> Self {
        Self { button, emitted: 0 }
    }

    /// Number of notifications logged so far.
    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl GestureSink for LogGestureSink {
    fn emit(&mut self, event: &GestureEvent) {
        self.emitted = self.emitted.wrapping_add(1);
        match event {
            GestureEvent::Start => info!("GESTURE | {} | start", self.button),
            GestureEvent::End => info!("GESTURE | {} | end", self.button),
            GestureEvent::Click { count } => {
                info!("GESTURE | {} | click x{}", self.button, count);
            }
            GestureEvent::LongPress => info!("GESTURE | {} | long press", self.button),
            GestureEvent::VeryLongPress => {
                info!("GESTURE | {} | very long press", self.button);
            }
        }
    }
}
