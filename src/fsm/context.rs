//! Mutable context threaded through every gesture state handler.
//!
//! Holds the machine's belief about the physical button, the pending click
//! count, the single owned timer, and the outbox that collects the
//! notifications fired during the current call.

use log::warn;

use crate::config::GestureConfig;
use crate::events::{GestureEvent, Notifications};
use crate::timer::PollingTimer;

pub struct GestureContext {
    /// Label prefixed to this machine's diagnostics.
    pub name: &'static str,
    pub config: GestureConfig,
    /// Whether the button is believed to be down.  Updated on raw edges,
    /// independently of debounce completion.
    pub held: bool,
    /// Completed short presses not yet reported.
    pub click_count: u16,
    /// Clock reading of the input being dispatched.
    pub now_ms: u32,
    pub timer: PollingTimer,
    pub outbox: Notifications,
}

impl GestureContext {
    pub fn new(name: &'static str, config: GestureConfig) -> Self {
        Self {
            name,
            config,
            held: false,
            click_count: 0,
            now_ms: 0,
            timer: PollingTimer::new(),
            outbox: Notifications::new(),
        }
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn arm(&mut self, duration_ms: u32) {
        self.timer.start(duration_ms, self.now_ms);
    }

    pub fn cancel_timer(&mut self) {
        self.timer.cancel();
    }

    pub fn multi_click(&self) -> bool {
        self.config.multi_click
    }

    /// Queue a notification for the caller of the current dispatch.
    pub fn notify(&mut self, event: GestureEvent) {
        if self.outbox.push(event).is_err() {
            warn!("{}: notification outbox full, dropped {:?}", self.name, event);
        }
    }

    /// Report the pending clicks (end + click) and clear the count.
    pub fn flush_clicks(&mut self) {
        let count = self.click_count;
        self.click_count = 0;
        self.notify(GestureEvent::End);
        self.notify(GestureEvent::Click { count });
    }
}
