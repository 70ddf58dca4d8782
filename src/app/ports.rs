//! Port traits: the boundary between gesture logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ButtonDriver / GestureFsm
//! ```
//!
//! Input pins come in through `embedded_hal::digital::InputPin`; the two
//! ports below cover what `embedded-hal` does not: a millisecond clock and
//! a destination for gesture notifications.

use crate::events::GestureEvent;

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: platform timer → domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock that wraps at `u32::MAX`.
///
/// Must be sampled at least once per polling cycle.  See
/// [`ROLLOVER_MODULUS`](crate::timer::ROLLOVER_MODULUS).
pub trait Clock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Gesture sink port (driven adapter: domain → consumers)
// ───────────────────────────────────────────────────────────────

/// Push-style consumer of gesture notifications.  Invoked synchronously
/// from [`ButtonDriver::poll`](crate::drivers::button::ButtonDriver::poll),
/// once per notification, in firing order.
pub trait GestureSink {
    fn emit(&mut self, event: &GestureEvent);
}
