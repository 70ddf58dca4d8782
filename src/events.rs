//! Gesture notifications and the recognised-gesture summary.
//!
//! Every mutating call on the state machine returns the notifications it
//! fired, in firing order, as a fixed-capacity [`Notifications`] vector.
//! Callers match on the variants; nothing is deferred or queued between
//! calls.

/// Most notifications a single `update()` can fire: a release that
/// finalises a gesture (end + click/long-press) followed by a timeout that
/// does the same.
pub const MAX_NOTIFICATIONS: usize = 4;

/// Notifications returned from one call, in firing order.
pub type Notifications = heapless::Vec<GestureEvent, MAX_NOTIFICATIONS>;

/// A discrete gesture notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEvent {
    /// A press survived the debounce window.
    Start,
    /// A press episode was finalised.
    End,
    /// One or more short presses, merged when multi-click is enabled.
    Click { count: u16 },
    /// Released after holding past the long-press threshold.
    LongPress,
    /// Held past the very-long-press threshold (fires while still held).
    VeryLongPress,
}

/// The gesture currently recognised, derived from state and click count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    None,
    Click,
    DoubleClick,
    LongPress,
    VeryLongPress,
}
