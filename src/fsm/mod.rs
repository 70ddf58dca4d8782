//! Function-pointer gesture state machine.
//!
//! The same table-driven pattern as a classic embedded C FSM:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  StateTable                                          │
//! │  ┌─────────────────────┬──────────────────────────┐  │
//! │  │ StateId             │ on_event                 │  │
//! │  ├─────────────────────┼──────────────────────────┤  │
//! │  │ Ready               │ fn(ctx, input)->Option<> │  │
//! │  │ Debounce            │ fn(ctx, input)->Option<> │  │
//! │  │ ClickWindow         │ fn(ctx, input)->Option<> │  │
//! │  │ LongPress           │ fn(ctx, input)->Option<> │  │
//! │  │ VeryLongPress       │ fn(ctx, input)->Option<> │  │
//! │  │ PostReleaseDebounce │ fn(ctx, input)->Option<> │  │
//! │  └─────────────────────┴──────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Each poll the caller feeds the raw pin level and the clock.  A level
//! that differs from the held belief becomes a `Pressed`/`Released` input;
//! an expired timer becomes a `Timeout` input.  The current state's handler
//! runs the transition's actions against [`GestureContext`] and returns the
//! next state, if any.  At most one input per source is produced per poll
//! and it is handled before the call returns.
//!
//! The polling cadence must be faster than the debounce window.  See
//! [`GestureConfig::poll_interval_ms`].

pub mod context;
pub mod states;

use core::mem;

use context::GestureContext;
use log::debug;

use crate::config::GestureConfig;
use crate::events::{GestureKind, Notifications};
use crate::timer::TimerStatus;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    Ready = 0,
    Debounce = 1,
    ClickWindow = 2,
    LongPress = 3,
    VeryLongPress = 4,
    PostReleaseDebounce = 5,
}

impl StateId {
    /// Total number of states, used to size the table array.
    pub const COUNT: usize = 6;

    /// Convert a table index back to `StateId`.  Panics on out-of-range in
    /// debug builds; returns `Ready` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Ready,
            1 => Self::Debounce,
            2 => Self::ClickWindow,
            3 => Self::LongPress,
            4 => Self::VeryLongPress,
            5 => Self::PostReleaseDebounce,
            _ => {
                debug_assert!(false, "invalid state index: {idx}");
                Self::Ready
            }
        }
    }
}

/// Input fed to the state handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Timeout,
    Pressed,
    Released,
}

// ---------------------------------------------------------------------------
// State descriptor
// ---------------------------------------------------------------------------

/// Per-input handler.  Returns `Some(next)` to change state.
pub type StateEventFn = fn(&mut GestureContext, Input) -> Option<StateId>;

/// One row of the state table.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_event: StateEventFn,
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Gesture recogniser for one button.
pub struct GestureFsm {
    table: [StateDescriptor; StateId::COUNT],
    current: usize,
    ctx: GestureContext,
}

impl GestureFsm {
    /// New machine in `Ready`, button released, no pending clicks.
    /// `name` prefixes this machine's log lines.
    pub fn new(name: &'static str, config: GestureConfig) -> Self {
        Self {
            table: states::build_state_table(),
            current: StateId::Ready as usize,
            ctx: GestureContext::new(name, config),
        }
    }

    /// Compare a freshly sampled raw level with the held belief and
    /// dispatch `Pressed`/`Released` on change.
    pub fn feed_input(&mut self, level_high: bool, now_ms: u32) -> Notifications {
        self.ctx.outbox.clear();
        self.sample_input(level_high, now_ms);
        mem::take(&mut self.ctx.outbox)
    }

    /// Advance the owned timer and dispatch `Timeout` on expiry.
    pub fn tick(&mut self, now_ms: u32) -> Notifications {
        self.ctx.outbox.clear();
        self.advance_timer(now_ms);
        mem::take(&mut self.ctx.outbox)
    }

    /// One polling cycle: [`feed_input`](Self::feed_input) then
    /// [`tick`](Self::tick) with the same clock sample.
    pub fn update(&mut self, level_high: bool, now_ms: u32) -> Notifications {
        self.ctx.outbox.clear();
        self.sample_input(level_high, now_ms);
        self.advance_timer(now_ms);
        mem::take(&mut self.ctx.outbox)
    }

    /// Dispatch an input directly, bypassing pin and timer sampling.
    pub fn process_event(&mut self, input: Input, now_ms: u32) -> Notifications {
        self.ctx.outbox.clear();
        self.dispatch(input, now_ms);
        mem::take(&mut self.ctx.outbox)
    }

    /// The gesture recognised so far.  Pure read.
    pub fn current_gesture(&self) -> GestureKind {
        let clicks = self.ctx.click_count;
        match self.state() {
            StateId::Ready | StateId::Debounce | StateId::PostReleaseDebounce => match clicks {
                0 => GestureKind::None,
                1 => GestureKind::Click,
                _ => GestureKind::DoubleClick,
            },
            StateId::ClickWindow => {
                if clicks > 0 {
                    GestureKind::DoubleClick
                } else {
                    GestureKind::Click
                }
            }
            StateId::LongPress => GestureKind::LongPress,
            StateId::VeryLongPress => GestureKind::VeryLongPress,
        }
    }

    pub fn state(&self) -> StateId {
        StateId::from_index(self.current)
    }

    pub fn state_name(&self) -> &'static str {
        self.table[self.current].name
    }

    pub fn click_count(&self) -> u16 {
        self.ctx.click_count
    }

    pub fn is_held(&self) -> bool {
        self.ctx.held
    }

    /// True while a gesture is in progress or a timer is pending; a host
    /// may only sleep when this is false.
    pub fn is_busy(&self) -> bool {
        self.ctx.timer.is_active() || self.state() != StateId::Ready
    }

    pub fn config(&self) -> &GestureConfig {
        &self.ctx.config
    }

    pub fn name(&self) -> &'static str {
        self.ctx.name
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn sample_input(&mut self, level_high: bool, now_ms: u32) {
        let pressed = self.ctx.config.polarity.is_pressed(level_high);
        if pressed == self.ctx.held {
            return;
        }
        let input = if pressed { Input::Pressed } else { Input::Released };
        self.dispatch(input, now_ms);
    }

    fn advance_timer(&mut self, now_ms: u32) {
        if self.ctx.timer.poll(now_ms) == TimerStatus::Expired {
            self.dispatch(Input::Timeout, now_ms);
        }
    }

    fn dispatch(&mut self, input: Input, now_ms: u32) {
        self.ctx.now_ms = now_ms;
        let next = (self.table[self.current].on_event)(&mut self.ctx, input);

        if let Some(next_id) = next {
            let next_idx = next_id as usize;
            if next_idx != self.current {
                debug!(
                    "{}: {} -> {} on {:?} @{}ms",
                    self.ctx.name,
                    self.table[self.current].name,
                    self.table[next_idx].name,
                    input,
                    now_ms
                );
            }
            self.current = next_idx;
        }
    }
}
