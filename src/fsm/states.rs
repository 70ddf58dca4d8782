//! Concrete state handlers and table builder.
//!
//! One plain `fn` per state; no closures, no dynamic dispatch, no heap.
//!
//! ```text
//!            ┌──────────[timeout, released]──────────┐
//!            ▼                                       │
//!  READY ──[pressed]──▶ DEBOUNCE ──[timeout, held]──▶ CLICK_WINDOW
//!    ▲                                                 │        │
//!    │                                        [released]  [timeout]
//!    │                                                 │        ▼
//!    │                                                 │   LONG_PRESS ──[timeout]──▶ VERY_LONG_PRESS
//!    │                                                 ▼        │                         │
//!    └──────[timeout]────── POST_RELEASE_DEBOUNCE ◀──[released]─┴────────[released]───────┘
//! ```
//!
//! READY's own timeout flushes a pending multi-click sequence.

use log::{trace, warn};

use super::context::GestureContext;
use super::{Input, StateDescriptor, StateId};
use crate::events::GestureEvent;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the state table.  Called once per machine.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0: Ready
        StateDescriptor {
            id: StateId::Ready,
            name: "Ready",
            on_event: ready_on_event,
        },
        // Index 1: Debounce
        StateDescriptor {
            id: StateId::Debounce,
            name: "Debounce",
            on_event: debounce_on_event,
        },
        // Index 2: ClickWindow
        StateDescriptor {
            id: StateId::ClickWindow,
            name: "ClickWindow",
            on_event: click_window_on_event,
        },
        // Index 3: LongPress
        StateDescriptor {
            id: StateId::LongPress,
            name: "LongPress",
            on_event: long_press_on_event,
        },
        // Index 4: VeryLongPress
        StateDescriptor {
            id: StateId::VeryLongPress,
            name: "VeryLongPress",
            on_event: very_long_press_on_event,
        },
        // Index 5: PostReleaseDebounce
        StateDescriptor {
            id: StateId::PostReleaseDebounce,
            name: "PostReleaseDebounce",
            on_event: post_release_debounce_on_event,
        },
    ]
}

fn unhandled(ctx: &GestureContext, state: StateId, input: Input) -> Option<StateId> {
    warn!(
        "{}: ignoring {:?} in {:?} (held={}, clicks={})",
        ctx.name, input, state, ctx.held, ctx.click_count
    );
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  READY: idle, possibly waiting out a merge window
// ═══════════════════════════════════════════════════════════════════════════

fn ready_on_event(ctx: &mut GestureContext, input: Input) -> Option<StateId> {
    match input {
        Input::Timeout => {
            // Merge window closed without another press.
            if ctx.click_count > 0 {
                ctx.flush_clicks();
            }
            None
        }
        Input::Pressed => {
            ctx.held = true;
            ctx.arm(ctx.config.debounce_ms);
            Some(StateId::Debounce)
        }
        Input::Released => unhandled(ctx, StateId::Ready, input),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  DEBOUNCE: is the press real?
// ═══════════════════════════════════════════════════════════════════════════

fn debounce_on_event(ctx: &mut GestureContext, input: Input) -> Option<StateId> {
    match input {
        Input::Timeout => {
            if ctx.held {
                ctx.arm(ctx.config.long_press_ms);
                ctx.notify(GestureEvent::Start);
                Some(StateId::ClickWindow)
            } else {
                // The debounce timer replaced the merge window; restart it so
                // clicks already counted are still reported.
                if ctx.multi_click() && ctx.click_count > 0 {
                    ctx.arm(ctx.config.merge_window_ms);
                }
                Some(StateId::Ready)
            }
        }
        Input::Pressed => {
            ctx.held = true;
            None
        }
        Input::Released => {
            ctx.held = false;
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  CLICK_WINDOW: confirmed press, short so far
// ═══════════════════════════════════════════════════════════════════════════

fn click_window_on_event(ctx: &mut GestureContext, input: Input) -> Option<StateId> {
    match input {
        Input::Timeout => {
            if !ctx.held {
                return unhandled(ctx, StateId::ClickWindow, input);
            }
            ctx.arm(ctx.config.very_long_press_ms);
            ctx.click_count = 0;
            Some(StateId::LongPress)
        }
        Input::Released => {
            ctx.held = false;
            ctx.cancel_timer();
            if ctx.multi_click() {
                ctx.click_count = ctx.click_count.saturating_add(1);
            } else {
                ctx.click_count = 0;
                ctx.notify(GestureEvent::End);
                ctx.notify(GestureEvent::Click { count: 1 });
            }
            ctx.arm(ctx.config.debounce_ms);
            Some(StateId::PostReleaseDebounce)
        }
        Input::Pressed => {
            ctx.held = true;
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  LONG_PRESS: held past the long-press threshold
// ═══════════════════════════════════════════════════════════════════════════

fn long_press_on_event(ctx: &mut GestureContext, input: Input) -> Option<StateId> {
    match input {
        Input::Timeout => {
            if !ctx.held {
                return unhandled(ctx, StateId::LongPress, input);
            }
            ctx.notify(GestureEvent::VeryLongPress);
            Some(StateId::VeryLongPress)
        }
        Input::Released => {
            ctx.held = false;
            ctx.cancel_timer();
            ctx.click_count = 0;
            ctx.notify(GestureEvent::End);
            ctx.notify(GestureEvent::LongPress);
            ctx.arm(ctx.config.debounce_ms);
            Some(StateId::PostReleaseDebounce)
        }
        Input::Pressed => {
            ctx.held = true;
            None
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  VERY_LONG_PRESS: already reported, waiting for release
// ═══════════════════════════════════════════════════════════════════════════

fn very_long_press_on_event(ctx: &mut GestureContext, input: Input) -> Option<StateId> {
    match input {
        Input::Released => {
            ctx.cancel_timer();
            ctx.held = false;
            ctx.click_count = 0;
            ctx.notify(GestureEvent::End);
            ctx.arm(ctx.config.debounce_ms);
            Some(StateId::PostReleaseDebounce)
        }
        Input::Pressed => {
            ctx.held = true;
            None
        }
        Input::Timeout => unhandled(ctx, StateId::VeryLongPress, input),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  POST_RELEASE_DEBOUNCE: is the release real?
// ═══════════════════════════════════════════════════════════════════════════

fn post_release_debounce_on_event(ctx: &mut GestureContext, input: Input) -> Option<StateId> {
    match input {
        Input::Timeout => {
            ctx.held = false;
            ctx.cancel_timer();
            if ctx.multi_click() && ctx.click_count > 0 {
                ctx.arm(ctx.config.merge_window_ms);
            }
            Some(StateId::Ready)
        }
        Input::Pressed | Input::Released => {
            trace!("{}: absorbed {:?} after release", ctx.name, input);
            None
        }
    }
}
