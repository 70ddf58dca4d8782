//! Cooperative polling timer.
//!
//! A software stand-in for a one-shot hardware timer.  The owner arms it
//! with a millisecond budget and then calls [`PollingTimer::poll`] from its
//! control loop; the timer accumulates the time elapsed between polls and
//! reports [`TimerStatus::Expired`] exactly once when the budget is spent.
//!
//! ## Clock rollover
//!
//! The clock is a `u32` millisecond counter, so it wraps every
//! [`ROLLOVER_MODULUS`] ms (about 49.7 days).  When a sample is numerically
//! smaller than the previous one the delta is `(M - last) + now`, which is
//! exactly `now.wrapping_sub(last)`.  A clock that genuinely jumps backwards
//! is indistinguishable from a wrap and mis-counts that single interval.

/// Period after which the `u32` millisecond clock wraps back to zero.
pub const ROLLOVER_MODULUS: u64 = 1 << 32;

/// Milliseconds elapsed from `last` to `now` on a clock that wraps at
/// [`ROLLOVER_MODULUS`].
#[inline]
pub const fn elapsed_between(last: u32, now: u32) -> u32 {
    now.wrapping_sub(last)
}

/// Result of a single [`PollingTimer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    /// Never armed, cancelled, or already reported expiry.
    Inactive,
    /// Armed, budget not yet spent.
    Pending,
    /// Budget spent on this poll.  The timer is now inactive.
    Expired,
}

/// One-shot countdown driven by [`poll`](Self::poll).
#[derive(Debug, Clone, Default)]
pub struct PollingTimer {
    /// Budget in ms; `None` while inactive.
    deadline_budget: Option<u32>,
    /// Time accumulated since the last `start`.
    accumulated: u32,
    /// Last clock reading seen by `start` or `poll`.
    last_sample: u32,
}

impl PollingTimer {
    pub const fn new() -> Self {
        Self {
            deadline_budget: None,
            accumulated: 0,
            last_sample: 0,
        }
    }

    /// Arm the timer for `duration_ms`, measured from `now_ms`.
    /// Any pending deadline is discarded.
    pub fn start(&mut self, duration_ms: u32, now_ms: u32) {
        self.deadline_budget = Some(duration_ms);
        self.accumulated = 0;
        self.last_sample = now_ms;
    }

    /// Deactivate the timer.  It stays silent until re-armed.
    pub fn cancel(&mut self) {
        self.deadline_budget = None;
    }

    /// Advance the timer to `now_ms`.
    pub fn poll(&mut self, now_ms: u32) -> TimerStatus {
        let Some(budget) = self.deadline_budget else {
            return TimerStatus::Inactive;
        };

        let delta = elapsed_between(self.last_sample, now_ms);
        self.accumulated = self.accumulated.saturating_add(delta);
        self.last_sample = now_ms;

        if self.accumulated >= budget {
            self.deadline_budget = None;
            TimerStatus::Expired
        } else {
            TimerStatus::Pending
        }
    }

    pub fn is_active(&self) -> bool {
        self.deadline_budget.is_some()
    }

    /// Time accumulated since the last `start`, as of the last poll.
    pub fn elapsed_ms(&self) -> u32 {
        self.accumulated
    }

    /// Budget left as of the last poll, or `None` when inactive.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.deadline_budget
            .map(|budget| budget.saturating_sub(self.accumulated))
    }
}
