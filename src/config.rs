//! Gesture timing and input configuration.
//!
//! Fixed at construction of a [`GestureFsm`](crate::fsm::GestureFsm).
//! Tuned values can be stored in flash as a compact `postcard` blob via
//! [`GestureConfig::to_bytes`] / [`GestureConfig::from_bytes`]; decoding
//! validates before handing the config out.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Which raw pin level means "pressed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Pressed pulls the pin low (switch to ground, pull-up enabled).
    ActiveLow,
    /// Pressed drives the pin high (switch to VCC, pull-down enabled).
    ActiveHigh,
}

impl Polarity {
    /// Map a raw level (`true` = high) to the semantic pressed state.
    pub const fn is_pressed(self, level_high: bool) -> bool {
        match self {
            Self::ActiveLow => !level_high,
            Self::ActiveHigh => level_high,
        }
    }

    /// Infer polarity from the level sampled while the button is at rest:
    /// whatever the pin reads now means "released".
    pub const fn from_idle_level(level_high: bool) -> Self {
        if level_high {
            Self::ActiveLow
        } else {
            Self::ActiveHigh
        }
    }
}

/// Per-button configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Merge adjacent clicks into one multi-click notification.
    pub multi_click: bool,
    /// Raw level that means pressed.
    pub polarity: Polarity,

    // --- Timing (milliseconds) ---
    /// Contact-bounce suppression window after every edge.
    pub debounce_ms: u32,
    /// Hold time after a confirmed press before it becomes a long press.
    pub long_press_ms: u32,
    /// Further hold time after a long press before it becomes very long.
    pub very_long_press_ms: u32,
    /// Gap after a click during which the next click is merged with it.
    pub merge_window_ms: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            multi_click: false,
            polarity: Polarity::ActiveLow,

            debounce_ms: 30,
            long_press_ms: 1200,
            very_long_press_ms: 3000,
            merge_window_ms: 250,
        }
    }
}

/// Upper bound on the encoded size of a [`GestureConfig`].
pub const MAX_BLOB_SIZE: usize = 32;

impl GestureConfig {
    /// Reject configurations that cannot produce distinguishable gestures.
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms >= self.long_press_ms {
            return Err(Error::Config(
                "debounce_ms must be shorter than long_press_ms",
            ));
        }
        if self.very_long_press_ms == 0 {
            return Err(Error::Config("very_long_press_ms must be non-zero"));
        }
        if self.multi_click && self.merge_window_ms == 0 {
            return Err(Error::Config(
                "merge_window_ms must be non-zero when multi_click is enabled",
            ));
        }
        Ok(())
    }

    /// Recommended polling cadence.
    ///
    /// Callers must poll faster than `debounce_ms` or edges inside the
    /// debounce window are missed; this is a precondition, not something
    /// the state machine can detect.
    pub fn poll_interval_ms(&self) -> u32 {
        (self.debounce_ms / 3).max(1)
    }

    /// Encode into `buf`, returning the used prefix.
    pub fn to_bytes<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8]> {
        postcard::to_slice(self, buf).map_err(|_| Error::Encode)
    }

    /// Decode and validate a blob written by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| Error::Decode)?;
        config.validate()?;
        Ok(config)
    }
}
