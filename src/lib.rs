//! Gesture-button library.
//!
//! Recognises click, multi-click, long press and very-long press on one
//! momentary input using only polling and a software timer.  Exposes the
//! pure-logic modules for host testing; ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod fsm;
pub mod timer;

pub use config::{GestureConfig, Polarity};
pub use error::Error;
pub use events::{GestureEvent, GestureKind, Notifications};
pub use fsm::GestureFsm;
