//! Application boundary.
//!
//! The gesture logic never touches hardware directly.  Time and
//! notification delivery go through the **port traits** defined in
//! [`ports`], keeping the state machine testable without peripherals.

pub mod ports;
