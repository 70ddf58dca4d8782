//! Peripheral drivers.

pub mod button;
