//! Unified error type for the gesture-button crate.
//!
//! The gesture state machine itself never fails: impossible input
//! combinations are logged and ignored.  Errors only arise at the edges,
//! when a pin cannot be sampled or a configuration is rejected.
//! All variants are `Copy` so they can be passed around without allocation.

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input pin could not be sampled.
    InputRead,
    /// A configuration value is out of range.
    Config(&'static str),
    /// A configuration blob could not be encoded (buffer too small).
    Encode,
    /// A configuration blob could not be decoded.
    Decode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputRead => write!(f, "input pin read failed"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Encode => write!(f, "config encode failed"),
            Self::Decode => write!(f, "config decode failed"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
