//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter    | Implements    | Connects to                     |
//! |------------|---------------|---------------------------------|
//! | `log_sink` | GestureSink   | Serial log output               |
//! | `time`     | Clock         | ESP32 system timer / host clock |

pub mod log_sink;
pub mod time;
