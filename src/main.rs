//! Gesture-button firmware: main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  PinDriver (GPIO0, pull-up)   SystemClock (esp_timer)    │
//! │            │                        │                    │
//! │            ▼                        ▼                    │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  ButtonDriver ─▶ GestureFsm (pure logic)           │  │
//! │  └───────────────────────┬────────────────────────────┘  │
//! │                          ▼                               │
//! │                   LogGestureSink                         │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::gpio::{PinDriver, Pull};
use esp_idf_svc::hal::peripherals::Peripherals;
use log::{info, warn};

use gesture_button::adapters::log_sink::LogGestureSink;
use gesture_button::adapters::time::SystemClock;
use gesture_button::config::GestureConfig;
use gesture_button::drivers::button::ButtonDriver;

const BUTTON_NAME: &str = "boot";

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;
    info!("gesture-button v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Button input ───────────────────────────────────────
    let peripherals = Peripherals::take()?;
    let mut pin = PinDriver::input(peripherals.pins.gpio0)?;
    pin.set_pull(Pull::Up)?;

    let config = GestureConfig {
        multi_click: true,
        ..GestureConfig::default()
    };
    config.validate()?;

    // The button must be at rest during boot for polarity detection.
    let mut button =
        ButtonDriver::with_idle_polarity(BUTTON_NAME, pin, SystemClock::new(), config)?;
    let mut sink = LogGestureSink::new(BUTTON_NAME);
    let poll_ms = button.fsm().config().poll_interval_ms();
    info!(
        "{}: polarity {:?}, polling every {}ms",
        BUTTON_NAME,
        button.fsm().config().polarity,
        poll_ms
    );

    // ── 3. Control loop ───────────────────────────────────────
    loop {
        if let Err(e) = button.poll(&mut sink) {
            warn!("{}: poll failed: {}", BUTTON_NAME, e);
        }
        FreeRtos::delay_ms(poll_ms);
    }
}
