//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the button driver
//! against mock adapters.  All tests run on the host with no real
//! hardware required.

mod button_driver_tests;
mod mock_hw;
