//! Peripheral drivers for the M5StickC board.
//!
//! Written against the `embedded-hal` 1.0 traits so they run unchanged on
//! the ESP-IDF HAL and on in-test fakes.

pub mod button;
pub mod imu;
pub mod lcd;
pub mod pmic;
pub mod status_led;

#[cfg(test)]
pub(crate) mod fake;
