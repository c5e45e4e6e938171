//! Debounced push-button driver.
//!
//! ## Hardware
//!
//! Both M5StickC buttons are active-low with external pull-ups (GPIO37 and
//! GPIO39 are input-only).  The main loop polls [`Button::poll`] once per
//! pass; a press is reported on the debounced falling edge only.

use embedded_hal::digital::InputPin;

/// Level changes closer together than this are treated as bounce.
const DEBOUNCE_MS: u64 = 10;

pub struct Button<P> {
    pin: P,
    pressed: bool,
    last_change_ms: Option<u64>,
}

impl<P: InputPin> Button<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            pressed: false,
            last_change_ms: None,
        }
    }

    /// Sample the pin.  Returns `true` exactly once per press.
    ///
    /// A pin read error counts as "released".
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let level_pressed = self.pin.is_low().unwrap_or(false);
        if level_pressed == self.pressed {
            return false;
        }

        if let Some(last) = self.last_change_ms {
            if now_ms.saturating_sub(last) < DEBOUNCE_MS {
                return false;
            }
        }

        self.pressed = level_pressed;
        self.last_change_ms = Some(now_ms);
        level_pressed
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
