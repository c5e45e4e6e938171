//! Red indicator LED on GPIO10 (active low).
//!
//! Lit while today's routine is pending.

use embedded_hal::digital::OutputPin;
use log::warn;

pub struct StatusLed<P> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> StatusLed<P> {
    /// Take the pin and switch the LED off.
    pub fn new(pin: P) -> Self {
        let mut led = Self { pin, on: true };
        led.set(false);
        led
    }

    pub fn set(&mut self, on: bool) {
        let res = if on { self.pin.set_low() } else { self.pin.set_high() };
        if res.is_err() {
            warn!("StatusLed: GPIO write failed");
            return;
        }
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
