//! Hardware adapter: bridges the M5StickC peripherals to domain port traits.
//!
//! Owns the LCD, IMU, PMIC, both buttons and the indicator LED and
//! exposes them through [`DisplayPort`], [`OrientationPort`],
//! [`ButtonPort`], [`IndicatorPort`] and [`SystemInfoPort`].  This is the
//! only module in the system that touches actual hardware.

use core::fmt::Debug;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use embedded_hal::digital::{InputPin, OutputPin};
use embedded_hal::i2c::I2c;
use log::warn;

use crate::app::ports::{
    ButtonEdges, ButtonPort, Color, DisplayPort, FontId, IndicatorPort, OrientationPort,
    SystemInfoPort,
};
use crate::drivers::button::Button;
use crate::drivers::imu::Mpu6886;
use crate::drivers::lcd::{GraphicsDisplay, PanelRotation};
use crate::drivers::pmic::Axp192;
use crate::drivers::status_led::StatusLed;
use crate::orientation::{Acceleration, Rotation};

/// Concrete adapter that combines all board hardware behind port traits.
///
/// `B` is an I²C handle shared by the IMU and PMIC (an `embedded-hal-bus`
/// device on target).
pub struct HardwareAdapter<D, B, P, L> {
    display: GraphicsDisplay<D>,
    imu: Mpu6886<B>,
    pmic: Axp192<B>,
    button_a: Button<P>,
    button_b: Button<P>,
    led: StatusLed<L>,
    uptime_ms: fn() -> u64,
    last_accel: Acceleration,
    last_battery_v: f32,
}

impl<D, B, P, L> HardwareAdapter<D, B, P, L>
where
    D: DrawTarget<Color = Rgb565> + PanelRotation,
    D::Error: Debug,
    B: I2c,
    P: InputPin,
    L: OutputPin,
{
    pub fn new(
        display: GraphicsDisplay<D>,
        imu: Mpu6886<B>,
        pmic: Axp192<B>,
        button_a: Button<P>,
        button_b: Button<P>,
        led: StatusLed<L>,
        uptime_ms: fn() -> u64,
    ) -> Self {
        Self {
            display,
            imu,
            pmic,
            button_a,
            button_b,
            led,
            uptime_ms,
            // Upright until the first good sample.
            last_accel: Acceleration::new(0.0, 1.0, 0.0),
            last_battery_v: 0.0,
        }
    }

    pub fn set_backlight(&mut self, brightness: u8) {
        if let Err(e) = self.pmic.set_backlight(brightness) {
            warn!("PMIC: backlight write failed: {:?}", e);
        }
    }

    pub fn display(&self) -> &GraphicsDisplay<D> {
        &self.display
    }

    pub fn indicator_on(&self) -> bool {
        self.led.is_on()
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<D, B, P, L> DisplayPort for HardwareAdapter<D, B, P, L>
where
    D: DrawTarget<Color = Rgb565> + PanelRotation,
    D::Error: Debug,
{
    fn clear(&mut self, color: Color) {
        self.display.clear(color);
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.display.set_rotation(rotation);
    }

    fn set_font(&mut self, font: FontId) {
        self.display.set_font(font);
    }

    fn set_color(&mut self, fg: Color, bg: Color) {
        self.display.set_color(fg, bg);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.display.set_cursor(x, y);
    }

    fn print(&mut self, text: &str) {
        self.display.print(text);
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        self.display.draw_line(x0, y0, x1, y1, color);
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color) {
        self.display.fill_circle(x, y, radius, color);
    }
}

// ── Input ports ───────────────────────────────────────────────

impl<D, B, P, L> ButtonPort for HardwareAdapter<D, B, P, L>
where
    P: InputPin,
{
    fn poll_edges(&mut self) -> ButtonEdges {
        let now = (self.uptime_ms)();
        ButtonEdges {
            primary: self.button_a.poll(now),
            secondary: self.button_b.poll(now),
        }
    }
}

impl<D, B, P, L> OrientationPort for HardwareAdapter<D, B, P, L>
where
    B: I2c,
{
    fn read(&mut self) -> Acceleration {
        match self.imu.read_accel() {
            Ok(a) => {
                self.last_accel = a;
                a
            }
            Err(e) => {
                warn!("IMU: read failed ({:?}), using last sample", e);
                self.last_accel
            }
        }
    }
}

// ── Output / info ports ───────────────────────────────────────

impl<D, B, P, L> IndicatorPort for HardwareAdapter<D, B, P, L>
where
    L: OutputPin,
{
    fn set_indicator(&mut self, on: bool) {
        self.led.set(on);
    }
}

impl<D, B, P, L> SystemInfoPort for HardwareAdapter<D, B, P, L>
where
    B: I2c,
{
    fn battery_voltage(&mut self) -> f32 {
        match self.pmic.battery_voltage() {
            Ok(v) => {
                self.last_battery_v = v;
                v
            }
            Err(e) => {
                warn!("PMIC: battery read failed: {:?}", e);
                self.last_battery_v
            }
        }
    }

    fn cpu_temperature_c(&mut self) -> f32 {
        cpu_temperature_c()
    }
}

// ── On-die temperature ────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe extern "C" {
    /// ESP32 ROM routine; returns degrees Fahrenheit.
    fn temprature_sens_read() -> u8;
}

#[cfg(target_os = "espidf")]
fn cpu_temperature_c() -> f32 {
    // SAFETY: ROM function without preconditions.
    let fahrenheit = unsafe { temprature_sens_read() };
    (f32::from(fahrenheit) - 32.0) / 1.8
}

/// Simulation: a plausible idle die temperature.
#[cfg(not(target_os = "espidf"))]
fn cpu_temperature_c() -> f32 {
    45.0
}
