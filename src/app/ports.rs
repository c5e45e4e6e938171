//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ViewScheduler (domain)
//! ```
//!
//! Driven adapters (LCD, clock, weather client, buttons, IMU, LED) implement
//! these traits.  The [`ViewScheduler`](super::scheduler::ViewScheduler)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use core::fmt;
use std::net::Ipv4Addr;

use crate::orientation::{Acceleration, Rotation};

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → LCD)
// ───────────────────────────────────────────────────────────────

/// Logical colours used by the views.  Adapters map them to panel colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Primary text (white).
    Foreground,
    /// Secondary text: labels, dates (cyan).
    Accent,
    /// Screen background (black).
    Background,
}

/// Fonts available on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontId {
    /// Default text font.
    Small,
    /// Large digits for the clock face.
    Digits,
}

/// Text-cursor style drawing surface.
///
/// Display I/O is assumed to always succeed; adapters swallow and log
/// bus errors themselves.
pub trait DisplayPort {
    /// Fill the whole screen with `color`.
    fn clear(&mut self, color: Color);

    /// Orient the panel.
    fn set_rotation(&mut self, rotation: Rotation);

    fn set_font(&mut self, font: FontId);

    /// Set text foreground and background colours.
    fn set_color(&mut self, fg: Color, bg: Color);

    fn set_cursor(&mut self, x: i32, y: i32);

    /// Print `text` at the cursor.  `\n` moves to the start of the next line.
    fn print(&mut self, text: &str);

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);

    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color);

    /// Print `text` followed by a line break.
    fn println(&mut self, text: &str) {
        self.print(text);
        self.print("\n");
    }
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC / SNTP → domain)
// ───────────────────────────────────────────────────────────────

/// A calendar day in local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarDate {
    pub year: u16,
    /// 1–12
    pub month: u8,
    /// 1–31
    pub day: u8,
}

/// Broken-down local wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalTime {
    pub year: u16,
    /// 1–12
    pub month: u8,
    /// 1–31
    pub day: u8,
    /// 0 = Sunday
    pub weekday: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl LocalTime {
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// `(hour, minute)` pair shown on the clock face.
    pub fn hour_minute(&self) -> (u8, u8) {
        (self.hour, self.minute)
    }
}

pub trait ClockPort {
    /// Monotonic milliseconds since boot.
    fn monotonic_ms(&self) -> u64;

    /// Current local time (after the one-time SNTP sync at boot).
    fn local_time(&self) -> LocalTime;
}

// ───────────────────────────────────────────────────────────────
// Weather port (driven adapter: HTTP → domain)
// ───────────────────────────────────────────────────────────────

/// The four fields the weather view needs from a remote report.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub pressure_hpa: i32,
}

/// Errors from [`WeatherPort::fetch`].  All of them are transient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherError {
    /// Server answered with a non-200 status.
    Status(u16),
    /// Payload was not the expected JSON shape.
    Parse,
    /// Connection, TLS or read failure before a status was seen.
    Transport,
}

pub trait WeatherPort {
    /// Fetch current conditions for `query` (e.g. "Tokyo,jp").  Blocking.
    fn fetch(&mut self, query: &str) -> Result<WeatherReport, WeatherError>;
}

// ───────────────────────────────────────────────────────────────
// Input ports (driven adapters: buttons, IMU → domain)
// ───────────────────────────────────────────────────────────────

/// Press edges observed since the previous poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonEdges {
    /// Button A (front face): cycles views.
    pub primary: bool,
    /// Button B (side): completes the routine.
    pub secondary: bool,
}

pub trait ButtonPort {
    /// Edge-triggered: each press is reported exactly once.
    fn poll_edges(&mut self) -> ButtonEdges;
}

pub trait OrientationPort {
    /// Latest acceleration in g.  Returns the last good sample on bus errors.
    fn read(&mut self) -> Acceleration;
}

// ───────────────────────────────────────────────────────────────
// Output / info ports
// ───────────────────────────────────────────────────────────────

/// Routine-pending LED.
pub trait IndicatorPort {
    fn set_indicator(&mut self, on: bool);
}

/// Board health figures shown on the System view.
pub trait SystemInfoPort {
    fn battery_voltage(&mut self) -> f32;
    fn cpu_temperature_c(&mut self) -> f32;
}

/// Randomness capability, injectable for deterministic tests.
pub trait RandomSource {
    /// Uniform value in `[0, bound)`.  `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

// ───────────────────────────────────────────────────────────────
// Network port (driven adapter: WiFi STA)
// ───────────────────────────────────────────────────────────────

/// Errors raised while starting association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityError {
    InvalidSsid,
    InvalidPassword,
    /// The radio driver refused to start or connect.
    DriverFailed,
}

pub trait NetworkPort {
    /// Configure credentials and start association (non-blocking).
    fn begin(&mut self, ssid: &str, password: &str) -> Result<(), ConnectivityError>;

    /// Whether the station is associated and has an address.
    fn is_connected(&mut self) -> bool;

    fn local_ip(&self) -> Option<Ipv4Addr>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl fmt::Display for WeatherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status(code) => write!(f, "HTTP status {}", code),
            Self::Parse => write!(f, "malformed weather payload"),
            Self::Transport => write!(f, "HTTP transport failure"),
        }
    }
}

impl fmt::Display for ConnectivityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSsid => write!(f, "SSID invalid (must be 1-32 printable ASCII bytes)"),
            Self::InvalidPassword => {
                write!(f, "password invalid (must be 8-64 bytes for WPA2, or empty for open)")
            }
            Self::DriverFailed => write!(f, "WiFi driver failed to start association"),
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for WeatherError {}
impl std::error::Error for ConnectivityError {}
