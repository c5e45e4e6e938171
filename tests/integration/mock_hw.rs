//! Mock adapters for integration tests.
//!
//! Records every display and indicator call so tests can assert on the
//! full command history without a panel attached.

use std::cell::Cell;
use std::collections::VecDeque;

use tableclock::app::events::AppEvent;
use tableclock::app::ports::{
    ClockPort, Color, DisplayPort, EventSink, FontId, IndicatorPort, LocalTime, RandomSource,
    SystemInfoPort, WeatherError, WeatherPort, WeatherReport,
};
use tableclock::orientation::Rotation;

// ── Display call record ───────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Clear(Color),
    Rotation(Rotation),
    Font(FontId),
    Color(Color, Color),
    Cursor(i32, i32),
    Print(String),
    Line,
    Circle,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<DisplayCall>,
    pub indicator: Vec<bool>,
    pub battery_v: f32,
    pub cpu_temp_c: f32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            indicator: Vec::new(),
            battery_v: 3.98,
            cpu_temp_c: 47.5,
        }
    }

    /// Calls since the most recent full-screen clear.
    pub fn screen(&self) -> &[DisplayCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DisplayCall::Clear(_)))
            .unwrap_or(0);
        &self.calls[start..]
    }

    /// Printed text on the current screen, newlines dropped.
    pub fn screen_text(&self) -> Vec<String> {
        self.screen()
            .iter()
            .filter_map(|c| match c {
                DisplayCall::Print(s) if s != "\n" => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn shows(&self, text: &str) -> bool {
        self.screen_text().iter().any(|s| s == text)
    }

    pub fn renders(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DisplayCall::Clear(_)))
            .count()
    }

    pub fn last_rotation(&self) -> Option<Rotation> {
        self.calls.iter().rev().find_map(|c| match c {
            DisplayCall::Rotation(r) => Some(*r),
            _ => None,
        })
    }

    pub fn indicator_on(&self) -> bool {
        self.indicator.last().copied().unwrap_or(false)
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockHardware {
    fn clear(&mut self, color: Color) {
        self.calls.push(DisplayCall::Clear(color));
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.calls.push(DisplayCall::Rotation(rotation));
    }

    fn set_font(&mut self, font: FontId) {
        self.calls.push(DisplayCall::Font(font));
    }

    fn set_color(&mut self, fg: Color, bg: Color) {
        self.calls.push(DisplayCall::Color(fg, bg));
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.calls.push(DisplayCall::Cursor(x, y));
    }

    fn print(&mut self, text: &str) {
        self.calls.push(DisplayCall::Print(text.to_string()));
    }

    fn draw_line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32, _color: Color) {
        self.calls.push(DisplayCall::Line);
    }

    fn fill_circle(&mut self, _x: i32, _y: i32, _radius: u32, _color: Color) {
        self.calls.push(DisplayCall::Circle);
    }
}

impl SystemInfoPort for MockHardware {
    fn battery_voltage(&mut self) -> f32 {
        self.battery_v
    }

    fn cpu_temperature_c(&mut self) -> f32 {
        self.cpu_temp_c
    }
}

impl IndicatorPort for MockHardware {
    fn set_indicator(&mut self, on: bool) {
        self.indicator.push(on);
    }
}

// ── FakeClock ─────────────────────────────────────────────────

/// Wall clock the test moves by hand.  Monotonic time travels in
/// [`TickInput`](tableclock::app::scheduler::TickInput) instead.
pub struct FakeClock {
    now: Cell<LocalTime>,
}

#[allow(dead_code)]
impl FakeClock {
    pub fn at(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            now: Cell::new(LocalTime {
                year,
                month,
                day,
                weekday: 0,
                hour,
                minute,
                second: 0,
            }),
        }
    }

    pub fn set(&self, day: u8, hour: u8, minute: u8) {
        let mut t = self.now.get();
        t.day = day;
        t.hour = hour;
        t.minute = minute;
        self.now.set(t);
    }
}

impl ClockPort for FakeClock {
    fn monotonic_ms(&self) -> u64 {
        0
    }

    fn local_time(&self) -> LocalTime {
        self.now.get()
    }
}

// ── ScriptedWeather ───────────────────────────────────────────

/// Answers from a queue, then falls back to a fixed good report.
pub struct ScriptedWeather {
    pub script: VecDeque<Result<WeatherReport, WeatherError>>,
    pub queries: Vec<String>,
}

#[allow(dead_code)]
impl ScriptedWeather {
    pub fn new() -> Self {
        Self {
            script: VecDeque::new(),
            queries: Vec::new(),
        }
    }

    pub fn failing_once(err: WeatherError) -> Self {
        let mut w = Self::new();
        w.script.push_back(Err(err));
        w
    }

    pub fn calls(&self) -> usize {
        self.queries.len()
    }

    pub fn report() -> WeatherReport {
        WeatherReport {
            location: "Tokyo".to_string(),
            temperature_c: 21.4,
            humidity_pct: 48.0,
            pressure_hpa: 1015,
        }
    }
}

impl WeatherPort for ScriptedWeather {
    fn fetch(&mut self, query: &str) -> Result<WeatherReport, WeatherError> {
        self.queries.push(query.to_string());
        self.script.pop_front().unwrap_or_else(|| Ok(Self::report()))
    }
}

// ── SequenceRng ───────────────────────────────────────────────

/// Yields the given indices in order, repeating the last one.
pub struct SequenceRng {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: &[usize]) -> Self {
        Self {
            values: values.to_vec(),
            pos: 0,
        }
    }
}

impl RandomSource for SequenceRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let v = self.values[self.pos.min(self.values.len() - 1)];
        self.pos += 1;
        v % bound
    }
}

// ── VecSink ───────────────────────────────────────────────────

#[derive(Default)]
pub struct VecSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl VecSink {
    pub fn count(&self, pred: impl Fn(&AppEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for VecSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
