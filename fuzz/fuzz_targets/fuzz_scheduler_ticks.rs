//! Fuzz target: `ViewScheduler::tick`
//!
//! Drives the scheduler with arbitrary button edges, tilt samples, clock
//! jumps and weather outcomes, then verifies:
//! - No panics
//! - The LED always mirrors "routine picked and not done"
//! - The applied rotation never changes while the device lies flat
//!
//! cargo fuzz run fuzz_scheduler_ticks

#![no_main]

use libfuzzer_sys::fuzz_target;
use tableclock::app::events::AppEvent;
use tableclock::app::ports::{
    ButtonEdges, ClockPort, Color, DisplayPort, EventSink, FontId, IndicatorPort, LocalTime,
    RandomSource, SystemInfoPort, WeatherError, WeatherPort, WeatherReport,
};
use tableclock::app::scheduler::{TickInput, ViewScheduler};
use tableclock::config::ClockConfig;
use tableclock::orientation::{Acceleration, Rotation, FLAT_THRESHOLD_G};

#[derive(Default)]
struct NullHw {
    led: bool,
}

impl DisplayPort for NullHw {
    fn clear(&mut self, _color: Color) {}
    fn set_rotation(&mut self, _rotation: Rotation) {}
    fn set_font(&mut self, _font: FontId) {}
    fn set_color(&mut self, _fg: Color, _bg: Color) {}
    fn set_cursor(&mut self, _x: i32, _y: i32) {}
    fn print(&mut self, _text: &str) {}
    fn draw_line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32, _color: Color) {}
    fn fill_circle(&mut self, _x: i32, _y: i32, _radius: u32, _color: Color) {}
}

impl SystemInfoPort for NullHw {
    fn battery_voltage(&mut self) -> f32 {
        4.0
    }
    fn cpu_temperature_c(&mut self) -> f32 {
        40.0
    }
}

impl IndicatorPort for NullHw {
    fn set_indicator(&mut self, on: bool) {
        self.led = on;
    }
}

struct Clock(LocalTime);

impl ClockPort for Clock {
    fn monotonic_ms(&self) -> u64 {
        0
    }
    fn local_time(&self) -> LocalTime {
        self.0
    }
}

struct CoinWeather(bool);

impl WeatherPort for CoinWeather {
    fn fetch(&mut self, _query: &str) -> Result<WeatherReport, WeatherError> {
        if self.0 {
            Ok(WeatherReport {
                location: "Tokyo".into(),
                temperature_c: 20.0,
                humidity_pct: 50.0,
                pressure_hpa: 1013,
            })
        } else {
            Err(WeatherError::Transport)
        }
    }
}

struct ByteRng(u8);

impl RandomSource for ByteRng {
    fn next_index(&mut self, bound: usize) -> usize {
        usize::from(self.0) % bound
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut sched = ViewScheduler::new(&ClockConfig::default(), None, 0);
    let mut hw = NullHw::default();
    let mut clock = Clock(LocalTime {
        year: 2024,
        month: 1,
        day: 1,
        weekday: 1,
        hour: 0,
        minute: 0,
        second: 0,
    });
    let mut now_ms = 0u64;

    for chunk in data.chunks_exact(4) {
        let [flags, tilt, step, rnd] = [chunk[0], chunk[1], chunk[2], chunk[3]];
        now_ms += u64::from(step) * 100;
        clock.0.hour = (u32::from(step) * 7 % 24) as u8;
        clock.0.minute = step % 60;
        if flags & 0x80 != 0 {
            clock.0.day = clock.0.day % 28 + 1;
        }

        let accel = Acceleration::new(
            f32::from(tilt as i8) / 64.0,
            f32::from((tilt.rotate_left(3)) as i8) / 64.0,
            f32::from((tilt.rotate_left(5)) as i8) / 64.0,
        );
        let input = TickInput {
            edges: ButtonEdges {
                primary: flags & 1 != 0,
                secondary: flags & 2 != 0,
            },
            accel,
            now_ms,
        };

        let before = sched.last_rotation();
        let mut weather = CoinWeather(flags & 4 != 0);
        sched.tick(input, &mut hw, &clock, &mut weather, &mut ByteRng(rnd), &mut NullSink);

        assert_eq!(hw.led, sched.routine().indicator_on());
        if before.is_some() && accel.z.abs() >= FLAT_THRESHOLD_G {
            assert_eq!(sched.last_rotation(), before);
        }
    }
});
