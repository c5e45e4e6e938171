//! End-to-end scheduler behaviour over mock adapters.

use std::net::Ipv4Addr;

use tableclock::app::events::AppEvent;
use tableclock::app::ports::{ButtonEdges, WeatherError};
use tableclock::app::scheduler::{TickInput, TickOutcome, ViewScheduler};
use tableclock::app::view::View;
use tableclock::config::ClockConfig;
use tableclock::orientation::{Acceleration, Rotation};

use crate::mock_hw::{FakeClock, MockHardware, ScriptedWeather, SequenceRng, VecSink};

const UPRIGHT: Acceleration = Acceleration::new(0.0, 1.0, 0.0);

struct Harness {
    sched: ViewScheduler,
    hw: MockHardware,
    clock: FakeClock,
    weather: ScriptedWeather,
    rng: SequenceRng,
    sink: VecSink,
}

impl Harness {
    fn new(clock: FakeClock) -> Self {
        Self::with_weather(clock, ScriptedWeather::new())
    }

    fn with_weather(clock: FakeClock, weather: ScriptedWeather) -> Self {
        let config = ClockConfig::default();
        let mut sink = VecSink::default();
        let mut sched = ViewScheduler::new(&config, Some(Ipv4Addr::new(192, 168, 4, 2)), 0);
        sched.start(&mut sink);
        Self {
            sched,
            hw: MockHardware::new(),
            clock,
            weather,
            rng: SequenceRng::new(&[2, 6]),
            sink,
        }
    }

    fn run(&mut self, input: TickInput) -> TickOutcome {
        self.sched.tick(
            input,
            &mut self.hw,
            &self.clock,
            &mut self.weather,
            &mut self.rng,
            &mut self.sink,
        )
    }

    fn idle(&mut self, now_ms: u64) -> TickOutcome {
        self.run(TickInput {
            edges: ButtonEdges::default(),
            accel: UPRIGHT,
            now_ms,
        })
    }

    fn press_a(&mut self, now_ms: u64) -> TickOutcome {
        self.run(TickInput {
            edges: ButtonEdges {
                primary: true,
                secondary: false,
            },
            accel: UPRIGHT,
            now_ms,
        })
    }

    fn press_b(&mut self, now_ms: u64) -> TickOutcome {
        self.run(TickInput {
            edges: ButtonEdges {
                primary: false,
                secondary: true,
            },
            accel: UPRIGHT,
            now_ms,
        })
    }

    fn tilt(&mut self, accel: Acceleration, now_ms: u64) -> TickOutcome {
        self.run(TickInput {
            edges: ButtonEdges::default(),
            accel,
            now_ms,
        })
    }
}

fn morning() -> FakeClock {
    FakeClock::at(2024, 4, 1, 9, 5)
}

#[test]
fn boot_shows_clock_face_then_idles() {
    let mut h = Harness::new(morning());
    assert_eq!(h.sink.events, vec![AppEvent::Started(View::Time)]);

    assert_eq!(h.idle(0), TickOutcome::Evaluated { rendered: true });
    assert_eq!(h.hw.last_rotation(), Some(Rotation::Portrait0));
    assert_eq!(h.hw.screen_text(), vec!["09", "05", "04", "01"]);

    assert_eq!(h.idle(1_000), TickOutcome::Idle);
    assert_eq!(h.hw.renders(), 1);
}

#[test]
fn minute_rollover_waits_for_poll_gate() {
    let mut h = Harness::new(morning());
    h.idle(0);
    h.clock.set(1, 9, 6);

    assert_eq!(h.idle(1_000), TickOutcome::Idle);
    assert_eq!(h.idle(5_000), TickOutcome::Evaluated { rendered: true });
    assert!(h.hw.shows("06"));
    assert_eq!(h.sched.state().last_displayed_minute, Some((9, 6)));
}

#[test]
fn four_presses_cycle_back_to_time() {
    let mut h = Harness::new(morning());
    h.idle(0);

    let mut seen = Vec::new();
    for i in 1..=4 {
        h.press_a(i * 100);
        seen.push(h.sched.current_view());
    }
    assert_eq!(seen, vec![View::System, View::Weather, View::Routine, View::Time]);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::ViewChanged { .. })), 4);
}

#[test]
fn system_view_shows_board_health() {
    let mut h = Harness::new(morning());
    h.idle(0);
    h.press_a(100);

    assert!(h.hw.shows("192.168.4.2"));
    assert!(h.hw.shows("3.98 V"));
    assert!(h.hw.shows("47.50 C"));
}

#[test]
fn auto_return_fires_exactly_once() {
    let mut h = Harness::new(morning());
    h.idle(0);
    h.press_a(1_000);
    assert_eq!(h.sched.current_view(), View::System);

    assert_eq!(h.idle(10_999), TickOutcome::Evaluated { rendered: false });
    assert_eq!(h.sched.current_view(), View::System);

    assert_eq!(h.idle(11_000), TickOutcome::Evaluated { rendered: true });
    assert_eq!(h.sched.current_view(), View::Time);
    assert!(h.hw.shows("09"));

    for t in [20_000, 40_000, 60_000] {
        h.idle(t);
    }
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::AutoReturned { .. })), 1);
}

#[test]
fn failed_weather_view_times_out_once() {
    let mut h = Harness::with_weather(morning(), ScriptedWeather::failing_once(WeatherError::Status(401)));
    h.idle(0);
    h.press_a(100);
    h.press_a(200);
    assert!(h.hw.shows("Weather error"));

    assert_eq!(h.idle(10_199), TickOutcome::Evaluated { rendered: false });
    assert_eq!(h.sched.current_view(), View::Weather);

    assert_eq!(h.idle(10_200), TickOutcome::Evaluated { rendered: true });
    assert_eq!(h.sched.current_view(), View::Time);

    for t in [20_000, 40_000] {
        h.idle(t);
    }
    assert_eq!(
        h.sink.events.iter().filter(|e| **e == AppEvent::AutoReturned { from: View::Weather }).count(),
        1
    );
    // The clock face never triggers a fetch.
    assert_eq!(h.weather.calls(), 1);
}

#[test]
fn routine_view_times_out_once() {
    let mut h = Harness::new(morning());
    h.idle(0);
    for t in [100, 200, 300] {
        h.press_a(t);
    }
    assert_eq!(h.sched.current_view(), View::Routine);

    assert_eq!(h.idle(10_299), TickOutcome::Evaluated { rendered: false });
    assert_eq!(h.idle(10_300), TickOutcome::Evaluated { rendered: true });
    assert_eq!(h.sched.current_view(), View::Time);

    h.idle(30_000);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::AutoReturned { .. })), 1);
    assert!(h.sink.events.contains(&AppEvent::AutoReturned { from: View::Routine }));
}

#[test]
fn weather_gathering_shown_only_when_fetching() {
    let mut h = Harness::new(morning());
    h.idle(0);
    h.press_a(100);
    h.press_a(200);
    assert!(h.hw.shows("Tokyo"));
    assert!(h.hw.shows("1015 hPa"));
    assert!(h.hw.shows("48.0 %"));

    // Around the cycle and back within the refresh interval.
    for t in [300, 400, 500, 600] {
        h.press_a(t);
    }
    assert_eq!(h.sched.current_view(), View::Weather);
    assert_eq!(h.weather.calls(), 1);

    let gathering = h
        .hw
        .calls
        .iter()
        .filter(|c| matches!(c, crate::mock_hw::DisplayCall::Print(s) if s == "Gathering weather..."))
        .count();
    assert_eq!(gathering, 1);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::WeatherFetched { .. })), 1);
}

#[test]
fn weather_failure_retries_on_next_visit() {
    let mut h = Harness::with_weather(morning(), ScriptedWeather::failing_once(WeatherError::Transport));
    h.idle(0);
    h.press_a(100);
    h.press_a(200);
    assert!(h.hw.shows("Weather error"));
    assert!(h.sched.weather().snapshot().is_none());
    assert!(
        h.sink
            .events
            .contains(&AppEvent::WeatherFetchFailed(WeatherError::Transport))
    );

    for t in [300, 400, 500, 600] {
        h.press_a(t);
    }
    assert_eq!(h.weather.calls(), 2);
    assert!(h.hw.shows("Tokyo"));
    assert_eq!(h.sched.weather().snapshot().map(|s| s.fetched_at_ms), Some(600));
    assert_eq!(h.weather.queries[0], "Tokyo,jp");
}

#[test]
fn routine_day_lifecycle() {
    let mut h = Harness::new(FakeClock::at(2024, 4, 1, 4, 59));
    h.idle(0);
    assert!(h.hw.indicator.is_empty());

    for t in [10, 20, 30] {
        h.press_a(t);
    }
    assert_eq!(h.sched.current_view(), View::Routine);
    assert!(h.hw.shows("Not started"));

    // Reset hour arrives while the Routine view is up.
    h.clock.set(1, 5, 0);
    assert_eq!(h.idle(5_030), TickOutcome::Evaluated { rendered: true });
    assert!(h.hw.indicator_on());
    assert!(h.hw.shows("Pending"));
    assert!(h.hw.shows("Squats x10"));
    assert!(h.sink.events.contains(&AppEvent::RoutineReset { index: 2 }));

    h.press_b(5_040);
    assert!(!h.hw.indicator_on());
    assert!(h.hw.shows("Done"));

    // Already done: nothing to do, nothing to draw.
    assert_eq!(h.press_b(5_050), TickOutcome::Idle);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::RoutineCompleted { .. })), 1);

    // Same day, same hour: no second pick.
    h.idle(10_100);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::RoutineReset { .. })), 1);

    // Next morning.
    h.clock.set(2, 5, 0);
    h.idle(100_000);
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::RoutineReset { .. })), 2);
    assert_eq!(h.sched.routine().label(), Some("Rest day"));
    assert!(h.hw.indicator_on());
}

#[test]
fn rotation_follows_gravity_but_not_when_flat() {
    let mut h = Harness::new(morning());
    h.idle(0);

    assert_eq!(
        h.tilt(Acceleration::new(1.0, 0.0, 0.0), 100),
        TickOutcome::Evaluated { rendered: true }
    );
    assert_eq!(h.hw.last_rotation(), Some(Rotation::Landscape1));
    assert!(h.sink.events.contains(&AppEvent::RotationChanged(Rotation::Landscape1)));

    // Lying flat, slightly tipped the other way.
    assert_eq!(h.tilt(Acceleration::new(-0.2, 0.0, 0.98), 200), TickOutcome::Idle);
    assert_eq!(h.sched.last_rotation(), Some(Rotation::Landscape1));

    h.tilt(Acceleration::new(0.0, -1.0, 0.0), 300);
    assert_eq!(h.hw.last_rotation(), Some(Rotation::Portrait2));
    assert_eq!(h.sink.count(|e| matches!(e, AppEvent::RotationChanged(_))), 3);
}
