//! View scheduler: the hexagonal core.
//!
//! [`ViewScheduler`] owns every piece of mutable runtime state: the active
//! view, the applied rotation, the routine picker and the weather cache.
//! One call to [`ViewScheduler::tick`] is one pass of the main loop.  All
//! I/O flows through port traits injected at the call site.
//!
//! ```text
//!  TickInput ──▶ ┌─────────────────────────┐ ──▶ DisplayPort
//!  ClockPort ──▶ │      ViewScheduler       │ ──▶ IndicatorPort
//! WeatherPort ──▶│ View · Rotation · Routine│ ──▶ EventSink
//!                └─────────────────────────┘
//! ```

use std::net::Ipv4Addr;

use log::{info, warn};

use crate::config::ClockConfig;
use crate::orientation::{self, Acceleration, Rotation};
use crate::routine::RoutinePicker;
use crate::views;
use crate::weather::WeatherCache;

use super::events::AppEvent;
use super::ports::{
    ButtonEdges, ClockPort, DisplayPort, EventSink, IndicatorPort, LocalTime, RandomSource,
    SystemInfoPort, WeatherPort,
};
use super::view::View;

/// Inputs sampled by the caller at the top of a loop pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub edges: ButtonEdges,
    pub accel: Acceleration,
    /// Monotonic milliseconds since boot.
    pub now_ms: u64,
}

/// Result of one [`ViewScheduler::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened and the poll interval has not elapsed.
    Idle,
    /// A full evaluation ran.
    Evaluated { rendered: bool },
}

/// Mutable scheduling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerState {
    pub current_view: View,
    /// Rotation last applied to the panel; `None` before the first render.
    pub last_rotation: Option<Rotation>,
    pub last_pass_ms: u64,
    /// Last time a non-Time view was rendered.
    pub last_non_time_view_ms: u64,
    /// `(hour, minute)` currently on the clock face.
    pub last_displayed_minute: Option<(u8, u8)>,
}

pub struct ViewScheduler {
    state: SchedulerState,
    routine: RoutinePicker,
    weather: WeatherCache,
    ip: Option<Ipv4Addr>,
    weather_location: String,
    poll_interval_ms: u64,
    view_timeout_ms: u64,
}

impl ViewScheduler {
    /// Build the scheduler.  `boot_ms` seeds the poll and timeout clocks.
    pub fn new(config: &ClockConfig, ip: Option<Ipv4Addr>, boot_ms: u64) -> Self {
        Self {
            state: SchedulerState {
                current_view: View::Time,
                last_rotation: None,
                last_pass_ms: boot_ms,
                last_non_time_view_ms: boot_ms,
                last_displayed_minute: None,
            },
            routine: RoutinePicker::new(config.routine_reset_hour),
            weather: WeatherCache::new(config.weather_refresh_interval_ms),
            ip,
            weather_location: config.weather_location.clone(),
            poll_interval_ms: u64::from(config.poll_interval_ms),
            view_timeout_ms: u64::from(config.view_timeout_ms),
        }
    }

    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.state.current_view));
        info!("ViewScheduler started in {:?}", self.state.current_view);
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one loop pass: inputs → view selection → render.
    ///
    /// `hw` satisfies the display, info and indicator ports at once so a
    /// single hardware adapter can be passed without a double borrow.
    pub fn tick(
        &mut self,
        input: TickInput,
        hw: &mut (impl DisplayPort + SystemInfoPort + IndicatorPort),
        clock: &impl ClockPort,
        weather: &mut impl WeatherPort,
        rng: &mut impl RandomSource,
        sink: &mut impl EventSink,
    ) -> TickOutcome {
        let now = input.now_ms;
        let mut update = false;

        // 1. Secondary button completes the routine, only on its own view.
        if input.edges.secondary && self.state.current_view == View::Routine && self.routine.complete() {
            hw.set_indicator(false);
            if let Some(index) = self.routine.state().selected {
                sink.emit(&AppEvent::RoutineCompleted { index });
            }
            update = true;
        }

        // 2. Primary button cycles views.
        if input.edges.primary {
            let from = self.state.current_view;
            let to = from.next();
            self.state.current_view = to;
            sink.emit(&AppEvent::ViewChanged { from, to });
            info!("View {:?} -> {:?}", from, to);
            update = true;
        }

        // 3. Rotation, suppressed while lying flat.
        let (rotation, should_apply) = orientation::resolve(input.accel, self.state.last_rotation);
        if should_apply && self.state.last_rotation != Some(rotation) {
            self.state.last_rotation = Some(rotation);
            sink.emit(&AppEvent::RotationChanged(rotation));
            update = true;
        }

        // 4. Idle non-Time views fall back to the clock face.
        if !update
            && self.state.current_view != View::Time
            && now.saturating_sub(self.state.last_non_time_view_ms) >= self.view_timeout_ms
        {
            let from = self.state.current_view;
            self.state.current_view = View::Time;
            sink.emit(&AppEvent::AutoReturned { from });
            info!("View {:?} timed out, back to Time", from);
            update = true;
        }

        // 5. Poll gate.
        if !update && now.saturating_sub(self.state.last_pass_ms) < self.poll_interval_ms {
            return TickOutcome::Idle;
        }
        self.state.last_pass_ms = now;

        // 6. Minute rollover on the clock face.
        let local = clock.local_time();
        if self.state.current_view == View::Time && self.state.last_displayed_minute != Some(local.hour_minute()) {
            update = true;
        }

        // 7. Daily routine reset.
        if self.routine.maybe_reset(local.date(), local.hour, rng) {
            hw.set_indicator(true);
            if let Some(index) = self.routine.state().selected {
                sink.emit(&AppEvent::RoutineReset { index });
            }
            if self.state.current_view == View::Routine {
                update = true;
            }
        }

        if update {
            self.render(now, &local, hw, weather, sink);
        }
        TickOutcome::Evaluated { rendered: update }
    }

    fn render(
        &mut self,
        now: u64,
        local: &LocalTime,
        hw: &mut (impl DisplayPort + SystemInfoPort),
        weather: &mut impl WeatherPort,
        sink: &mut impl EventSink,
    ) {
        let rotation = self.state.last_rotation.unwrap_or(Rotation::Portrait0);

        match self.state.current_view {
            View::Time => {
                views::time::render(hw, rotation, local);
                self.state.last_displayed_minute = Some(local.hour_minute());
            }
            View::System => {
                views::system::render(hw, rotation, self.ip);
                self.state.last_non_time_view_ms = now;
            }
            View::Weather => {
                let will_fetch = self.weather.is_stale(now);
                if will_fetch {
                    views::weather::render_gathering(hw, rotation);
                }
                match self.weather.refresh(now, weather, &self.weather_location) {
                    Ok(snapshot) => {
                        views::weather::render_snapshot(hw, rotation, snapshot);
                        if will_fetch {
                            sink.emit(&AppEvent::WeatherFetched {
                                location: snapshot.location.clone(),
                            });
                        }
                    }
                    Err(e) => {
                        warn!("Weather view: {}", e);
                        views::weather::render_error(hw, rotation);
                        sink.emit(&AppEvent::WeatherFetchFailed(e));
                    }
                }
                self.state.last_non_time_view_ms = now;
            }
            View::Routine => {
                views::routine::render(hw, rotation, &self.routine);
                self.state.last_non_time_view_ms = now;
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> &SchedulerState {
        &self.state
    }

    pub fn current_view(&self) -> View {
        self.state.current_view
    }

    pub fn last_rotation(&self) -> Option<Rotation> {
        self.state.last_rotation
    }

    pub fn routine(&self) -> &RoutinePicker {
        &self.routine
    }

    pub fn weather(&self) -> &WeatherCache {
        &self.weather
    }
}
