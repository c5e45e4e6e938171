//! Outbound application events.
//!
//! The [`ViewScheduler`](super::scheduler::ViewScheduler) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::app::ports::WeatherError;
use crate::app::view::View;
use crate::orientation::Rotation;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The scheduler has started (carries initial view).
    Started(View),

    /// The primary button moved to another view.
    ViewChanged { from: View, to: View },

    /// A non-Time view timed out and the clock face came back.
    AutoReturned { from: View },

    /// A stable new display orientation was applied.
    RotationChanged(Rotation),

    /// A new daily routine was picked.
    RoutineReset { index: usize },

    /// The user marked today's routine as done.
    RoutineCompleted { index: usize },

    /// Fresh weather data was cached.
    WeatherFetched { location: String },

    /// A weather fetch failed; the cache was left untouched.
    WeatherFetchFailed(WeatherError),
}
