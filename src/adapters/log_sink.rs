//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (UART in production).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::routine::ROUTINE_MENU;

/// Adapter that logs every [`AppEvent`] to the serial console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

fn routine_label(index: usize) -> &'static str {
    ROUTINE_MENU.get(index).copied().unwrap_or("?")
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(view) => {
                info!("START | view={:?}", view);
            }
            AppEvent::ViewChanged { from, to } => {
                info!("VIEW | {:?} -> {:?}", from, to);
            }
            AppEvent::AutoReturned { from } => {
                info!("VIEW | {:?} -> Time (timeout)", from);
            }
            AppEvent::RotationChanged(rotation) => {
                info!("ROTATE | rotation={}", rotation.quarter_turns());
            }
            AppEvent::RoutineReset { index } => {
                info!("ROUTINE | reset index={} label='{}'", index, routine_label(*index));
            }
            AppEvent::RoutineCompleted { index } => {
                info!("ROUTINE | done index={} label='{}'", index, routine_label(*index));
            }
            AppEvent::WeatherFetched { location } => {
                info!("WEATHER | fetched location='{}'", location);
            }
            AppEvent::WeatherFetchFailed(e) => {
                warn!("WEATHER | failed error='{}'", e);
            }
        }
    }
}
