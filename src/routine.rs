//! Daily exercise routine selection.
//!
//! Once per calendar day, during the configured reset hour, a routine is
//! picked at random from [`ROUTINE_MENU`].  The state lives in RAM only: a
//! day whose reset hour passes while the device is off is skipped until the
//! next matching hour.

use log::info;

use crate::app::ports::{CalendarDate, RandomSource};

/// Routine menu.  The last entry is the rest day.
pub const ROUTINE_MENU: [&str; 7] = [
    "Knee push-ups x10",
    "Reverse push-ups x10",
    "Squats x10",
    "Lunges x10",
    "Bicycle crunches x10",
    "Leg raises x10",
    "Rest day",
];

/// Number of entries in [`ROUTINE_MENU`].
pub const ROUTINE_COUNT: usize = ROUTINE_MENU.len();

/// Selection state for today's routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineState {
    /// Index into [`ROUTINE_MENU`]; `None` until the first reset ever.
    pub selected: Option<usize>,
    /// Whether today's routine has been completed.
    pub done: bool,
    /// Day of the last reset.
    pub last_reset: Option<CalendarDate>,
}

impl Default for RoutineState {
    fn default() -> Self {
        Self {
            selected: None,
            done: true,
            last_reset: None,
        }
    }
}

/// Owns [`RoutineState`] and applies the daily reset / completion rules.
#[derive(Debug, Clone)]
pub struct RoutinePicker {
    state: RoutineState,
    reset_hour: u8,
}

impl RoutinePicker {
    pub fn new(reset_hour: u8) -> Self {
        Self {
            state: RoutineState::default(),
            reset_hour,
        }
    }

    /// Pick a new routine if it is the reset hour and today has not been
    /// reset yet.  Returns `true` when a new routine was picked.
    pub fn maybe_reset(&mut self, today: CalendarDate, hour: u8, rng: &mut impl RandomSource) -> bool {
        if self.state.last_reset == Some(today) || hour != self.reset_hour {
            return false;
        }

        let index = rng.next_index(ROUTINE_COUNT).min(ROUTINE_COUNT - 1);
        self.state = RoutineState {
            selected: Some(index),
            done: false,
            last_reset: Some(today),
        };
        info!(
            "Routine: reset for {}-{:02}-{:02} -> '{}'",
            today.year, today.month, today.day, ROUTINE_MENU[index]
        );
        true
    }

    /// Mark today's routine as done.  Returns `false` (and changes
    /// nothing) if no routine was ever picked or it is already done.
    pub fn complete(&mut self) -> bool {
        match self.state.selected {
            Some(index) if !self.state.done => {
                self.state.done = true;
                info!("Routine: '{}' completed", ROUTINE_MENU[index]);
                true
            }
            _ => false,
        }
    }

    /// LED state: on while a picked routine is pending.
    pub fn indicator_on(&self) -> bool {
        self.state.selected.is_some() && !self.state.done
    }

    pub fn state(&self) -> &RoutineState {
        &self.state
    }

    /// Label of the selected routine, if any.
    pub fn label(&self) -> Option<&'static str> {
        self.state.selected.map(|i| ROUTINE_MENU[i])
    }
}
