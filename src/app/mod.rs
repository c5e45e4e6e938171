//! Application core: pure domain logic, zero I/O.
//!
//! This module holds the TableClock rules: view cycling, auto-return,
//! rotation stability, the daily routine and the weather cache policy.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod bootstrap;
pub mod events;
pub mod ports;
pub mod scheduler;
pub mod view;
