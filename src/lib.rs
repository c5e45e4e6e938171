//! TableClock firmware library.
//!
//! Exposes the pure-logic modules for integration testing and the device
//! binary.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod orientation;
pub mod pins;
pub mod routine;
pub mod views;
pub mod weather;

pub mod adapters;
pub mod drivers;
