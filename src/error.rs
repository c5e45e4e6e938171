//! Unified error type for the TableClock firmware.
//!
//! Every subsystem error converts into [`Error`], so `main` can report
//! boot failures uniformly.  All variants are `Copy`.

use core::fmt;

use crate::app::bootstrap::BootstrapError;
use crate::app::ports::ConfigError;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration failed validation.
    Config(ConfigError),
    /// Network bring-up failed or timed out.
    Bootstrap(BootstrapError),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Bootstrap(e) => write!(f, "bootstrap: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<BootstrapError> for Error {
    fn from(e: BootstrapError) -> Self {
        Self::Bootstrap(e)
    }
}
