//! Network bootstrap: join the access point before anything else runs.
//!
//! The clock is useless without SNTP and weather, so by default the device
//! keeps retrying forever.  A bounded [`RetryPolicy`] turns that into
//! [`BootstrapError::Timeout`].

use core::fmt;
use std::net::Ipv4Addr;

use log::info;

use crate::config::ClockConfig;

use super::ports::{ConnectivityError, NetworkPort};

/// How association is polled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retry_interval_ms: u32,
    /// `None` retries forever.
    pub timeout_ms: Option<u32>,
}

impl RetryPolicy {
    pub fn from_config(config: &ClockConfig) -> Self {
        Self {
            retry_interval_ms: config.wifi_retry_interval_ms,
            timeout_ms: config.wifi_connect_timeout_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapError {
    Connectivity(ConnectivityError),
    /// Not associated within the policy budget.
    Timeout { waited_ms: u32 },
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connectivity(e) => write!(f, "connectivity: {}", e),
            Self::Timeout { waited_ms } => write!(f, "not connected after {} ms", waited_ms),
        }
    }
}

impl std::error::Error for BootstrapError {}

impl From<ConnectivityError> for BootstrapError {
    fn from(e: ConnectivityError) -> Self {
        Self::Connectivity(e)
    }
}

fn is_printable_ascii(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}

/// SSID: 1-32 printable ASCII bytes.
pub fn validate_ssid(ssid: &str) -> Result<(), ConnectivityError> {
    if ssid.is_empty() || ssid.len() > 32 || !is_printable_ascii(ssid) {
        return Err(ConnectivityError::InvalidSsid);
    }
    Ok(())
}

/// Password: empty (open network) or 8-64 bytes (WPA2).
pub fn validate_password(password: &str) -> Result<(), ConnectivityError> {
    if password.is_empty() {
        return Ok(());
    }
    if password.len() < 8 || password.len() > 64 {
        return Err(ConnectivityError::InvalidPassword);
    }
    Ok(())
}

/// Start association and block until the station has an address.
///
/// `delay` sleeps for the given number of milliseconds between polls.
pub fn bootstrap(
    net: &mut impl NetworkPort,
    ssid: &str,
    password: &str,
    policy: RetryPolicy,
    delay: &mut impl FnMut(u32),
) -> Result<Ipv4Addr, BootstrapError> {
    validate_ssid(ssid)?;
    validate_password(password)?;

    info!("WiFi: connecting to '{}'", ssid);
    net.begin(ssid, password)?;

    let mut waited_ms: u32 = 0;
    let mut attempts: u32 = 0;
    loop {
        if net.is_connected() {
            if let Some(ip) = net.local_ip() {
                info!("WiFi: connected, IP {} ({} polls)", ip, attempts);
                return Ok(ip);
            }
        }

        if let Some(limit) = policy.timeout_ms {
            if waited_ms >= limit {
                return Err(BootstrapError::Timeout { waited_ms });
            }
        }

        attempts += 1;
        if attempts % 10 == 0 {
            info!("WiFi: still waiting for '{}' ({} ms)", ssid, waited_ms);
        }
        delay(policy.retry_interval_ms);
        waited_ms = waited_ms.saturating_add(policy.retry_interval_ms);
    }
}
