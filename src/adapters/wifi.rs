//! WiFi station adapter.
//!
//! Implements [`NetworkPort`] over `EspWifi` in non-blocking mode: `begin`
//! configures and starts association, the bootstrap loop then polls
//! `is_connected` until DHCP has produced an address.
//!
//! On non-espidf targets a simulated station associates after a few polls.

use std::net::Ipv4Addr;

use log::info;

use crate::app::ports::{ConnectivityError, NetworkPort};

#[cfg(target_os = "espidf")]
use esp_idf_svc::wifi::{AuthMethod, ClientConfiguration, Configuration, EspWifi};
#[cfg(target_os = "espidf")]
use log::warn;

pub struct WifiNetwork {
    #[cfg(target_os = "espidf")]
    wifi: Box<EspWifi<'static>>,
    #[cfg(not(target_os = "espidf"))]
    sim_polls: u32,
    #[cfg(not(target_os = "espidf"))]
    sim_started: bool,
}

/// Simulated station associates on this poll.
#[cfg(not(target_os = "espidf"))]
const SIM_POLLS_TO_CONNECT: u32 = 3;

impl WifiNetwork {
    #[cfg(target_os = "espidf")]
    pub fn new(wifi: Box<EspWifi<'static>>) -> Self {
        Self { wifi }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self {
            sim_polls: 0,
            sim_started: false,
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for WifiNetwork {
    fn default() -> Self {
        Self::new()
    }
}

// ── NetworkPort (ESP-IDF) ─────────────────────────────────────

#[cfg(target_os = "espidf")]
impl NetworkPort for WifiNetwork {
    fn begin(&mut self, ssid: &str, password: &str) -> Result<(), ConnectivityError> {
        let auth_method = if password.is_empty() {
            AuthMethod::None
        } else {
            AuthMethod::WPA2Personal
        };

        let mut wifi_ssid = heapless::String::<32>::new();
        wifi_ssid.push_str(ssid).map_err(|_| ConnectivityError::InvalidSsid)?;
        let mut wifi_pass = heapless::String::<64>::new();
        wifi_pass
            .push_str(password)
            .map_err(|_| ConnectivityError::InvalidPassword)?;

        let config = Configuration::Client(ClientConfiguration {
            ssid: wifi_ssid,
            password: wifi_pass,
            auth_method,
            ..Default::default()
        });

        self.wifi.set_configuration(&config).map_err(|e| {
            warn!("WiFi: set_configuration failed: {}", e);
            ConnectivityError::DriverFailed
        })?;
        self.wifi.start().map_err(|e| {
            warn!("WiFi: start failed: {}", e);
            ConnectivityError::DriverFailed
        })?;
        self.wifi.connect().map_err(|e| {
            warn!("WiFi: connect failed: {}", e);
            ConnectivityError::DriverFailed
        })?;
        info!("WiFi: association started");
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.wifi.is_up().unwrap_or(false)
    }

    fn local_ip(&self) -> Option<Ipv4Addr> {
        let info = self.wifi.sta_netif().get_ip_info().ok()?;
        (!info.ip.is_unspecified()).then_some(info.ip)
    }
}

// ── NetworkPort (simulation) ──────────────────────────────────

#[cfg(not(target_os = "espidf"))]
impl NetworkPort for WifiNetwork {
    fn begin(&mut self, ssid: &str, _password: &str) -> Result<(), ConnectivityError> {
        info!("WiFi(sim): associating with '{}'", ssid);
        self.sim_started = true;
        self.sim_polls = 0;
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        if !self.sim_started {
            return false;
        }
        self.sim_polls = self.sim_polls.saturating_add(1);
        self.sim_polls >= SIM_POLLS_TO_CONNECT
    }

    fn local_ip(&self) -> Option<Ipv4Addr> {
        (self.sim_started && self.sim_polls >= SIM_POLLS_TO_CONNECT).then_some(Ipv4Addr::new(192, 168, 4, 2))
    }
}
