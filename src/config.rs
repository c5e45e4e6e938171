//! System configuration parameters
//!
//! All tunable parameters for the TableClock firmware.
//! Secrets default from build-time environment variables so they never
//! have to be committed to the source tree.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    // --- Network ---
    /// WiFi access point SSID
    pub wifi_ssid: String,
    /// WiFi access point password (empty for open networks)
    pub wifi_password: String,
    /// Delay between association polls (milliseconds)
    pub wifi_retry_interval_ms: u32,
    /// Give up on association after this long; `None` retries forever
    pub wifi_connect_timeout_ms: Option<u32>,

    // --- Weather ---
    /// OpenWeatherMap API key
    pub weather_api_key: String,
    /// OpenWeatherMap location query (e.g. "Tokyo,jp")
    pub weather_location: String,
    /// Minimum interval between two weather fetches (milliseconds)
    pub weather_refresh_interval_ms: u32,

    // --- Time ---
    /// POSIX TZ string applied before SNTP sync
    pub timezone: String,
    /// SNTP servers, primary first
    pub ntp_servers: [String; 2],

    // --- Display ---
    /// Backlight brightness (0-255)
    pub lcd_brightness: u8,

    // --- Scheduling ---
    /// Minimum time between two scheduling passes when nothing happens (milliseconds)
    pub poll_interval_ms: u32,
    /// How long a non-Time view stays up before returning to Time (milliseconds)
    pub view_timeout_ms: u32,
    /// Hour of day (0-23) at which a new routine is picked
    pub routine_reset_hour: u8,
    /// Loop delay after an idle pass (milliseconds)
    pub idle_delay_ms: u32,
    /// Loop delay after a full pass (milliseconds)
    pub active_delay_ms: u32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            // Network
            wifi_ssid: option_env!("TABLECLOCK_WIFI_SSID").unwrap_or("").to_string(),
            wifi_password: option_env!("TABLECLOCK_WIFI_PASS").unwrap_or("").to_string(),
            wifi_retry_interval_ms: 1000,
            wifi_connect_timeout_ms: None,

            // Weather
            weather_api_key: option_env!("TABLECLOCK_OWM_API_KEY").unwrap_or("").to_string(),
            weather_location: option_env!("TABLECLOCK_OWM_LOCATION")
                .unwrap_or("Tokyo,jp")
                .to_string(),
            weather_refresh_interval_ms: 10 * 60 * 1000, // 10 min

            // Time
            timezone: "JST-9".to_string(),
            ntp_servers: ["ntp.nict.jp".to_string(), "ntp.jst.mfeed.ad.jp".to_string()],

            // Display
            lcd_brightness: 64,

            // Scheduling
            poll_interval_ms: 5000,
            view_timeout_ms: 10_000,
            routine_reset_hour: 5,
            idle_delay_ms: 100,
            active_delay_ms: 1,
        }
    }
}

impl ClockConfig {
    /// Reject values that would stall or confuse the scheduler.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.routine_reset_hour > 23 {
            return Err(ConfigError::ValidationFailed("routine_reset_hour must be 0-23"));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("poll_interval_ms must be > 0"));
        }
        if self.view_timeout_ms == 0 {
            return Err(ConfigError::ValidationFailed("view_timeout_ms must be > 0"));
        }
        if self.weather_refresh_interval_ms < 60_000 {
            return Err(ConfigError::ValidationFailed(
                "weather_refresh_interval_ms must be at least one minute",
            ));
        }
        if self.wifi_retry_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("wifi_retry_interval_ms must be > 0"));
        }
        if self.weather_location.is_empty() {
            return Err(ConfigError::ValidationFailed("weather_location is empty"));
        }
        Ok(())
    }
}
