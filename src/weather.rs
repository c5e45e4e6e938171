//! Cached current-weather snapshot.
//!
//! The cache is refreshed lazily on Weather-view visits, never more often
//! than the configured interval.  Failed fetches leave the cache (and its
//! timestamp) untouched, so the next visit retries straight away.

use log::{info, warn};
use serde::Deserialize;

use crate::app::ports::{WeatherError, WeatherPort, WeatherReport};

const OWM_CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Last successfully fetched report plus its fetch time.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    pub temperature_c: f32,
    pub humidity_pct: f32,
    pub pressure_hpa: i32,
    /// Monotonic time of the fetch (milliseconds since boot).
    pub fetched_at_ms: u64,
}

impl WeatherSnapshot {
    fn from_report(report: WeatherReport, fetched_at_ms: u64) -> Self {
        Self {
            location: report.location,
            temperature_c: report.temperature_c,
            humidity_pct: report.humidity_pct,
            pressure_hpa: report.pressure_hpa,
            fetched_at_ms,
        }
    }
}

/// Rate-limited holder of the latest [`WeatherSnapshot`].
#[derive(Debug, Clone)]
pub struct WeatherCache {
    snapshot: Option<WeatherSnapshot>,
    refresh_interval_ms: u64,
}

impl WeatherCache {
    pub fn new(refresh_interval_ms: u32) -> Self {
        Self {
            snapshot: None,
            refresh_interval_ms: refresh_interval_ms as u64,
        }
    }

    /// True if there is no snapshot or it is older than the interval.
    pub fn is_stale(&self, now_ms: u64) -> bool {
        match &self.snapshot {
            None => true,
            Some(s) => now_ms.saturating_sub(s.fetched_at_ms) >= self.refresh_interval_ms,
        }
    }

    /// Fetch through `client` if stale, then return the current snapshot.
    pub fn refresh(
        &mut self,
        now_ms: u64,
        client: &mut impl WeatherPort,
        query: &str,
    ) -> Result<&WeatherSnapshot, WeatherError> {
        if self.is_stale(now_ms) {
            match client.fetch(query) {
                Ok(report) => {
                    info!(
                        "Weather: fetched '{}' {:.1}C {:.0}% {}hPa",
                        report.location, report.temperature_c, report.humidity_pct, report.pressure_hpa
                    );
                    self.snapshot = Some(WeatherSnapshot::from_report(report, now_ms));
                }
                Err(e) => {
                    warn!("Weather: fetch failed ({}), keeping cached snapshot", e);
                    return Err(e);
                }
            }
        }
        // A fresh cache always holds a snapshot.
        self.snapshot.as_ref().ok_or(WeatherError::Parse)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }
}

// ── OpenWeatherMap payload ──────────────────────────────────────────

#[derive(Deserialize)]
struct OwmCurrentRoot {
    name: Option<String>,
    main: Option<OwmMain>,
}

#[derive(Deserialize)]
struct OwmMain {
    temp: Option<f64>,
    humidity: Option<f64>,
    pressure: Option<f64>,
}

/// Current-weather request URL for `location`.
pub fn weather_url(location: &str, api_key: &str) -> String {
    let query = encode_query_value(location);
    format!("{OWM_CURRENT_URL}?units=metric&q={query}&appid={api_key}")
}

/// Percent-encode a query value.  Commas stay literal; OpenWeatherMap uses
/// them to separate city and country.
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b',' => {
                out.push(char::from(b));
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

/// Extract the fields the weather view needs from an OpenWeatherMap
/// "current weather" response body.
pub fn parse_report(body: &str) -> Result<WeatherReport, WeatherError> {
    let root: OwmCurrentRoot = serde_json::from_str(body).map_err(|_| WeatherError::Parse)?;
    let main = root.main.ok_or(WeatherError::Parse)?;

    Ok(WeatherReport {
        location: root.name.ok_or(WeatherError::Parse)?,
        temperature_c: main.temp.ok_or(WeatherError::Parse)? as f32,
        humidity_pct: main.humidity.ok_or(WeatherError::Parse)? as f32,
        pressure_hpa: main.pressure.ok_or(WeatherError::Parse)?.round() as i32,
    })
}
