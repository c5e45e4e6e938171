//! ESP32 clock adapter.
//!
//! Implements [`ClockPort`] for the TableClock.
//!
//! - **`target_os = "espidf"`**: monotonic time from `esp_timer_get_time()`,
//!   wall-clock from `localtime_r()` after the boot-time SNTP sync.
//! - **`not(target_os = "espidf")`**: `std::time::Instant` and UTC from
//!   `SystemTime` for host-side simulation.

use crate::app::ports::{ClockPort, LocalTime};

/// Clock adapter for the M5StickC.
pub struct EspClock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for EspClock {
    fn default() -> Self {
        Self::new()
    }
}

impl EspClock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Milliseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_ms(&self) -> u64 {
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64 / 1_000
    }

    /// Milliseconds since boot (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    #[cfg(target_os = "espidf")]
    fn now_local(&self) -> LocalTime {
        let mut now: esp_idf_svc::sys::time_t = 0;
        let mut tm: esp_idf_svc::sys::tm = unsafe { core::mem::zeroed() };
        // SAFETY: both pointers refer to live stack values.
        unsafe {
            esp_idf_svc::sys::time(&mut now);
            if esp_idf_svc::sys::localtime_r(&now, &mut tm).is_null() {
                return LocalTime::default();
            }
        }
        LocalTime {
            year: (tm.tm_year + 1900) as u16,
            month: (tm.tm_mon + 1) as u8,
            day: tm.tm_mday as u8,
            weekday: tm.tm_wday as u8,
            hour: tm.tm_hour as u8,
            minute: tm.tm_min as u8,
            second: tm.tm_sec as u8,
        }
    }

    /// Host simulation: UTC wall-clock.
    #[cfg(not(target_os = "espidf"))]
    fn now_local(&self) -> LocalTime {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        utc_from_unix(secs)
    }
}

impl ClockPort for EspClock {
    fn monotonic_ms(&self) -> u64 {
        self.uptime_ms()
    }

    fn local_time(&self) -> LocalTime {
        self.now_local()
    }
}

/// Break a Unix timestamp into UTC calendar fields.
#[cfg(not(target_os = "espidf"))]
fn utc_from_unix(secs: u64) -> LocalTime {
    let days = (secs / 86_400) as i64;
    let rem = secs % 86_400;

    // Civil-from-days, era based (proleptic Gregorian).
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    LocalTime {
        year: year as u16,
        month: month as u8,
        day: day as u8,
        // 1970-01-01 was a Thursday.
        weekday: ((days + 4).rem_euclid(7)) as u8,
        hour: (rem / 3600) as u8,
        minute: ((rem % 3600) / 60) as u8,
        second: (rem % 60) as u8,
    }
}

// ── SNTP ──────────────────────────────────────────────────────

#[cfg(target_os = "espidf")]
mod sntp {
    use std::thread;
    use std::time::Duration;

    use anyhow::Result;
    use esp_idf_svc::sntp::{EspSntp, OperatingMode, SntpConf, SyncMode, SyncStatus};
    use log::{info, warn};

    const SYNC_TIMEOUT_MS: u32 = 20_000;
    const POLL_INTERVAL_MS: u32 = 250;

    /// Apply `tz` and start SNTP against `servers`.  Waits for the first
    /// sync up to a bounded time; the returned client must stay alive.
    pub fn sync_time(tz: &str, servers: &[String; 2]) -> Result<EspSntp<'static>> {
        info!("Time: timezone {}", tz);
        // SAFETY: single-threaded during boot.
        unsafe {
            std::env::set_var("TZ", tz);
            esp_idf_svc::sys::tzset();
        }

        let mut conf = SntpConf {
            sync_mode: SyncMode::Immediate,
            operating_mode: OperatingMode::Poll,
            ..Default::default()
        };
        // The slot count follows CONFIG_LWIP_SNTP_MAX_SERVERS.
        for (slot, server) in conf.servers.iter_mut().zip(servers) {
            *slot = server.as_str();
        }
        let sntp = EspSntp::new(&conf)?;

        let mut elapsed_ms = 0u32;
        while elapsed_ms < SYNC_TIMEOUT_MS {
            if sntp.get_sync_status() == SyncStatus::Completed {
                info!("Time: SNTP synchronized after {}ms", elapsed_ms);
                return Ok(sntp);
            }
            thread::sleep(Duration::from_millis(u64::from(POLL_INTERVAL_MS)));
            elapsed_ms += POLL_INTERVAL_MS;
        }

        warn!("Time: SNTP not synchronized within {}s, continuing", SYNC_TIMEOUT_MS / 1000);
        Ok(sntp)
    }
}

#[cfg(target_os = "espidf")]
pub use sntp::sync_time;
