//! OpenWeatherMap HTTPS client.
//!
//! Implements [`WeatherPort`] with a blocking GET over `EspHttpConnection`
//! (TLS via the ESP-IDF certificate bundle).  The payload is decoded by
//! [`parse_report`](crate::weather::parse_report).
//!
//! On non-espidf targets a canned payload stands in for the network.

use log::info;

use crate::app::ports::{WeatherError, WeatherPort, WeatherReport};
use crate::weather::{parse_report, weather_url};

/// Upper bound on the response body.
#[cfg(target_os = "espidf")]
const MAX_BODY_BYTES: usize = 8 * 1024;
#[cfg(target_os = "espidf")]
const TIMEOUT_MS: u64 = 15_000;

pub struct OpenWeatherClient {
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
        }
    }

    #[cfg(target_os = "espidf")]
    fn get(&mut self, url: &str) -> Result<String, WeatherError> {
        use embedded_svc::http::client::Client;
        use embedded_svc::http::Method;
        use embedded_svc::io::Read;
        use esp_idf_svc::http::client::{Configuration, EspHttpConnection};
        use log::warn;

        let config = Configuration {
            timeout: Some(std::time::Duration::from_millis(TIMEOUT_MS)),
            use_global_ca_store: true,
            crt_bundle_attach: Some(esp_idf_svc::sys::esp_crt_bundle_attach),
            ..Default::default()
        };

        let connection = EspHttpConnection::new(&config).map_err(|e| {
            warn!("Weather: HTTP init failed: {}", e);
            WeatherError::Transport
        })?;
        let mut client = Client::wrap(connection);

        let mut response = client
            .request(Method::Get, url, &[])
            .and_then(|req| req.submit())
            .map_err(|e| {
                warn!("Weather: request failed: {}", e);
                WeatherError::Transport
            })?;

        let status = response.status();
        if status != 200 {
            return Err(WeatherError::Status(status));
        }

        let mut body: Vec<u8> = Vec::new();
        let mut buf = [0u8; 512];
        loop {
            let n = response.read(&mut buf).map_err(|_| WeatherError::Transport)?;
            if n == 0 {
                break;
            }
            body.extend_from_slice(&buf[..n]);
            if body.len() > MAX_BODY_BYTES {
                return Err(WeatherError::Parse);
            }
        }

        String::from_utf8(body).map_err(|_| WeatherError::Parse)
    }

    /// Simulation: a fixed Tokyo report.
    #[cfg(not(target_os = "espidf"))]
    fn get(&mut self, _url: &str) -> Result<String, WeatherError> {
        Ok(SIM_PAYLOAD.to_string())
    }
}

#[cfg(not(target_os = "espidf"))]
const SIM_PAYLOAD: &str = r#"{"name":"Tokyo","main":{"temp":18.4,"humidity":62,"pressure":1012}}"#;

impl WeatherPort for OpenWeatherClient {
    fn fetch(&mut self, query: &str) -> Result<WeatherReport, WeatherError> {
        let url = weather_url(query, &self.api_key);
        info!("Weather: GET current conditions for '{}'", query);
        let body = self.get(&url)?;
        parse_report(&body)
    }
}
