//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to                  |
//! |----------------|--------------------|------------------------------|
//! | `hardware`     | DisplayPort        | ST7735S LCD (mipidsi)        |
//! |                | OrientationPort    | MPU6886 IMU                  |
//! |                | ButtonPort         | GPIO37 / GPIO39              |
//! |                | IndicatorPort      | GPIO10 LED                   |
//! |                | SystemInfoPort     | AXP192, on-die sensor        |
//! | `log_sink`     | EventSink          | Serial log output            |
//! | `rng`          | RandomSource       | ESP32 hardware RNG           |
//! | `time`         | ClockPort          | ESP32 system timer, SNTP     |
//! | `weather_http` | WeatherPort        | OpenWeatherMap over HTTPS    |
//! | `wifi`         | NetworkPort        | ESP-IDF WiFi STA             |

pub mod hardware;
pub mod log_sink;
pub mod rng;
pub mod time;
pub mod weather_http;
pub mod wifi;
