//! TableClock Firmware: Main Entry Point
//!
//! Hexagonal architecture with a single cooperative loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        EspClock       OpenWeatherClient       │
//! │  (Display+Buttons+IMU   (ClockPort)    (WeatherPort)           │
//! │   +LED+SystemInfo)                                             │
//! │  WifiNetwork            HardwareRng    LogEventSink            │
//! │  (NetworkPort)          (RandomSource) (EventSink)             │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │            ViewScheduler (pure logic)                  │    │
//! │  │  View cycle · Rotation · Routine · Weather cache       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use core::cell::RefCell;

use anyhow::Result;
use embedded_hal_bus::i2c::RefCellDevice;
use esp_idf_hal::delay::{Delay, FreeRtos};
use esp_idf_hal::gpio::{AnyIOPin, InputPin, PinDriver};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::spi::config::{Config as SpiConfig, DriverConfig as SpiDriverConfig};
use esp_idf_hal::spi::SpiDeviceDriver;
use esp_idf_hal::units::Hertz;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::EspWifi;
use log::{error, info, warn};
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7735s;
use mipidsi::options::{ColorInversion, ColorOrder};
use mipidsi::Builder;

use tableclock::adapters::hardware::HardwareAdapter;
use tableclock::adapters::log_sink::LogEventSink;
use tableclock::adapters::rng::HardwareRng;
use tableclock::adapters::time::{sync_time, EspClock};
use tableclock::adapters::weather_http::OpenWeatherClient;
use tableclock::adapters::wifi::WifiNetwork;
use tableclock::app::bootstrap::{bootstrap, RetryPolicy};
use tableclock::app::ports::{ButtonPort, ClockPort, DisplayPort, OrientationPort};
use tableclock::app::scheduler::{TickInput, TickOutcome, ViewScheduler};
use tableclock::config::ClockConfig;
use tableclock::drivers::button::Button;
use tableclock::drivers::imu::Mpu6886;
use tableclock::drivers::lcd::GraphicsDisplay;
use tableclock::drivers::pmic::Axp192;
use tableclock::drivers::status_led::StatusLed;
use tableclock::error::Error;
use tableclock::orientation::Rotation;
use tableclock::{pins, views};

fn uptime_ms() -> u64 {
    EspClock::new().uptime_ms()
}

/// Log and park the main task.  Nothing useful can run without the network.
fn halt(reason: &dyn core::fmt::Display) -> ! {
    error!("{}; halting", reason);
    loop {
        FreeRtos::delay_ms(1_000);
    }
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  TableClock v{}                      ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ClockConfig::default();
    config.validate().map_err(Error::from)?;

    let peripherals = Peripherals::take()?;
    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let mut delay = Delay::new_default();

    // ── 3. Internal I²C bus: PMIC first, it powers the LCD ────
    info!(
        "I2C: SDA={} SCL={} @ {} Hz",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_FREQ_HZ
    );
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio21,
        peripherals.pins.gpio22,
        &I2cConfig::new().baudrate(Hertz(pins::I2C_FREQ_HZ)),
    )?;
    let i2c_bus = RefCell::new(i2c);

    let mut pmic = Axp192::new(RefCellDevice::new(&i2c_bus));
    pmic.init().map_err(|_| Error::Init("AXP192 init failed"))?;

    let mut imu = Mpu6886::new(RefCellDevice::new(&i2c_bus));
    if let Err(e) = imu.init(&mut delay) {
        // Orientation falls back to upright; the clock still works.
        warn!("MPU6886 init failed: {}", e);
    }

    // ── 4. LCD ────────────────────────────────────────────────
    let spi = SpiDeviceDriver::new_single(
        peripherals.spi2,
        peripherals.pins.gpio13,
        peripherals.pins.gpio15,
        Option::<AnyIOPin>::None,
        Some(peripherals.pins.gpio5),
        &SpiDriverConfig::new(),
        &SpiConfig::new().baudrate(Hertz(pins::LCD_SPI_FREQ_HZ)),
    )?;
    let dc = PinDriver::output(peripherals.pins.gpio23)?;
    let rst = PinDriver::output(peripherals.pins.gpio18)?;
    let spi_buffer: &'static mut [u8; 512] = Box::leak(Box::new([0u8; 512]));
    let panel = Builder::new(ST7735s, SpiInterface::new(spi, dc, spi_buffer))
        .reset_pin(rst)
        .display_size(pins::LCD_WIDTH, pins::LCD_HEIGHT)
        .display_offset(pins::LCD_OFFSET_X, pins::LCD_OFFSET_Y)
        .invert_colors(ColorInversion::Inverted)
        .color_order(ColorOrder::Bgr)
        .init(&mut delay)
        .map_err(|_| Error::Init("ST7735S init failed"))?;

    // ── 5. Buttons + LED ──────────────────────────────────────
    info!(
        "GPIO: button A={} button B={} LED={}",
        pins::BUTTON_A_GPIO,
        pins::BUTTON_B_GPIO,
        pins::LED_GPIO
    );
    let button_a = PinDriver::input(peripherals.pins.gpio37.downgrade_input())?;
    let button_b = PinDriver::input(peripherals.pins.gpio39.downgrade_input())?;
    let led = PinDriver::output(peripherals.pins.gpio10)?;

    let mut hw = HardwareAdapter::new(
        GraphicsDisplay::new(panel),
        imu,
        pmic,
        Button::new(button_a),
        Button::new(button_b),
        StatusLed::new(led),
        uptime_ms,
    );
    hw.set_backlight(config.lcd_brightness);

    // ── 6. Network + time ─────────────────────────────────────
    views::reset_display(&mut hw, Rotation::Portrait0);
    hw.println("Connecting...");

    let wifi = EspWifi::new(peripherals.modem, sysloop, Some(nvs))?;
    let mut net = WifiNetwork::new(Box::new(wifi));
    let ip = match bootstrap(
        &mut net,
        &config.wifi_ssid,
        &config.wifi_password,
        RetryPolicy::from_config(&config),
        &mut |ms| FreeRtos::delay_ms(ms),
    ) {
        Ok(ip) => ip,
        Err(e) => halt(&Error::from(e)),
    };

    // The SNTP client keeps re-syncing in the background while alive.
    let _sntp = sync_time(&config.timezone, &config.ntp_servers)?;

    // ── 7. Main loop ──────────────────────────────────────────
    let clock = EspClock::new();
    let mut weather = OpenWeatherClient::new(&config.weather_api_key);
    let mut rng = HardwareRng;
    let mut sink = LogEventSink::new();
    let mut scheduler = ViewScheduler::new(&config, Some(ip), clock.monotonic_ms());
    scheduler.start(&mut sink);

    info!("Entering main loop");
    loop {
        let input = TickInput {
            edges: hw.poll_edges(),
            accel: hw.read(),
            now_ms: clock.monotonic_ms(),
        };
        let outcome = scheduler.tick(input, &mut hw, &clock, &mut weather, &mut rng, &mut sink);
        let pause_ms = match outcome {
            TickOutcome::Idle => config.idle_delay_ms,
            TickOutcome::Evaluated { .. } => config.active_delay_ms,
        };
        FreeRtos::delay_ms(pause_ms);
    }
}
