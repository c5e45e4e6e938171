//! Fuzz target: OpenWeatherMap payload decoding
//!
//! The response body comes straight off the network, so arbitrary bytes
//! must decode or fail without panicking.
//!
//! cargo fuzz run fuzz_weather_payload

#![no_main]

use libfuzzer_sys::fuzz_target;
use tableclock::weather::parse_report;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        let _ = parse_report(body);
    }
});
