fn main() {
    // Build-time secrets picked up by `config::ClockConfig::default()`.
    for var in [
        "TABLECLOCK_WIFI_SSID",
        "TABLECLOCK_WIFI_PASS",
        "TABLECLOCK_OWM_API_KEY",
        "TABLECLOCK_OWM_LOCATION",
    ] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
