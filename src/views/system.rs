//! System view: IP address, battery voltage and chip temperature.

use std::net::Ipv4Addr;

use crate::app::ports::{DisplayPort, SystemInfoPort};
use crate::orientation::Rotation;

use super::{fmt_value, print_field, reset_display};

pub fn render(
    hw: &mut (impl DisplayPort + SystemInfoPort),
    rotation: Rotation,
    ip: Option<Ipv4Addr>,
) {
    let battery = hw.battery_voltage();
    let cpu_temp = hw.cpu_temperature_c();

    reset_display(hw, rotation);

    let ip_text: heapless::String<16> = match ip {
        Some(addr) => fmt_value(format_args!("{}", addr)),
        None => fmt_value(format_args!("-")),
    };
    print_field(hw, rotation, "IP: ", &ip_text);

    let battery_text: heapless::String<12> = fmt_value(format_args!("{:.2} V", battery));
    print_field(hw, rotation, "Battery: ", &battery_text);

    let temp_text: heapless::String<12> = fmt_value(format_args!("{:.2} C", cpu_temp));
    print_field(hw, rotation, "CPU Temp: ", &temp_text);
}
