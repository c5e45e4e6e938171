//! Weather view.  Shows a placeholder while the fetch blocks, then either
//! the snapshot or a short error line.

use crate::app::ports::{Color, DisplayPort};
use crate::orientation::Rotation;
use crate::weather::WeatherSnapshot;

use super::{fmt_value, print_field, reset_display};

/// Shown before a blocking fetch starts.
pub fn render_gathering(display: &mut impl DisplayPort, rotation: Rotation) {
    reset_display(display, rotation);
    display.println("Gathering weather...");
}

pub fn render_snapshot(display: &mut impl DisplayPort, rotation: Rotation, snapshot: &WeatherSnapshot) {
    reset_display(display, rotation);

    print_field(display, rotation, "Location: ", &snapshot.location);

    let temp: heapless::String<12> = fmt_value(format_args!("{:.1} C", snapshot.temperature_c));
    print_field(display, rotation, "Temp: ", &temp);

    let humidity: heapless::String<12> = fmt_value(format_args!("{:.1} %", snapshot.humidity_pct));
    print_field(display, rotation, "Humidity: ", &humidity);

    let pressure: heapless::String<12> = fmt_value(format_args!("{} hPa", snapshot.pressure_hpa));
    print_field(display, rotation, "Pressure: ", &pressure);
}

pub fn render_error(display: &mut impl DisplayPort, rotation: Rotation) {
    reset_display(display, rotation);
    display.set_color(Color::Accent, Color::Background);
    display.println("Weather error");
}
