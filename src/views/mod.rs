//! Per-view render strategies.
//!
//! Each view is a plain function over [`DisplayPort`]; the scheduler picks
//! one with an exhaustive `match` on [`View`](crate::app::view::View).
//! Layouts target the 80×160 panel in both orientations.

pub mod routine;
pub mod system;
pub mod time;
pub mod weather;

use core::fmt::Write;

use crate::app::ports::{Color, DisplayPort, FontId};
use crate::orientation::Rotation;

/// Two-character decimal rendering of `n` (0–99).
///
/// The tens place is a space when `n < 10` and `zero_pad` is false.
pub fn format_two_digit(n: u8, zero_pad: bool) -> heapless::String<2> {
    let mut out = heapless::String::new();
    let tens = if n / 10 == 0 && !zero_pad {
        ' '
    } else {
        char::from(b'0' + (n / 10) % 10)
    };
    let _ = out.push(tens);
    let _ = out.push(char::from(b'0' + n % 10));
    out
}

/// Clear the panel and restore default text state for `rotation`.
pub fn reset_display(display: &mut impl DisplayPort, rotation: Rotation) {
    display.clear(Color::Background);
    display.set_rotation(rotation);
    display.set_font(FontId::Small);
    display.set_color(Color::Foreground, Color::Background);
    display.set_cursor(0, 0);
}

/// Print an accent-coloured label and its value.  Portrait panels are too
/// narrow for both on one line, so the value wraps below the label.
pub(crate) fn print_field(display: &mut impl DisplayPort, rotation: Rotation, label: &str, value: &str) {
    display.set_color(Color::Accent, Color::Background);
    display.print(label);
    if rotation.is_portrait() {
        display.println("");
    }
    display.set_color(Color::Foreground, Color::Background);
    display.println(value);
}

/// `format!` into a fixed-capacity buffer for short numeric values.
pub(crate) fn fmt_value<const N: usize>(args: core::fmt::Arguments<'_>) -> heapless::String<N> {
    let mut s = heapless::String::new();
    let _ = s.write_fmt(args);
    s
}
