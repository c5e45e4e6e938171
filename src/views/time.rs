//! Clock face: large HH MM digits with a two-dot colon and a small M/D date.

use crate::app::ports::{Color, DisplayPort, FontId, LocalTime};
use crate::orientation::Rotation;

use super::{format_two_digit, reset_display};

/// Width of one large digit glyph.
const DIGIT_W: i32 = 32;
/// Height of one large digit glyph.
const DIGIT_H: i32 = 48;
/// Line height of the small font.
const SMALL_H: i32 = 16;
const COLON_R: u32 = 2;

pub fn render(display: &mut impl DisplayPort, rotation: Rotation, now: &LocalTime) {
    reset_display(display, rotation);
    if rotation.is_landscape() {
        render_landscape(display, now);
    } else {
        render_portrait(display, now);
    }
}

fn render_landscape(display: &mut impl DisplayPort, now: &LocalTime) {
    let x = 3;
    let y = 16;

    display.set_font(FontId::Digits);
    display.set_cursor(x, y);
    display.print(&format_two_digit(now.hour, true));
    display.set_cursor(x + DIGIT_W * 2 + 6, y);
    display.print(&format_two_digit(now.minute, true));

    let colon_x = x + DIGIT_W * 2 + 2;
    display.fill_circle(colon_x, y + 12, COLON_R, Color::Foreground);
    display.fill_circle(colon_x, y + 36, COLON_R, Color::Foreground);

    // Month above day, right of the minutes, with a slash between them.
    let date_x = x + DIGIT_W * 4 + 6 + 3;
    let month_y = y + 4;
    let day_y = month_y + SMALL_H + 8;
    display.set_color(Color::Accent, Color::Background);
    display.set_font(FontId::Small);
    display.set_cursor(date_x, month_y);
    display.print(&format_two_digit(now.month, true));
    display.set_cursor(date_x, day_y);
    display.print(&format_two_digit(now.day, true));

    let slash_y = month_y + SMALL_H + 2;
    display.draw_line(date_x + 12, slash_y, date_x + 4, slash_y + 4, Color::Accent);
}

fn render_portrait(display: &mut impl DisplayPort, now: &LocalTime) {
    let x = 8;
    let y = 16;
    let minute_y = y + DIGIT_H + 9;

    display.set_font(FontId::Digits);
    display.set_cursor(x, y);
    display.print(&format_two_digit(now.hour, true));
    display.set_cursor(x, minute_y);
    display.print(&format_two_digit(now.minute, true));

    // Colon lies on its side between the two rows.
    let colon_y = y + DIGIT_H + 4;
    display.fill_circle(x + 19, colon_y, COLON_R, Color::Foreground);
    display.fill_circle(x + 19 + 24, colon_y, COLON_R, Color::Foreground);

    let date_y = minute_y + DIGIT_H + 5;
    let month_x = x + 9;
    let day_x = month_x + SMALL_H + 12;
    display.set_color(Color::Accent, Color::Background);
    display.set_font(FontId::Small);
    display.set_cursor(month_x, date_y);
    display.print(&format_two_digit(now.month, true));
    display.set_cursor(day_x, date_y);
    display.print(&format_two_digit(now.day, true));

    let slash_x = month_x + SMALL_H + 4;
    display.draw_line(slash_x, date_y + 12, slash_x + 4, date_y + 4, Color::Accent);
}
