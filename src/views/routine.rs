//! Routine view: today's pick and whether it has been done.

use crate::app::ports::{Color, DisplayPort};
use crate::orientation::Rotation;
use crate::routine::RoutinePicker;

use super::reset_display;

pub fn render(display: &mut impl DisplayPort, rotation: Rotation, routine: &RoutinePicker) {
    reset_display(display, rotation);

    let Some(label) = routine.label() else {
        display.println("Not started");
        return;
    };

    display.println(if routine.state().done { "Done" } else { "Pending" });
    display.set_color(Color::Accent, Color::Background);
    display.println(label);
}
