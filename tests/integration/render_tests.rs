//! Views rendered through the real `embedded-graphics` display adapter.

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use tableclock::app::ports::LocalTime;
use tableclock::drivers::lcd::{GraphicsDisplay, PanelRotation};
use tableclock::orientation::Rotation;
use tableclock::routine::RoutinePicker;
use tableclock::views;

/// 80×160 canvas that swaps its axes in landscape.
struct Canvas {
    pixels: Vec<Rgb565>,
    rotation: Rotation,
}

impl Canvas {
    fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; 80 * 160],
            rotation: Rotation::Portrait0,
        }
    }

    fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        if self.rotation.is_landscape() {
            Size::new(160, 80)
        } else {
            Size::new(80, 160)
        }
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.size();
        for Pixel(p, c) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < size.width && (p.y as u32) < size.height {
                self.pixels[p.y as usize * size.width as usize + p.x as usize] = c;
            }
        }
        Ok(())
    }
}

impl PanelRotation for Canvas {
    fn set_panel_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }
}

fn noon() -> LocalTime {
    LocalTime {
        year: 2024,
        month: 12,
        day: 24,
        weekday: 2,
        hour: 12,
        minute: 0,
        second: 0,
    }
}

#[test]
fn clock_face_in_landscape_uses_both_colours() {
    let mut lcd = GraphicsDisplay::new(Canvas::new());
    views::time::render(&mut lcd, Rotation::Landscape1, &noon());

    assert_eq!(lcd.target().rotation, Rotation::Landscape1);
    assert!(lcd.target().count(Rgb565::WHITE) > 0, "digits");
    assert!(lcd.target().count(Rgb565::CYAN) > 0, "date");
}

#[test]
fn clock_face_in_portrait() {
    let mut lcd = GraphicsDisplay::new(Canvas::new());
    views::time::render(&mut lcd, Rotation::Portrait2, &noon());

    assert_eq!(lcd.target().rotation, Rotation::Portrait2);
    assert!(lcd.target().count(Rgb565::WHITE) > 0);
    assert!(lcd.target().count(Rgb565::CYAN) > 0);
}

#[test]
fn next_view_starts_from_a_cleared_screen() {
    let mut lcd = GraphicsDisplay::new(Canvas::new());
    views::time::render(&mut lcd, Rotation::Portrait0, &noon());
    assert!(lcd.target().count(Rgb565::CYAN) > 0);

    // "Not started" is plain foreground text.
    views::routine::render(&mut lcd, Rotation::Portrait0, &RoutinePicker::new(5));
    assert_eq!(lcd.target().count(Rgb565::CYAN), 0);
    assert!(lcd.target().count(Rgb565::WHITE) > 0);
}

#[test]
fn weather_error_is_accented() {
    let mut lcd = GraphicsDisplay::new(Canvas::new());
    views::weather::render_error(&mut lcd, Rotation::Landscape3);
    assert!(lcd.target().count(Rgb565::CYAN) > 0);
    assert_eq!(lcd.target().count(Rgb565::WHITE), 0);
}
