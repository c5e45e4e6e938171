//! Text-cursor drawing surface over an `embedded-graphics` draw target.
//!
//! The ST7735S panel (80×160) is driven by `mipidsi` on device; host tests
//! plug in an in-memory target.  [`GraphicsDisplay`] turns the cursor
//! oriented [`DisplayPort`] calls into `embedded-graphics` primitives and
//! wraps text at the right edge of the current orientation.

use core::fmt::Debug;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use log::debug;
use profont::{PROFONT_10_POINT, PROFONT_24_POINT};

use crate::app::ports::{Color, DisplayPort, FontId};
use crate::orientation::Rotation;

/// Panel that can change its scan direction.
pub trait PanelRotation {
    fn set_panel_rotation(&mut self, rotation: Rotation);
}

fn rgb(color: Color) -> Rgb565 {
    match color {
        Color::Foreground => Rgb565::WHITE,
        Color::Accent => Rgb565::CYAN,
        Color::Background => Rgb565::BLACK,
    }
}

fn mono_font(font: FontId) -> &'static MonoFont<'static> {
    match font {
        FontId::Small => &PROFONT_10_POINT,
        FontId::Digits => &PROFONT_24_POINT,
    }
}

fn report<E: Debug>(res: Result<(), E>) {
    if let Err(e) = res {
        debug!("LCD: draw failed: {:?}", e);
    }
}

pub struct GraphicsDisplay<D> {
    target: D,
    cursor: Point,
    font: FontId,
    fg: Rgb565,
    bg: Rgb565,
}

impl<D> GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565> + PanelRotation,
    D::Error: Debug,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            cursor: Point::zero(),
            font: FontId::Small,
            fg: rgb(Color::Foreground),
            bg: rgb(Color::Background),
        }
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    fn newline(&mut self, line_height: i32) {
        self.cursor = Point::new(0, self.cursor.y + line_height);
    }
}

impl<D> DisplayPort for GraphicsDisplay<D>
where
    D: DrawTarget<Color = Rgb565> + PanelRotation,
    D::Error: Debug,
{
    fn clear(&mut self, color: Color) {
        report(self.target.clear(rgb(color)));
    }

    fn set_rotation(&mut self, rotation: Rotation) {
        self.target.set_panel_rotation(rotation);
    }

    fn set_font(&mut self, font: FontId) {
        self.font = font;
    }

    fn set_color(&mut self, fg: Color, bg: Color) {
        self.fg = rgb(fg);
        self.bg = rgb(bg);
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = Point::new(x, y);
    }

    fn print(&mut self, text: &str) {
        let font = mono_font(self.font);
        let advance = (font.character_size.width + font.character_spacing) as i32;
        let line_height = font.character_size.height as i32;
        let width = self.target.bounding_box().size.width as i32;
        let style = MonoTextStyleBuilder::new()
            .font(font)
            .text_color(self.fg)
            .background_color(self.bg)
            .build();

        let mut buf = [0u8; 4];
        for ch in text.chars() {
            if ch == '\n' {
                self.newline(line_height);
                continue;
            }
            if self.cursor.x > 0 && self.cursor.x + advance > width {
                self.newline(line_height);
            }
            let glyph = ch.encode_utf8(&mut buf);
            let res = Text::with_baseline(glyph, self.cursor, style, Baseline::Top).draw(&mut self.target);
            report(res.map(|_| ()));
            self.cursor.x += advance;
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let res = Line::new(Point::new(x0, y0), Point::new(x1, y1))
            .into_styled(PrimitiveStyle::with_stroke(rgb(color), 1))
            .draw(&mut self.target);
        report(res);
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color) {
        let res = Circle::with_center(Point::new(x, y), radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(rgb(color)))
            .draw(&mut self.target);
        report(res);
    }
}

// ── ST7735S via mipidsi ───────────────────────────────────────

#[cfg(target_os = "espidf")]
mod panel {
    use embedded_hal::digital::OutputPin;
    use mipidsi::interface::{Interface, InterfacePixelFormat};
    use mipidsi::models::Model;
    use mipidsi::options::{Orientation, Rotation as PanelTurn};
    use mipidsi::Display;

    use super::PanelRotation;
    use crate::orientation::Rotation;

    impl<DI, M, RST> PanelRotation for Display<DI, M, RST>
    where
        DI: Interface,
        M: Model,
        M::ColorFormat: InterfacePixelFormat<DI::Word>,
        RST: OutputPin,
    {
        fn set_panel_rotation(&mut self, rotation: Rotation) {
            let turn = match rotation {
                Rotation::Portrait0 => PanelTurn::Deg0,
                Rotation::Landscape1 => PanelTurn::Deg90,
                Rotation::Portrait2 => PanelTurn::Deg180,
                Rotation::Landscape3 => PanelTurn::Deg270,
            };
            if self.set_orientation(Orientation::new().rotate(turn)).is_err() {
                log::warn!("LCD: set_orientation failed");
            }
        }
    }
}
