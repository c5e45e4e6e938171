//! In-test fakes of the `embedded-hal` traits the drivers consume.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource, Operation};

use crate::drivers::lcd::PanelRotation;
use crate::orientation::Rotation;

/// Register-file I²C device with auto-incrementing register pointer.
pub struct FakeI2c {
    addr: u8,
    pub regs: [u8; 256],
    ptr: usize,
}

impl FakeI2c {
    pub fn new(addr: u8) -> Self {
        Self {
            addr,
            regs: [0; 256],
            ptr: 0,
        }
    }
}

impl i2c::ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl i2c::I2c for FakeI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), Self::Error> {
        if address != self.addr {
            return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    if let Some((&reg, data)) = bytes.split_first() {
                        self.ptr = reg as usize;
                        for &b in data {
                            self.regs[self.ptr % 256] = b;
                            self.ptr += 1;
                        }
                    }
                }
                Operation::Read(buf) => {
                    for b in buf.iter_mut() {
                        *b = self.regs[self.ptr % 256];
                        self.ptr += 1;
                    }
                }
            }
        }
        Ok(())
    }
}

pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Input pin whose level the test sets through a shared cell.
pub struct FakeInput<'a> {
    pub high: &'a Cell<bool>,
}

impl ErrorType for FakeInput<'_> {
    type Error = Infallible;
}

impl InputPin for FakeInput<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

#[derive(Default)]
pub struct FakeOutput {
    pub high: bool,
}

impl ErrorType for FakeOutput {
    type Error = Infallible;
}

impl OutputPin for FakeOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high = true;
        Ok(())
    }
}

/// 80×160 framebuffer that follows rotation like the real panel.
pub struct Frame {
    pub pixels: Vec<Rgb565>,
    pub landscape: bool,
    pub rotation: Option<Rotation>,
}

impl Frame {
    pub fn new() -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; 80 * 160],
            landscape: false,
            rotation: None,
        }
    }

    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        if self.landscape {
            Size::new(160, 80)
        } else {
            Size::new(80, 160)
        }
    }
}

impl DrawTarget for Frame {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let size = self.size();
        for Pixel(p, c) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < size.width && (p.y as u32) < size.height {
                let idx = p.y as usize * size.width as usize + p.x as usize;
                self.pixels[idx] = c;
            }
        }
        Ok(())
    }
}

impl PanelRotation for Frame {
    fn set_panel_rotation(&mut self, rotation: Rotation) {
        self.landscape = rotation.is_landscape();
        self.rotation = Some(rotation);
    }
}
