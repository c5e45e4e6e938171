//! AXP192 power-management IC.
//!
//! Powers the LCD (LDO2 backlight, LDO3 logic) and measures the battery.
//! Address 0x34 on the internal I²C bus, shared with the IMU.

use embedded_hal::i2c::I2c;
use log::info;

pub const AXP192_ADDR: u8 = 0x34;

const REG_POWER_OUTPUT: u8 = 0x12;
const REG_LDO23_VOLTAGE: u8 = 0x28;
const REG_ADC_ENABLE1: u8 = 0x82;
const REG_BAT_VOLTAGE_H: u8 = 0x78;

/// LDO2 enable bit in POWER_OUTPUT.
const LDO2_EN: u8 = 1 << 2;

/// Battery ADC resolution.
const BAT_MV_PER_LSB: f32 = 1.1;

/// Power-on register writes for the M5StickC rails.
const INIT_SEQUENCE: [(u8, u8); 5] = [
    (0x10, 0xFF),              // EXTEN/DC-DC2 on
    (REG_LDO23_VOLTAGE, 0xCC), // LDO2/LDO3 = 3.0 V
    (REG_ADC_ENABLE1, 0xFF),   // all ADCs on (battery voltage included)
    (0x33, 0xC0),              // charge 4.2 V, 100 mA
    (REG_POWER_OUTPUT, 0x4D),  // DC-DC1, LDO2, LDO3, EXTEN on
];

pub struct Axp192<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Axp192<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn init(&mut self) -> Result<(), I2C::Error> {
        for (reg, val) in INIT_SEQUENCE {
            self.write_reg(reg, val)?;
        }
        info!("AXP192: power rails configured");
        Ok(())
    }

    /// Battery voltage in volts (12-bit ADC, 1.1 mV/LSB).
    pub fn battery_voltage(&mut self) -> Result<f32, I2C::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(AXP192_ADDR, &[REG_BAT_VOLTAGE_H], &mut buf)?;
        let raw = (u16::from(buf[0]) << 4) | u16::from(buf[1] & 0x0F);
        Ok(f32::from(raw) * BAT_MV_PER_LSB / 1000.0)
    }

    /// Set backlight brightness (0-255).  Zero switches LDO2 off.
    pub fn set_backlight(&mut self, brightness: u8) -> Result<(), I2C::Error> {
        let power = self.read_reg(REG_POWER_OUTPUT)?;
        let level = backlight_level(brightness);
        if level == 0 {
            self.write_reg(REG_POWER_OUTPUT, power & !LDO2_EN)?;
        } else {
            self.write_reg(REG_POWER_OUTPUT, power | LDO2_EN)?;
        }
        let ldo = self.read_reg(REG_LDO23_VOLTAGE)?;
        self.write_reg(REG_LDO23_VOLTAGE, (ldo & 0x0F) | (level << 4))
    }

    fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), I2C::Error> {
        self.i2c.write(AXP192_ADDR, &[reg, val])
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(AXP192_ADDR, &[reg], &mut buf)?;
        Ok(buf[0])
    }
}

/// Map 0-255 brightness onto the LDO2 voltage nibble (5..=15).
fn backlight_level(brightness: u8) -> u8 {
    if brightness == 0 {
        return 0;
    }
    (((u16::from(brightness) >> 1) + 8) / 13 + 5) as u8
}
