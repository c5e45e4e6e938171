//! MPU6886 6-axis IMU, accelerometer only.
//!
//! Sits on the internal I²C bus at 0x68.  Configured for ±8 g; samples are
//! big-endian 16-bit words starting at ACCEL_XOUT_H.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::info;

use crate::orientation::Acceleration;

pub const MPU6886_ADDR: u8 = 0x68;

const REG_SMPLRT_DIV: u8 = 0x19;
const REG_CONFIG: u8 = 0x1A;
const REG_GYRO_CONFIG: u8 = 0x1B;
const REG_ACCEL_CONFIG: u8 = 0x1C;
const REG_ACCEL_CONFIG2: u8 = 0x1D;
const REG_ACCEL_XOUT_H: u8 = 0x3B;
const REG_PWR_MGMT_1: u8 = 0x6B;
const REG_WHO_AM_I: u8 = 0x75;

const WHO_AM_I_EXPECTED: u8 = 0x19;

/// ACCEL_CONFIG value for ±8 g full scale.
const ACCEL_FS_8G: u8 = 0x10;
const ACCEL_LSB_PER_G: f32 = 32768.0 / 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImuError<E> {
    Bus(E),
    /// WHO_AM_I did not match.
    UnexpectedId(u8),
}

impl<E: fmt::Debug> fmt::Display for ImuError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "I2C error: {:?}", e),
            Self::UnexpectedId(id) => {
                write!(f, "unexpected WHO_AM_I=0x{:02X} (expected 0x{:02X})", id, WHO_AM_I_EXPECTED)
            }
        }
    }
}

impl<E: fmt::Debug> std::error::Error for ImuError<E> {}

pub struct Mpu6886<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Mpu6886<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Reset, wake and configure the accelerometer.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), ImuError<I2C::Error>> {
        let id = self.read_reg(REG_WHO_AM_I)?;
        if id != WHO_AM_I_EXPECTED {
            return Err(ImuError::UnexpectedId(id));
        }

        self.write_reg(REG_PWR_MGMT_1, 0x00)?;
        delay.delay_ms(10);
        self.write_reg(REG_PWR_MGMT_1, 0x80)?; // device reset
        delay.delay_ms(10);
        self.write_reg(REG_PWR_MGMT_1, 0x01)?; // auto-select clock
        delay.delay_ms(10);

        self.write_reg(REG_ACCEL_CONFIG, ACCEL_FS_8G)?;
        self.write_reg(REG_GYRO_CONFIG, 0x18)?;
        self.write_reg(REG_CONFIG, 0x01)?;
        self.write_reg(REG_SMPLRT_DIV, 0x05)?;
        self.write_reg(REG_ACCEL_CONFIG2, 0x00)?;
        delay.delay_ms(1);

        info!("MPU6886: initialized (±8g)");
        Ok(())
    }

    /// One accelerometer sample in g.
    pub fn read_accel(&mut self) -> Result<Acceleration, ImuError<I2C::Error>> {
        let mut buf = [0u8; 6];
        self.i2c
            .write_read(MPU6886_ADDR, &[REG_ACCEL_XOUT_H], &mut buf)
            .map_err(ImuError::Bus)?;

        let axis = |hi: u8, lo: u8| f32::from(i16::from_be_bytes([hi, lo])) / ACCEL_LSB_PER_G;
        Ok(Acceleration::new(
            axis(buf[0], buf[1]),
            axis(buf[2], buf[3]),
            axis(buf[4], buf[5]),
        ))
    }

    fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), ImuError<I2C::Error>> {
        self.i2c.write(MPU6886_ADDR, &[reg, val]).map_err(ImuError::Bus)
    }

    fn read_reg(&mut self, reg: u8) -> Result<u8, ImuError<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(MPU6886_ADDR, &[reg], &mut buf)
            .map_err(ImuError::Bus)?;
        Ok(buf[0])
    }
}
