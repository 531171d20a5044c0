//! TF-Luna register poller over the Linux I2C bus.
//!
//! The sensor exposes its latest measurement as little-endian 16-bit
//! register pairs; one poll cycle is two 2-byte block reads.

use super::constants::{REG_AMP_LOW, REG_DIST_LOW};
use crate::error::{Error, Result};
use crate::types::RangeSample;
use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;

/// TF-Luna in I2C mode, generic over the bus device
pub struct TfLunaI2c<D: I2CDevice> {
    dev: D,
}

impl TfLunaI2c<LinuxI2CDevice> {
    /// Open the sensor on a numbered Linux I2C bus
    pub fn open(bus: u8, address: u16) -> Result<Self> {
        let dev = LinuxI2CDevice::new(format!("/dev/i2c-{}", bus), address)?;
        Ok(Self::new(dev))
    }
}

impl<D> TfLunaI2c<D>
where
    D: I2CDevice,
    Error: From<D::Error>,
{
    /// Wrap an already-open bus device
    pub fn new(dev: D) -> Self {
        Self { dev }
    }

    /// Perform one poll cycle: distance plus signal amplitude
    pub fn read_sample(&mut self) -> Result<RangeSample> {
        let distance_cm = self.read_u16(REG_DIST_LOW)?;
        let amplitude = self.read_u16(REG_AMP_LOW)?;
        Ok(RangeSample {
            distance_cm,
            amplitude,
        })
    }

    /// Read a little-endian 16-bit value starting at `low_reg`.
    ///
    /// A single block read so both bytes come from the same measurement.
    fn read_u16(&mut self, low_reg: u8) -> Result<u16> {
        let data = self.dev.smbus_read_i2c_block_data(low_reg, 2)?;
        if data.len() < 2 {
            return Err(Error::InvalidData(format!(
                "short block read at register {:#04x}",
                low_reg
            )));
        }
        Ok(decode_u16(data[0], data[1]))
    }
}

/// Decode a little-endian register pair: low byte plus high byte times 256
pub fn decode_u16(low: u8, high: u8) -> u16 {
    u16::from_le_bytes([low, high])
}
