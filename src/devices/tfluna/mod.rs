//! Benewake TF-Luna lidar driver.
//!
//! Two independent access paths, matching the sensor's two wiring modes:
//! UART streaming ([`TfLuna`], 100 Hz measurement frames plus a small
//! command set) and I2C register polling ([`i2c::TfLunaI2c`]).

pub mod constants;
pub mod i2c;
pub mod protocol;
pub mod reader;

use crate::error::{Error, Result};
use crate::transport::{SerialTransport, Transport};
use constants::{SAMPLE_RATE_MAX_HZ, SAMPLE_RATE_MIN_HZ};
use protocol::{cmd_set_sample_rate, cmd_version_request, find_version_reply, FrameReader};
use std::time::{Duration, Instant};

pub use protocol::Frame;

/// Bound on waiting for the firmware-version reply
const VERSION_TIMEOUT_MS: u64 = 500;

/// TF-Luna sensor in UART mode
pub struct TfLuna<T: Transport> {
    transport: T,
    reader: FrameReader,
}

impl TfLuna<SerialTransport> {
    /// Open a sensor on a serial port
    pub fn open(path: &str, baud_rate: u32) -> Result<Self> {
        Ok(Self::new(SerialTransport::open(path, baud_rate)?))
    }
}

impl<T: Transport> TfLuna<T> {
    /// Wrap an already-open transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            reader: FrameReader::new(),
        }
    }

    /// Read one measurement frame if a complete one is available.
    ///
    /// Returns `Ok(None)` when the stream has not yet delivered a full
    /// frame; the caller decides how long to wait before trying again.
    pub fn read_frame(&mut self) -> Result<Option<Frame>> {
        let mut buf = [0u8; 64];
        let n = self.transport.read(&mut buf)?;
        if n > 0 {
            self.reader.extend(&buf[..n]);
        }
        self.reader.next_frame()
    }

    /// Set the sensor's output rate in Hz
    pub fn set_sample_rate(&mut self, hz: u16) -> Result<()> {
        if !(SAMPLE_RATE_MIN_HZ..=SAMPLE_RATE_MAX_HZ).contains(&hz) {
            return Err(Error::InvalidParameter(format!(
                "sample rate must be {}..={} Hz, got {}",
                SAMPLE_RATE_MIN_HZ, SAMPLE_RATE_MAX_HZ, hz
            )));
        }
        self.transport.write(&cmd_set_sample_rate(hz))?;
        self.transport.flush()?;
        Ok(())
    }

    /// Query the firmware version string ("major.minor.rev").
    ///
    /// The reply arrives interleaved with measurement frames; any frame
    /// bytes consumed while waiting are discarded, which costs at most a
    /// few frames of a continuous stream.
    pub fn get_version(&mut self) -> Result<String> {
        self.transport.write(&cmd_version_request())?;
        self.transport.flush()?;

        let deadline = Instant::now() + Duration::from_millis(VERSION_TIMEOUT_MS);
        let mut scan_buf = Vec::with_capacity(256);
        let mut buf = [0u8; 64];

        while Instant::now() < deadline {
            let n = self.transport.read(&mut buf)?;
            if n > 0 {
                scan_buf.extend_from_slice(&buf[..n]);
                if let Some(version) = find_version_reply(&scan_buf) {
                    return Ok(version);
                }
            } else {
                std::thread::sleep(Duration::from_millis(5));
            }
        }

        Err(Error::Timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::protocol::checksum;
    use super::*;
    use crate::transport::MockTransport;

    fn make_frame(dist_cm: u16, amp: u16, temp_raw: u16) -> [u8; 9] {
        let d = dist_cm.to_le_bytes();
        let a = amp.to_le_bytes();
        let t = temp_raw.to_le_bytes();
        let mut frame = [0x59, 0x59, d[0], d[1], a[0], a[1], t[0], t[1], 0];
        frame[8] = checksum(&frame[..8]);
        frame
    }

    #[test]
    fn test_read_frame_from_stream() {
        let mock = MockTransport::new();
        mock.inject_read(&make_frame(150, 400, 2304));

        let mut sensor = TfLuna::new(mock);
        let frame = sensor.read_frame().unwrap().unwrap();
        assert!((frame.distance_m - 1.50).abs() < 1e-6);
        assert_eq!(frame.signal_strength, 400);
    }

    #[test]
    fn test_read_frame_idle_stream() {
        let mock = MockTransport::new();
        let mut sensor = TfLuna::new(mock);
        assert!(sensor.read_frame().unwrap().is_none());
    }

    #[test]
    fn test_set_sample_rate_writes_command() {
        let mock = MockTransport::new();
        let mut sensor = TfLuna::new(mock.clone());

        sensor.set_sample_rate(100).unwrap();
        assert_eq!(mock.written(), vec![0x5A, 0x06, 0x03, 0x64, 0x00, 0xC7]);
    }

    #[test]
    fn test_set_sample_rate_rejects_out_of_range() {
        let mock = MockTransport::new();
        let mut sensor = TfLuna::new(mock.clone());

        assert!(sensor.set_sample_rate(0).is_err());
        assert!(sensor.set_sample_rate(251).is_err());
        assert!(mock.written().is_empty());
    }

    #[test]
    fn test_get_version_parses_reply() {
        let mock = MockTransport::new();
        let mut reply = [0x5A, 0x07, 0x01, 0x02, 0x01, 0x03, 0x00];
        reply[6] = checksum(&reply[..6]);
        // Reply lands between two measurement frames
        mock.inject_read(&make_frame(100, 200, 2048));
        mock.inject_read(&reply);
        mock.inject_read(&make_frame(101, 200, 2048));

        let mut sensor = TfLuna::new(mock.clone());
        assert_eq!(sensor.get_version().unwrap(), "3.1.2");
        assert_eq!(mock.written(), vec![0x5A, 0x04, 0x01, 0x5F]);
    }
}
