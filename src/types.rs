//! Core data types shared by the I2C and UART readers.

/// Minimum signal amplitude for a trustworthy range (per Benewake manual)
pub const AMP_MIN_RELIABLE: u16 = 100;

/// Amplitude sentinel reported when the receiver is overexposed
pub const AMP_OVEREXPOSED: u16 = 0xFFFF;

/// Most recent values published by one sensor.
///
/// All measurement fields are absent when the last read cycle failed; the
/// timestamp is refreshed on every cycle, success or not, so a dead sensor
/// is never displayed as current.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reading {
    /// Distance in meters
    pub distance_m: Option<f32>,
    /// Return signal amplitude
    pub signal_strength: Option<u16>,
    /// Internal sensor temperature in degrees Celsius
    pub temperature_c: Option<f32>,
    /// Wall-clock time of the read cycle, microseconds since epoch
    pub timestamp_us: u64,
}

impl Reading {
    /// Reading for a successful cycle, stamped with the current time
    pub fn new(distance_m: f32, signal_strength: u16, temperature_c: f32) -> Self {
        Self {
            distance_m: Some(distance_m),
            signal_strength: Some(signal_strength),
            temperature_c: Some(temperature_c),
            timestamp_us: now_us(),
        }
    }

    /// All-absent reading for a failed cycle, stamped with the current time
    pub fn missing() -> Self {
        Self {
            timestamp_us: now_us(),
            ..Self::default()
        }
    }
}

/// One raw sample from the I2C register poller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSample {
    /// Distance in centimeters
    pub distance_cm: u16,
    /// Return signal amplitude
    pub amplitude: u16,
}

impl RangeSample {
    /// Whether the distance can be trusted.
    ///
    /// Too little return signal or a saturated receiver both invalidate the
    /// range even though the sensor still reports a distance value.
    pub fn is_reliable(&self) -> bool {
        self.amplitude >= AMP_MIN_RELIABLE && self.amplitude != AMP_OVEREXPOSED
    }
}

/// Current wall-clock time in microseconds since the Unix epoch
pub fn now_us() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}
