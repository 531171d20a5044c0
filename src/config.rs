//! Configuration for the TF-Luna console readers
//!
//! Loads configuration from a TOML file; built-in defaults match the stock
//! sensor setup so both binaries run without any file at all.

use crate::devices::tfluna::constants::{
    DEFAULT_BAUD_RATE, DEFAULT_I2C_ADDR, DEFAULT_I2C_BUS, DEFAULT_SAMPLE_RATE_HZ,
    SAMPLE_RATE_MAX_HZ, SAMPLE_RATE_MIN_HZ,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Top-level application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub i2c: I2cConfig,
    pub uart: UartConfig,
    pub logging: LoggingConfig,
}

/// Single-sensor I2C poller configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I2cConfig {
    /// Linux I2C bus number (/dev/i2c-N)
    pub bus: u8,
    /// 7-bit device address
    pub address: u16,
    /// Delay between polls in milliseconds
    pub poll_interval_ms: u64,
    /// Backoff after a bus error in milliseconds
    pub error_backoff_ms: u64,
}

/// Dual-sensor UART aggregator configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UartConfig {
    /// One serial port per sensor; the delta is ports[0] minus ports[1]
    pub ports: Vec<String>,
    /// Baud rate for both ports
    pub baud_rate: u32,
    /// Sensor output rate in Hz (1-250)
    pub sample_rate_hz: u16,
    /// Display refresh interval in milliseconds
    pub display_interval_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Check limits the sensor hardware imposes
    pub fn validate(&self) -> Result<()> {
        if !(SAMPLE_RATE_MIN_HZ..=SAMPLE_RATE_MAX_HZ).contains(&self.uart.sample_rate_hz) {
            return Err(Error::InvalidParameter(format!(
                "sample_rate_hz must be {}..={}, got {}",
                SAMPLE_RATE_MIN_HZ, SAMPLE_RATE_MAX_HZ, self.uart.sample_rate_hz
            )));
        }
        if self.uart.ports.len() != 2 {
            return Err(Error::InvalidParameter(format!(
                "exactly two UART ports required, got {}",
                self.uart.ports.len()
            )));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            i2c: I2cConfig {
                bus: DEFAULT_I2C_BUS,
                address: DEFAULT_I2C_ADDR,
                poll_interval_ms: 50,
                error_backoff_ms: 200,
            },
            uart: UartConfig {
                ports: vec!["/dev/ttyS3".to_string(), "/dev/ttyS4".to_string()],
                baud_rate: DEFAULT_BAUD_RATE,
                sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
                display_interval_ms: 50,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

/// Parse a config path from command line arguments.
///
/// Supports `--config <path>`, `-c <path>`, and a bare positional path.
/// Returns `None` when no path was given; callers fall back to defaults.
pub fn config_path_from_args() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    for i in 1..args.len() {
        if (args[i] == "--config" || args[i] == "-c") && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }

    if args.len() > 1 && !args[1].starts_with('-') {
        return Some(args[1].clone());
    }

    None
}
