//! tfluna-io - Console readers for Benewake TF-Luna lidar sensors
//!
//! This library backs two small binaries:
//!
//! - `luna-i2c`: single-sensor register poller over the Linux I2C bus
//! - `luna-uart`: dual-sensor UART aggregator with one reader thread per
//!   port and a shared latest-value table feeding a display loop

pub mod config;
pub mod devices;
pub mod display;
pub mod error;
pub mod table;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{Error, Result};
pub use table::LatestTable;
pub use types::{RangeSample, Reading};
