//! Single-sensor TF-Luna reader over the Linux I2C bus.
//!
//! Synchronous poll loop: read the distance and amplitude registers, apply
//! the reliability filter, print one line per poll. Bus errors are shown
//! inline and retried after a backoff; Ctrl-C exits cleanly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tfluna_io::config::{self, AppConfig};
use tfluna_io::devices::tfluna::i2c::TfLunaI2c;
use tfluna_io::display;
use tfluna_io::error::{Error, Result};

fn main() -> Result<()> {
    let config = match config::config_path_from_args() {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        r.store(false, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    // The only configured device: a failed open here ends the program
    let mut sensor = TfLunaI2c::open(config.i2c.bus, config.i2c.address)?;
    log::info!(
        "TF-Luna on /dev/i2c-{} at address {:#04x}",
        config.i2c.bus,
        config.i2c.address
    );

    println!("TF-Luna I2C reader (distance in cm). Press Ctrl-C to stop.");

    while running.load(Ordering::Relaxed) {
        match sensor.read_sample() {
            Ok(sample) => {
                println!("{}", display::range_line(&sample));
                thread::sleep(Duration::from_millis(config.i2c.poll_interval_ms));
            }
            Err(e) => {
                // Bus hiccup (e.g. sensor not connected yet): show and retry
                println!("I2C error: {}", e);
                thread::sleep(Duration::from_millis(config.i2c.error_backoff_ms));
            }
        }
    }

    log::info!("Exiting");
    Ok(())
}
