//! Dual-sensor TF-Luna aggregator over UART.
//!
//! One reader thread per sensor publishes into a shared latest-value table;
//! the main thread prints both distances and their delta at its own cadence
//! until Ctrl-C, then signals the readers and waits a bounded time for each.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tfluna_io::config::{self, AppConfig};
use tfluna_io::devices::tfluna::reader::reader_loop;
use tfluna_io::devices::tfluna::TfLuna;
use tfluna_io::display;
use tfluna_io::error::{Error, Result};
use tfluna_io::table::LatestTable;

/// Bound on waiting for a reader thread at shutdown
const JOIN_TIMEOUT_MS: u64 = 500;

fn main() -> Result<()> {
    let config = match config::config_path_from_args() {
        Some(path) => AppConfig::from_file(&path)?,
        None => AppConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let shutdown = Arc::new(AtomicBool::new(false));
    let s = Arc::clone(&shutdown);
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        s.store(true, Ordering::Relaxed);
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    let table = Arc::new(LatestTable::new());
    let mut readers: Vec<(String, JoinHandle<()>)> = Vec::new();

    for port in &config.uart.ports {
        // A failed setup step skips this sensor, not the whole program
        let mut sensor = match TfLuna::open(port, config.uart.baud_rate) {
            Ok(sensor) => sensor,
            Err(e) => {
                log::warn!("Setup failed on {}: {}", port, e);
                continue;
            }
        };

        match sensor.get_version() {
            Ok(version) => log::info!(
                "TF-Luna @ {} ({} baud) | FW: {} | {} Hz",
                port,
                config.uart.baud_rate,
                version,
                config.uart.sample_rate_hz
            ),
            Err(e) => log::warn!("Version query failed on {}: {}", port, e),
        }
        if let Err(e) = sensor.set_sample_rate(config.uart.sample_rate_hz) {
            log::warn!("Sample rate setup failed on {}: {}", port, e);
        }

        let key = port.clone();
        let thread_table = Arc::clone(&table);
        let thread_shutdown = Arc::clone(&shutdown);
        let handle = thread::Builder::new()
            .name(format!("tfluna-{}", display::port_label(port)))
            .spawn(move || {
                reader_loop(sensor, key, thread_table, thread_shutdown);
            })
            .map_err(|e| Error::Other(format!("Failed to spawn reader thread: {}", e)))?;
        readers.push((port.clone(), handle));
    }

    let label_a = display::port_label(&config.uart.ports[0]);
    let label_b = display::port_label(&config.uart.ports[1]);

    println!("Streaming... Ctrl-C to stop.");
    while !shutdown.load(Ordering::Relaxed) {
        let a = table.latest(&config.uart.ports[0]);
        let b = table.latest(&config.uart.ports[1]);
        println!("{}", display::dual_line(label_a, &a, label_b, &b));
        thread::sleep(Duration::from_millis(config.uart.display_interval_ms));
    }

    println!("Stopping...");
    for (port, handle) in readers {
        join_with_timeout(handle, Duration::from_millis(JOIN_TIMEOUT_MS), &port);
    }

    log::info!("Stopped");
    Ok(())
}

/// Best-effort bounded join. A reader that fails to exit in time is
/// abandoned with a warning; shutdown proceeds regardless.
fn join_with_timeout(handle: JoinHandle<()>, timeout: Duration, port: &str) {
    let deadline = Instant::now() + timeout;
    while !handle.is_finished() {
        if Instant::now() >= deadline {
            log::warn!(
                "{}: reader thread did not exit within {:?}; abandoning",
                port,
                timeout
            );
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    if handle.join().is_err() {
        log::warn!("{}: reader thread panicked", port);
    }
}
