//! Reader thread for UART TF-Luna sensors.
//!
//! One loop per sensor, publishing every decoded frame into the shared
//! latest-value table until the stop flag is raised.

use super::TfLuna;
use crate::table::LatestTable;
use crate::transport::Transport;
use crate::types::Reading;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Pause after a failed read cycle before retrying
const READ_RETRY_DELAY_MS: u64 = 20;

/// Reader loop - publishes the latest frame until shutdown is signaled.
///
/// The stop flag is checked at the top of every cycle; once it is set, no
/// further transport reads are issued. A failed cycle overwrites the table
/// entry with an all-absent reading so the display degrades to the
/// placeholder instead of showing a stale distance as current.
pub fn reader_loop<T: Transport>(
    mut sensor: TfLuna<T>,
    key: String,
    table: Arc<LatestTable>,
    shutdown: Arc<AtomicBool>,
) {
    while !shutdown.load(Ordering::Relaxed) {
        match sensor.read_frame() {
            Ok(Some(frame)) => {
                table.publish(
                    &key,
                    Reading::new(frame.distance_m, frame.signal_strength, frame.temperature_c),
                );
            }
            Ok(None) => {
                // No complete frame yet
                thread::sleep(Duration::from_millis(1));
            }
            Err(e) => {
                log::debug!("{}: read error: {}", key, e);
                table.publish_missing(&key);
                thread::sleep(Duration::from_millis(READ_RETRY_DELAY_MS));
            }
        }
    }

    log::info!("{}: reader thread exiting", key);
}

#[cfg(test)]
mod tests {
    use super::super::protocol::checksum;
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
    fn test_no_reads_after_cancellation() {
        let mock = MockTransport::new();
        mock.inject_read(&make_frame(100, 200, 2048));

        let table = Arc::new(LatestTable::new());
        let shutdown = Arc::new(AtomicBool::new(true));

        reader_loop(
            TfLuna::new(mock.clone()),
            "/dev/ttyS3".to_string(),
            Arc::clone(&table),
            shutdown,
        );

        assert_eq!(mock.read_calls(), 0);
        assert!(table.latest("/dev/ttyS3").distance_m.is_none());
    }

    #[test]
    fn test_frame_is_published() {
        let mock = MockTransport::new();
        mock.inject_read(&make_frame(123, 456, 2368));

        let table = Arc::new(LatestTable::new());
        let shutdown = Arc::new(AtomicBool::new(false));

        let thread_table = Arc::clone(&table);
        let thread_shutdown = Arc::clone(&shutdown);
        let sensor = TfLuna::new(mock);
        let handle = thread::spawn(move || {
            reader_loop(sensor, "/dev/ttyS3".to_string(), thread_table, thread_shutdown);
        });

        thread::sleep(Duration::from_millis(50));
        shutdown.store(true, Ordering::Relaxed);
        handle.join().unwrap();

        let reading = table.latest("/dev/ttyS3");
        assert_eq!(reading.signal_strength, Some(456));
        assert!((reading.distance_m.unwrap() - 1.23).abs() < 1e-6);
    }

    #[test]
    fn test_read_failure_publishes_missing() {
        let mock = MockTransport::new();
        mock.fail_reads();

        let table = Arc::new(LatestTable::new());
        // A value from an earlier cycle that must not survive the failure
        table.publish("/dev/ttyS4", Reading::new(9.99, 999, 30.0));

        let shutdown = Arc::new(AtomicBool::new(false));
        let thread_table = Arc::clone(&table);
        let thread_shutdown = Arc::clone(&shutdown);
        let sensor = TfLuna::new(mock);
        let handle = thread::spawn(move || {
            reader_loop(sensor, "/dev/ttyS4".to_string(), thread_table, thread_shutdown);
        });

        thread::sleep(Duration::from_millis(50));
        shutdown.store(true, Ordering::Relaxed);
        handle.join().unwrap();

        let reading = table.latest("/dev/ttyS4");
        assert!(reading.distance_m.is_none());
        assert!(reading.timestamp_us > 0);
    }
}
