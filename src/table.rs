//! Shared latest-value table.
//!
//! One entry per device, written by that device's reader thread and read by
//! the display loop. The mutex guards the whole map so a reader mid-publish
//! can never be observed as a half-updated tuple.

use crate::types::Reading;
use std::collections::HashMap;
use std::sync::Mutex;

/// Latest reading per device, keyed by device identifier (port path).
///
/// Keys are only ever inserted or overwritten, never removed during a run.
#[derive(Debug, Default)]
pub struct LatestTable {
    entries: Mutex<HashMap<String, Reading>>,
}

impl LatestTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the entry for `key` with a fresh reading
    pub fn publish(&self, key: &str, reading: Reading) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), reading);
    }

    /// Mark `key` as missing: all values absent, timestamp current.
    ///
    /// Used on read failure so a stale value is never displayed as current.
    pub fn publish_missing(&self, key: &str) {
        self.publish(key, Reading::missing());
    }

    /// Latest reading for `key`.
    ///
    /// A key that has never been published yields the all-absent default,
    /// indistinguishable from a device whose last read failed.
    pub fn latest(&self, key: &str) -> Reading {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned().unwrap_or_default()
    }
}
