//! Console line formatting.
//!
//! Purely presentational: absent values degrade to a fixed placeholder and
//! nothing in here can fail.

use crate::types::{RangeSample, Reading};

const PLACEHOLDER_M: &str = "  ---";
const PLACEHOLDER_DELTA: &str = "  --- ";

/// Distance in meters to two decimals, or the placeholder
pub fn fmt_distance_m(distance_m: Option<f32>) -> String {
    match distance_m {
        Some(d) => format!("{:5.2}", d),
        None => PLACEHOLDER_M.to_string(),
    }
}

/// Signed difference a minus b, or the placeholder if either is absent
pub fn fmt_delta_m(a: Option<f32>, b: Option<f32>) -> String {
    match (a, b) {
        (Some(a), Some(b)) => format!("{:+6.2}", a - b),
        _ => PLACEHOLDER_DELTA.to_string(),
    }
}

/// Short device label for a serial port path ("/dev/ttyS3" -> "ttyS3")
pub fn port_label(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// One display line for the dual-sensor aggregator
pub fn dual_line(label_a: &str, a: &Reading, label_b: &str, b: &Reading) -> String {
    format!(
        "{}: {} m | {}: {} m | Δ({}-{}): {} m",
        label_a,
        fmt_distance_m(a.distance_m),
        label_b,
        fmt_distance_m(b.distance_m),
        label_a,
        label_b,
        fmt_delta_m(a.distance_m, b.distance_m),
    )
}

/// One display line for the single-sensor register poller
pub fn range_line(sample: &RangeSample) -> String {
    if sample.is_reliable() {
        format!(
            "Distance: {:4} cm   (Amp={})",
            sample.distance_cm, sample.amplitude
        )
    } else {
        format!("Distance: --- cm   (unreliable, Amp={})", sample.amplitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_distance() {
        assert_eq!(fmt_distance_m(Some(1.5)), " 1.50");
        assert_eq!(fmt_distance_m(Some(12.345)), "12.35");
        assert_eq!(fmt_distance_m(None), "  ---");
    }

    #[test]
    fn test_fmt_delta_signed() {
        assert_eq!(fmt_delta_m(Some(1.23), Some(0.98)).trim(), "+0.25");
        assert_eq!(fmt_delta_m(Some(0.98), Some(1.23)).trim(), "-0.25");
        assert_eq!(fmt_delta_m(Some(1.0), Some(1.0)).trim(), "+0.00");
    }

    #[test]
    fn test_fmt_delta_absent_input() {
        assert_eq!(fmt_delta_m(None, Some(0.98)), "  --- ");
        assert_eq!(fmt_delta_m(Some(1.23), None), "  --- ");
        assert_eq!(fmt_delta_m(None, None), "  --- ");
    }

    #[test]
    fn test_port_label() {
        assert_eq!(port_label("/dev/ttyS3"), "ttyS3");
        assert_eq!(port_label("/dev/serial/by-id/usb-luna"), "usb-luna");
        assert_eq!(port_label("COM3"), "COM3");
    }

    #[test]
    fn test_range_line_reliable() {
        let sample = RangeSample {
            distance_cm: 200,
            amplitude: 150,
        };
        assert_eq!(range_line(&sample), "Distance:  200 cm   (Amp=150)");
    }

    #[test]
    fn test_range_line_unreliable() {
        let sample = RangeSample {
            distance_cm: 200,
            amplitude: 50,
        };
        assert_eq!(range_line(&sample), "Distance: --- cm   (unreliable, Amp=50)");
    }

    #[test]
    fn test_range_line_overexposed() {
        let sample = RangeSample {
            distance_cm: 3,
            amplitude: 0xFFFF,
        };
        assert_eq!(
            range_line(&sample),
            "Distance: --- cm   (unreliable, Amp=65535)"
        );
    }

    #[test]
    fn test_dual_line_with_missing_reading() {
        let a = Reading::new(1.50, 320, 25.0);
        let b = Reading::missing();
        let line = dual_line("ttyS3", &a, "ttyS4", &b);
        assert_eq!(line, "ttyS3:  1.50 m | ttyS4:   --- m | Δ(ttyS3-ttyS4):   ---  m");
    }

    #[test]
    fn test_dual_line_both_present() {
        let a = Reading::new(1.23, 320, 25.0);
        let b = Reading::new(0.98, 310, 25.0);
        let line = dual_line("ttyS3", &a, "ttyS4", &b);
        assert_eq!(line, "ttyS3:  1.23 m | ttyS4:  0.98 m | Δ(ttyS3-ttyS4):  +0.25 m");
    }
}
