//! Timestamp base for trace output.

use chrono::{DateTime, Local};
use std::sync::OnceLock;
use std::time::{Instant, SystemTime};

/// Monotonic/wall-clock anchor pair captured once per process
static ANCHOR: OnceLock<(Instant, SystemTime)> = OnceLock::new();

/// Current local time rendered as `HH:MM:SS.microseconds`.
///
/// The anchor is captured on first use; later calls derive the wall time
/// from the monotonic clock, so timestamps within one trace cannot step
/// backwards under a clock adjustment.
pub fn timestamp() -> String {
    let (start, wall) = *ANCHOR.get_or_init(|| (Instant::now(), SystemTime::now()));
    let now = wall + start.elapsed();
    let local: DateTime<Local> = now.into();
    local.format("%H:%M:%S%.6f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_shape() {
        let ts = timestamp();
        // HH:MM:SS.ffffff
        assert_eq!(ts.len(), 15);
        assert_eq!(&ts[2..3], ":");
        assert_eq!(&ts[5..6], ":");
        assert_eq!(&ts[8..9], ".");
        assert!(ts[9..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_timestamps_monotonic_within_process() {
        let a = timestamp();
        let b = timestamp();
        // fixed-width fields order lexicographically; skip an hour rollover
        if a[..2] == b[..2] {
            assert!(a <= b);
        }
    }
}
