//! Data processing for river level readings.
//!
//! Transforms raw API responses into the form the chart and table render:
//! restricted to a trailing time window and sorted chronologically.

/// Trailing time-window restriction for fetched readings.
pub mod window {
    use chrono::{DateTime, Duration, Utc};
    use rw_floodmon::reading::Reading;

    /// Length of the display window, in hours.
    pub const WINDOW_HOURS: i64 = 24;

    /// Start of the trailing display window ending at `now`.
    pub fn window_start(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::hours(WINDOW_HOURS)
    }

    /// Retain readings with `start <= t <= end` (both boundaries inclusive)
    /// and sort them ascending by timestamp.
    pub fn filter_window(
        readings: &[Reading],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Reading> {
        let mut in_window: Vec<Reading> = readings
            .iter()
            .filter(|r| r.date_time >= start && r.date_time <= end)
            .cloned()
            .collect();
        in_window.sort();
        in_window
    }

    /// Restrict readings to the trailing 24-hour window ending at `now`.
    ///
    /// Runs on every response, even when the request already carried a
    /// server-side `since=` bound: upstream ordering and bounds are not
    /// trusted. Idempotent — filtering an already filtered, sorted
    /// sequence returns it unchanged.
    pub fn filter_trailing_window(readings: &[Reading], now: DateTime<Utc>) -> Vec<Reading> {
        let in_window = filter_window(readings, window_start(now), now);
        log::debug!(
            "{} of {} readings within the trailing {}h window",
            in_window.len(),
            readings.len(),
            WINDOW_HOURS
        );
        in_window
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{TimeZone, Utc};

        fn reading(now: DateTime<Utc>, minutes_ago: i64, value: f64) -> Reading {
            Reading {
                date_time: now - Duration::minutes(minutes_ago),
                value,
            }
        }

        fn now() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
        }

        #[test]
        fn test_window_boundaries_inclusive() {
            let now = now();
            let readings = vec![
                reading(now, 0, 0.5),           // exactly at `now`
                reading(now, 24 * 60, 0.6),     // exactly at `now - 24h`
                reading(now, 24 * 60 + 1, 0.7), // one minute too old
                reading(now, -30, 0.8),         // clock skew: in the future
            ];
            let filtered = filter_trailing_window(&readings, now);
            assert_eq!(filtered.len(), 2);
            assert_eq!(filtered[0].value, 0.6);
            assert_eq!(filtered[1].value, 0.5);
        }

        #[test]
        fn test_drops_stale_readings() {
            let now = now();
            let readings = vec![reading(now, 60, 1.2), reading(now, 30 * 60, 9.9)];
            let filtered = filter_trailing_window(&readings, now);
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].value, 1.2);
        }

        #[test]
        fn test_sorts_ascending_from_arrival_order() {
            let now = now();
            // Newest-first arrival order, as `_sorted` returns them
            let readings = vec![
                reading(now, 15, 0.30),
                reading(now, 45, 0.29),
                reading(now, 30, 0.31),
            ];
            let filtered = filter_trailing_window(&readings, now);
            let minutes: Vec<i64> = filtered
                .iter()
                .map(|r| (now - r.date_time).num_minutes())
                .collect();
            assert_eq!(minutes, vec![45, 30, 15]);
        }

        #[test]
        fn test_filter_is_idempotent() {
            let now = now();
            let readings = vec![
                reading(now, 10, 0.1),
                reading(now, 25 * 60, 0.2),
                reading(now, 90, 0.3),
            ];
            let once = filter_trailing_window(&readings, now);
            let twice = filter_trailing_window(&once, now);
            assert_eq!(once.len(), twice.len());
            for (a, b) in once.iter().zip(twice.iter()) {
                assert_eq!(a.date_time, b.date_time);
                assert_eq!(a.value, b.value);
            }
        }

        #[test]
        fn test_empty_input() {
            assert!(filter_trailing_window(&[], now()).is_empty());
        }
    }
}
