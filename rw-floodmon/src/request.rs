//! Request planning for the readings endpoint.
//!
//! Each selection issues a server-side time-bounded request first and falls
//! back to a single unbounded "latest readings" request. The plan is an
//! ordered list of attempts with a stop-on-first-success rule, evaluated by
//! the client's `fetch_recent_readings`.

use chrono::{DateTime, Utc};

/// Result count cap for the bounded query. At a 15-minute cadence a full
/// 24-hour window holds 96 readings, so 200 leaves ample headroom.
pub const BOUNDED_LIMIT: u32 = 200;

/// Result count cap for the unbounded fallback query.
pub const LATEST_LIMIT: u32 = 100;

/// Timestamp format accepted by the `since=` query parameter.
const SINCE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// One attempt against a station's readings endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingsRequest {
    /// Server-side time-bounded request (`since=`).
    Since(DateTime<Utc>),
    /// Unbounded "latest readings" request.
    Latest,
}

impl ReadingsRequest {
    /// Ordered attempt plan for one selection: bounded first, then one
    /// unbounded fallback. The fallback runs both when the bounded attempt
    /// fails and when it succeeds with zero readings.
    pub fn plan(window_start: DateTime<Utc>) -> [ReadingsRequest; 2] {
        [ReadingsRequest::Since(window_start), ReadingsRequest::Latest]
    }

    /// Query string for this attempt. `_sorted` asks the server for
    /// newest-first ordering, but the response is re-sorted client-side
    /// regardless.
    pub fn query(&self) -> String {
        match self {
            ReadingsRequest::Since(since) => format!(
                "_sorted&_limit={}&since={}",
                BOUNDED_LIMIT,
                since.format(SINCE_FORMAT)
            ),
            ReadingsRequest::Latest => format!("_sorted&_limit={}", LATEST_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReadingsRequest, BOUNDED_LIMIT, LATEST_LIMIT};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_plan_is_bounded_then_latest() {
        let start = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let plan = ReadingsRequest::plan(start);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0], ReadingsRequest::Since(start));
        assert_eq!(plan[1], ReadingsRequest::Latest);
    }

    #[test]
    fn test_bounded_query_string() {
        let start = Utc.with_ymd_and_hms(2026, 8, 5, 12, 30, 0).unwrap();
        let query = ReadingsRequest::Since(start).query();
        assert_eq!(
            query,
            format!("_sorted&_limit={}&since=2026-08-05T12:30:00Z", BOUNDED_LIMIT)
        );
    }

    #[test]
    fn test_latest_query_string() {
        assert_eq!(
            ReadingsRequest::Latest.query(),
            format!("_sorted&_limit={}", LATEST_LIMIT)
        );
    }
}
