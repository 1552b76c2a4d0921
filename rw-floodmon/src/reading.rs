//! Timestamped level readings from the flood-monitoring readings endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A single level measurement for a station, in metres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Instant the measurement was taken.
    #[serde(rename = "dateTime")]
    pub date_time: DateTime<Utc>,
    /// Measured level in metres relative to the station datum.
    pub value: f64,
}

/// Readings are identified and ordered by their timestamp. The endpoint
/// returns at most one reading per instant per station.
impl PartialEq for Reading {
    fn eq(&self, other: &Self) -> bool {
        self.date_time == other.date_time
    }
}

impl Eq for Reading {}

impl Ord for Reading {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date_time.cmp(&other.date_time)
    }
}

impl PartialOrd for Reading {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Envelope of a readings response.
#[derive(Debug, Deserialize)]
pub struct ReadingsResponse {
    pub items: Vec<Reading>,
}

impl ReadingsResponse {
    /// Parse a readings response body in arrival order. The endpoint does
    /// not guarantee chronological order even with `_sorted`.
    pub fn parse(body: &str) -> Result<Vec<Reading>, serde_json::Error> {
        let response: ReadingsResponse = serde_json::from_str(body)?;
        Ok(response.items)
    }
}

#[cfg(test)]
mod tests {
    use super::ReadingsResponse;
    use chrono::{TimeZone, Utc};

    // Trimmed from .../id/stations/1029TH/readings?_sorted&_limit=3
    const READINGS_BODY: &str = r#"{
        "@context": "http://environment.data.gov.uk/flood-monitoring/meta/context.jsonld",
        "items": [
            {
                "@id": "http://environment.data.gov.uk/flood-monitoring/data/readings/1029TH-level-stage-i-15_min-mASD/2026-08-06T09-45-00Z",
                "dateTime": "2026-08-06T09:45:00Z",
                "measure": "http://environment.data.gov.uk/flood-monitoring/id/measures/1029TH-level-stage-i-15_min-mASD",
                "value": 0.287
            },
            {
                "@id": "http://environment.data.gov.uk/flood-monitoring/data/readings/1029TH-level-stage-i-15_min-mASD/2026-08-06T09-30-00Z",
                "dateTime": "2026-08-06T09:30:00Z",
                "measure": "http://environment.data.gov.uk/flood-monitoring/id/measures/1029TH-level-stage-i-15_min-mASD",
                "value": 0.29
            }
        ]
    }"#;

    #[test]
    fn test_parse_readings() {
        let readings = ReadingsResponse::parse(READINGS_BODY).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].value, 0.287);
        assert_eq!(
            readings[0].date_time,
            Utc.with_ymd_and_hms(2026, 8, 6, 9, 45, 0).unwrap()
        );
    }

    #[test]
    fn test_readings_order_by_timestamp() {
        let mut readings = ReadingsResponse::parse(READINGS_BODY).unwrap();
        readings.sort();
        assert!(readings[0].date_time < readings[1].date_time);
    }
}
