//! Shared utility functions for River Watch crates.

/// Timestamp helpers for the API wire format and display.
pub mod dates {
    use chrono::{DateTime, Utc};

    /// Format a timestamp for display: "2026-08-06 09:45 UTC".
    pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
        ts.format("%Y-%m-%d %H:%M UTC").to_string()
    }

    /// Parse an ISO 8601 timestamp as used by the flood-monitoring API.
    pub fn parse_timestamp(s: &str) -> anyhow::Result<DateTime<Utc>> {
        Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
    }

}

/// Level value formatting.
pub mod levels {
    /// Format a level in metres to two decimal places: "1.20 m".
    pub fn format_level(value: f64) -> String {
        format!("{:.2} m", value)
    }

    #[cfg(test)]
    mod tests {
        use super::format_level;

        #[test]
        fn test_format_level() {
            assert_eq!(format_level(1.2), "1.20 m");
            assert_eq!(format_level(0.287), "0.29 m");
        }

        #[test]
        fn test_format_level_negative() {
            // Stage levels below the station datum are valid
            assert_eq!(format_level(-0.05), "-0.05 m");
        }
    }
}
