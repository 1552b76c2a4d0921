//! Station metadata from the flood-monitoring catalog endpoint.

use serde::{Deserialize, Serialize};

/// A monitoring station as returned by `/id/stations`.
///
/// The catalog carries many more fields (coordinates, catchment, measures);
/// only the ones the viewer needs are deserialized, the rest are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Stable station reference code, e.g. "1029TH".
    #[serde(rename = "stationReference")]
    pub station_reference: String,
    /// Human-readable station name.
    pub label: String,
    /// River the station sits on, where known.
    #[serde(rename = "riverName", default, skip_serializing_if = "Option::is_none")]
    pub river_name: Option<String>,
}

impl Station {
    /// Dropdown text: the label, annotated with the river name where known.
    pub fn display_label(&self) -> String {
        match &self.river_name {
            Some(river) => format!("{} ({})", self.label, river),
            None => self.label.clone(),
        }
    }
}

/// Envelope of the station catalog response.
#[derive(Debug, Deserialize)]
pub struct StationListResponse {
    pub items: Vec<Station>,
}

impl StationListResponse {
    /// Parse a catalog response body, preserving the order of `items`.
    pub fn parse(body: &str) -> Result<Vec<Station>, serde_json::Error> {
        let response: StationListResponse = serde_json::from_str(body)?;
        Ok(response.items)
    }
}

#[cfg(test)]
mod tests {
    use super::StationListResponse;

    // Trimmed from https://environment.data.gov.uk/flood-monitoring/id/stations
    const CATALOG_BODY: &str = r#"{
        "@context": "http://environment.data.gov.uk/flood-monitoring/meta/context.jsonld",
        "items": [
            {
                "@id": "http://environment.data.gov.uk/flood-monitoring/id/stations/1029TH",
                "stationReference": "1029TH",
                "label": "Bourton Dickler",
                "riverName": "River Dikler",
                "town": "Little Rissington",
                "lat": 51.874767,
                "long": -1.740083
            },
            {
                "@id": "http://environment.data.gov.uk/flood-monitoring/id/stations/E2043",
                "stationReference": "E2043",
                "label": "Surfleet Sluice",
                "riverName": "River Glen",
                "town": "Surfleet"
            },
            {
                "@id": "http://environment.data.gov.uk/flood-monitoring/id/stations/52119",
                "stationReference": "52119",
                "label": "Pilton"
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog_preserves_order() {
        let stations = StationListResponse::parse(CATALOG_BODY).unwrap();
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[0].station_reference, "1029TH");
        assert_eq!(stations[1].station_reference, "E2043");
        assert_eq!(stations[2].station_reference, "52119");
    }

    #[test]
    fn test_river_name_is_optional() {
        let stations = StationListResponse::parse(CATALOG_BODY).unwrap();
        assert_eq!(stations[0].river_name.as_deref(), Some("River Dikler"));
        assert_eq!(stations[2].river_name, None);
    }

    #[test]
    fn test_display_label() {
        let stations = StationListResponse::parse(CATALOG_BODY).unwrap();
        assert_eq!(stations[0].display_label(), "Bourton Dickler (River Dikler)");
        assert_eq!(stations[2].display_label(), "Pilton");
    }
}
