//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use rw_floodmon::reading::Reading;
use rw_floodmon::station::Station;

/// Shared application state for the station levels app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether the station catalog request is still outstanding
    pub loading_catalog: Signal<bool>,
    /// Stations for the dropdown, in catalog order
    pub stations: Signal<Vec<Station>>,
    /// Currently selected station reference; empty = placeholder
    pub selected_station: Signal<String>,
    /// Whether a readings request is in flight
    pub fetching: Signal<bool>,
    /// Readings on display: filtered to the trailing window, ascending
    pub readings: Signal<Vec<Reading>>,
    /// Last fetch succeeded but the window held no readings
    pub no_data: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            loading_catalog: Signal::new(true),
            stations: Signal::new(Vec::new()),
            selected_station: Signal::new(String::new()),
            fetching: Signal::new(false),
            readings: Signal::new(Vec::new()),
            no_data: Signal::new(false),
            error_msg: Signal::new(None),
        }
    }
}

/// A readings response is stale once the user has moved on to another
/// station. Stale responses must be discarded without touching display
/// state; only the current selection may render.
pub fn response_is_stale(issued_for: &str, currently_selected: &str) -> bool {
    issued_for != currently_selected
}

#[cfg(test)]
mod tests {
    use super::response_is_stale;

    #[test]
    fn test_matching_selection_is_fresh() {
        assert!(!response_is_stale("1029TH", "1029TH"));
    }

    #[test]
    fn test_changed_selection_discards_response() {
        // Selected 1029TH, switched to E2043 while the request was in flight:
        // the 1029TH response must not overwrite E2043's display.
        assert!(response_is_stale("1029TH", "E2043"));
    }

    #[test]
    fn test_cleared_selection_discards_response() {
        assert!(response_is_stale("1029TH", ""));
    }
}
