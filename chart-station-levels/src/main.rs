//! River Levels by Station
//!
//! Dropdown of Environment Agency monitoring stations; selecting one
//! fetches its recent readings, restricts them to the trailing 24-hour
//! window and renders a D3.js line chart plus a table.
//!
//! Data flow:
//! 1. On mount, the station catalog is fetched once and fills the dropdown.
//! 2. A selection change spawns one async task: fetch (bounded request,
//!    one unbounded fallback) -> 24 h window filter -> chart + table.
//! 3. A response arriving after the user has switched station is discarded;
//!    only the current selection may update the display.

use chrono::Utc;
use dioxus::prelude::*;
use rw_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, NoDataNotice, ReadingsTable,
    StationSelector,
};
use rw_chart_ui::js_bridge;
use rw_chart_ui::state::{response_is_stale, AppState};
use rw_data::window;
use rw_floodmon::client::FloodMonClient;
use rw_floodmon::reading::Reading;

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "station-level-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("station-levels-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the station catalog once on mount. No retry: a failure leaves
    // the selector empty and surfaces the error.
    use_effect(move || {
        js_bridge::init_charts();
        spawn(async move {
            let api = FloodMonClient::new();
            let http = reqwest::Client::new();
            match api.fetch_stations(&http).await {
                Ok(stations) => {
                    log::info!("Loaded {} stations", stations.len());
                    state.stations.set(stations);
                }
                Err(e) => {
                    log::error!("Failed to load station catalog: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to load station list: {}", e)));
                }
            }
            state.loading_catalog.set(false);
        });
    });

    // Fetch, filter and render whenever the selection changes.
    use_effect(move || {
        let station = (state.selected_station)();
        if station.is_empty() {
            return;
        }

        spawn(async move {
            state.fetching.set(true);
            state.error_msg.set(None);
            state.no_data.set(false);

            let api = FloodMonClient::new();
            let http = reqwest::Client::new();
            let now = Utc::now();
            let result = api
                .fetch_recent_readings(&http, &station, window::window_start(now))
                .await;

            // The user may have moved on while the request was in flight.
            if response_is_stale(&station, &(state.selected_station)()) {
                log::info!("Discarding stale readings response for {}", station);
                return;
            }
            state.fetching.set(false);

            match result {
                Ok(readings) => {
                    let in_window = window::filter_trailing_window(&readings, now);
                    if in_window.is_empty() {
                        log::info!("No readings in the display window for {}", station);
                        state.readings.set(Vec::new());
                        js_bridge::destroy_chart(CHART_ID);
                        state.no_data.set(true);
                        return;
                    }
                    let label = station_label(&state, &station);
                    render_readings_chart(CHART_ID, &label, &in_window);
                    state.readings.set(in_window);
                }
                Err(e) => {
                    log::error!("Failed to fetch readings for {}: {}", station, e);
                    state.readings.set(Vec::new());
                    js_bridge::destroy_chart(CHART_ID);
                    state
                        .error_msg
                        .set(Some(format!("Failed to fetch readings: {}", e)));
                }
            }
        });
    });

    let selected_label = {
        let station = (state.selected_station)();
        if station.is_empty() {
            String::new()
        } else {
            station_label(&state, &station)
        }
    };

    rsx! {
        div {
            style: "padding: 16px; max-width: 960px; margin: 0 auto; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "River Levels by Station".to_string(),
                unit_description: "Metres (m) - stage level relative to the station datum".to_string(),
            }

            if (state.loading_catalog)() {
                LoadingSpinner { message: "Loading stations...".to_string() }
            } else {
                // Selector stays visible after any failure so a new
                // selection can retry.
                StationSelector {}

                if let Some(err) = (state.error_msg)() {
                    ErrorDisplay { message: err }
                }

                if (state.fetching)() {
                    LoadingSpinner { message: "Loading readings...".to_string() }
                } else if (state.no_data)() {
                    NoDataNotice { station_label: selected_label }
                } else if !state.readings.read().is_empty() {
                    ChartContainer {
                        id: CHART_ID.to_string(),
                        min_height: 380,
                    }
                    ReadingsTable {}
                }
            }
        }
    }
}

/// Dropdown label for a station reference, falling back to the raw
/// reference when the catalog does not know it.
fn station_label(state: &AppState, station_reference: &str) -> String {
    state
        .stations
        .read()
        .iter()
        .find(|s| s.station_reference == station_reference)
        .map(|s| s.display_label())
        .unwrap_or_else(|| station_reference.to_string())
}

/// Render the level line chart for the selected station.
///
/// Serializes the filtered readings and hands them to the D3 bridge, which
/// disposes any prior chart in the container before drawing. Chart and
/// table are updated in the same synchronous continuation, so the user
/// never sees a mix of old and new data.
fn render_readings_chart(chart_id: &str, station_label: &str, readings: &[Reading]) {
    let data_json = serde_json::to_string(readings).unwrap_or_default();
    let config_json = serde_json::to_string(&serde_json::json!({
        "title": format!("River level: {}", station_label),
        "yAxisLabel": "Level (m)",
        "lineColor": "#1565C0",
        "decimals": 2,
    }))
    .unwrap_or_default();

    js_bridge::render_level_chart(chart_id, &data_json, &config_json);
}
