//! Tabular listing of the readings on display.

use crate::state::AppState;
use dioxus::prelude::*;
use rw_utils::{dates, levels};

/// Table of the currently displayed readings, one row per reading,
/// oldest first (same order as the chart). Contents are replaced wholesale
/// whenever `AppState::readings` changes.
#[component]
pub fn ReadingsTable() -> Element {
    let state = use_context::<AppState>();
    let readings = state.readings.read().clone();

    if readings.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "overflow-x: auto; margin: 16px 0;",
            table {
                style: "width: 100%; border-collapse: collapse; background: white;",

                thead {
                    tr {
                        style: "background: #1565C0; color: white;",
                        th { style: "padding: 10px 12px; text-align: left; font-weight: 600;", "Time" }
                        th { style: "padding: 10px 12px; text-align: right; font-weight: 600;", "Level" }
                    }
                }

                tbody {
                    for (idx, reading) in readings.iter().enumerate() {
                        tr {
                            key: "{reading.date_time.timestamp()}",
                            style: if idx % 2 == 0 { "background: #f8f9fa;" } else { "background: white;" },
                            td {
                                style: "padding: 8px 12px; border-top: 1px solid #dee2e6;",
                                "{dates::format_timestamp(&reading.date_time)}"
                            }
                            td {
                                style: "padding: 8px 12px; text-align: right; border-top: 1px solid #dee2e6;",
                                "{levels::format_level(reading.value)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
