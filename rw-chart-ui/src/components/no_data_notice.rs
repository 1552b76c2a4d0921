//! Notice for stations with no readings in the display window.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NoDataNoticeProps {
    pub station_label: String,
}

/// Neutral "no recent data" notice. Deliberately styled and worded unlike
/// [`super::ErrorDisplay`]: an empty window is not a failure.
#[component]
pub fn NoDataNotice(props: NoDataNoticeProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; color: #1565C0; border-radius: 4px; border: 1px solid #90CAF9;",
            "No readings in the last 24 hours for {props.station_label}."
        }
    }
}
