//! Reusable Dioxus RSX components for the station levels app.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod no_data_notice;
mod readings_table;
mod station_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use no_data_notice::NoDataNotice;
pub use readings_table::ReadingsTable;
pub use station_selector::StationSelector;
