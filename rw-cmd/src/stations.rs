//! Station catalog listing.

use log::info;
use rw_floodmon::client::FloodMonClient;
use std::time::Duration;

/// List the station catalog to stdout, in catalog order, optionally
/// restricted to stations whose river name contains `river`.
pub async fn run_stations(river: Option<&str>) -> anyhow::Result<()> {
    let api = FloodMonClient::new();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let stations = api.fetch_stations(&client).await?;
    info!("Catalog returned {} stations", stations.len());

    let needle = river.map(str::to_lowercase);
    let mut shown = 0usize;
    for station in &stations {
        if let Some(needle) = &needle {
            let on_river = station
                .river_name
                .as_deref()
                .is_some_and(|r| r.to_lowercase().contains(needle));
            if !on_river {
                continue;
            }
        }
        println!("{:<12} {}", station.station_reference, station.display_label());
        shown += 1;
    }

    if shown == 0 {
        println!("No stations matched.");
    }
    Ok(())
}
