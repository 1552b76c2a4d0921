//! Readings fetch for a single station.

use chrono::{Duration as ChronoDuration, Utc};
use log::info;
use rw_data::window;
use rw_floodmon::client::FloodMonClient;
use rw_floodmon::reading::Reading;
use rw_utils::{dates, levels};
use std::time::Duration;

/// Fetch a station's readings for the trailing `hours` window and print
/// them as a table, or write them to `output_csv` when given.
///
/// Uses the same attempt plan as the web app (bounded request, one
/// unbounded fallback) and the same client-side window filter, so the two
/// surfaces always agree on what "recent" means.
pub async fn run_readings(
    station: &str,
    hours: i64,
    output_csv: Option<&str>,
) -> anyhow::Result<()> {
    let api = FloodMonClient::new();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let now = Utc::now();
    let start = now - ChronoDuration::hours(hours);

    let raw = api.fetch_recent_readings(&client, station, start).await?;
    let readings = window::filter_window(&raw, start, now);
    info!(
        "{} readings in the last {} hours for {}",
        readings.len(),
        hours,
        station
    );

    if readings.is_empty() {
        println!("No readings in the last {} hours for {}.", hours, station);
        return Ok(());
    }

    match output_csv {
        Some(path) => {
            write_csv(path, &readings)?;
            println!("Wrote {} readings to {}", readings.len(), path);
        }
        None => {
            for reading in &readings {
                println!(
                    "{}  {:>10}",
                    dates::format_timestamp(&reading.date_time),
                    levels::format_level(reading.value)
                );
            }
        }
    }
    Ok(())
}

/// One CSV record per reading: RFC 3339 timestamp, level in metres.
fn csv_record(reading: &Reading) -> [String; 2] {
    [
        reading.date_time.to_rfc3339(),
        format!("{:.3}", reading.value),
    ]
}

fn write_csv(path: &str, readings: &[Reading]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["dateTime", "value"])?;
    for reading in readings {
        writer.write_record(csv_record(reading))?;
    }
    writer.flush()?;
    Ok(())
}
