use anyhow::{Context, Result};

use crate::data::EarthquakeList;

/// Fetch the USGS GeoJSON feed and parse it into an EarthquakeList.
///
/// One blocking GET, the whole body read into a string, one parse. No
/// timeout and no retry: a failed fetch is reported to the caller, which
/// degrades to an empty list and a map with zero markers.
pub fn load_earthquakes(feed_url: &str) -> Result<EarthquakeList> {
    eprintln!("Fetching earthquake feed from {}", feed_url);

    let body = reqwest::blocking::get(feed_url)
        .with_context(|| format!("requesting {}", feed_url))?
        .text()
        .context("reading feed body")?;

    let list: EarthquakeList =
        serde_json::from_str(&body).context("parsing feed GeoJSON")?;

    eprintln!("Parsed {} events from feed", list.features.len());
    Ok(list)
}
