use chrono::DateTime;
use serde::Deserialize;

pub const APP_ID: &str = "com.macbeth.Epicenter";
pub const USGS_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

/// Top-level shape of the USGS GeoJSON summary feed: a "features" collection,
/// one feature per earthquake.
///
/// https://earthquake.usgs.gov/earthquakes/feed/v1.0/geojson.php
#[derive(Debug, Deserialize, Clone, Default)]
pub struct EarthquakeList {
    #[serde(default)]
    pub features: Vec<EarthquakeEvent>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EarthquakeEvent {
    pub properties: EarthquakeDetail,
    pub geometry: EarthquakePoint,
}

/// The "properties" object of a feed feature. Every field can be JSON null
/// in the live feed, so they all deserialize as Option.
#[derive(Debug, Deserialize, Clone)]
pub struct EarthquakeDetail {
    #[serde(default)]
    pub place: Option<String>,
    /// Event time as epoch milliseconds.
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub alert: Option<String>,
    /// USGS event page for this earthquake.
    #[serde(default)]
    pub url: Option<String>,
}

/// The "geometry" object. GeoJSON stores the coordinate triple in
/// longitude, latitude, depth order.
#[derive(Debug, Deserialize, Clone)]
pub struct EarthquakePoint {
    pub coordinates: [f64; 3],
}

impl EarthquakePoint {
    pub fn longitude(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn latitude(&self) -> f64 {
        self.coordinates[1]
    }

    pub fn depth(&self) -> f64 {
        self.coordinates[2]
    }
}

impl EarthquakeEvent {
    pub fn magnitude(&self) -> Option<f64> {
        self.properties.mag
    }

    /// Multi-line text for the detail dialog. Returns None when the record
    /// is missing place, magnitude, or a valid timestamp; the caller logs
    /// and skips the dialog in that case.
    pub fn summary(&self) -> Option<String> {
        let place = self.properties.place.as_deref()?;
        let mag = self.properties.mag?;
        let time = self.properties.time.and_then(DateTime::from_timestamp_millis)?;

        Some(format!(
            "Location: {}\nTime: {}\nMagnitude: {}\nLatitude: {}\nLongitude: {}\nDepth: {} km\nAlert: {}",
            place,
            time.format("%Y-%m-%d %H:%M:%S UTC"),
            mag,
            self.geometry.latitude(),
            self.geometry.longitude(),
            self.geometry.depth(),
            self.properties.alert.as_deref().unwrap_or("none"),
        ))
    }
}
