use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::data::USGS_FEED_URL;

/// Runtime settings with the fixed policy choices of the viewer as defaults:
/// the USGS all-day feed, the 2.0 magnitude floor for rendering a marker,
/// and the 1000x800 window.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub feed_url: String,
    pub min_magnitude: f64,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_url: USGS_FEED_URL.to_string(),
            min_magnitude: 2.0,
            window_width: 1000,
            window_height: 800,
        }
    }
}

impl Config {
    /// Read the user config, falling back to defaults when the file is
    /// missing or unreadable. A file that parses but omits keys only
    /// overrides the keys it names.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(_) => return Config::default(),
        };

        match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring invalid config at {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("epicenter").join("config.toml"))
    }
}
