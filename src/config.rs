//! Configuration types for quake-report

use serde::{Deserialize, Serialize};

/// USGS feed of significant earthquakes over the past 30 days
pub const USGS_SIGNIFICANT_MONTH_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_month.geojson";

/// Settings for a single report run
///
/// The binary fills this in from the command line; the feed URL is only
/// overridden by tests that point the client at a local server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GeoJSON feed to request (default: [`USGS_SIGNIFICANT_MONTH_URL`])
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Records must have a magnitude strictly greater than this (default: 0.0)
    #[serde(default)]
    pub minimum_magnitude: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            minimum_magnitude: 0.0,
        }
    }
}

impl Config {
    /// Config for the public USGS feed with the given threshold
    pub fn with_minimum_magnitude(minimum_magnitude: f64) -> Self {
        Self {
            minimum_magnitude,
            ..Default::default()
        }
    }
}

fn default_feed_url() -> String {
    USGS_SIGNIFICANT_MONTH_URL.to_string()
}
