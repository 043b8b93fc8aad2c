//! Feed data model
//!
//! Mirrors the GeoJSON layout of the USGS summary feeds. Unknown fields are
//! ignored, and both missing fields and JSON `null` decode to the zero value
//! so that the live feed (which sends `"tz": null` on most records) decodes
//! cleanly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Top-level feed document
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedEnvelope {
    /// GeoJSON type tag, normally `FeatureCollection`
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// Information about the feed itself
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,

    /// Earthquake records in feed order
    #[serde(rename = "features", default, deserialize_with = "null_as_default")]
    pub records: Vec<Record>,
}

/// Feed metadata block
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Generation time in milliseconds since the Unix epoch
    #[serde(default, deserialize_with = "null_as_default")]
    pub generated: i64,

    /// Canonical URL of the feed
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Human-readable feed title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// HTTP status the feed generator reported
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,

    /// Feed API version
    #[serde(default, deserialize_with = "null_as_default")]
    pub api: String,

    /// Number of records the generator says it emitted
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: i64,
}

impl Metadata {
    /// Generation time as a UTC date-time
    pub fn generated_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.generated)
    }
}

/// One earthquake event
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// GeoJSON type tag, normally `Feature`
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// Event attributes
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: Properties,

    /// Event location
    #[serde(default, deserialize_with = "null_as_default")]
    pub geometry: Geometry,
}

/// Event attributes
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Properties {
    /// Magnitude
    #[serde(default, deserialize_with = "null_as_default")]
    pub mag: f64,

    /// Description of the epicenter, e.g. "10 km SSW of Somewhere"
    #[serde(default, deserialize_with = "null_as_default")]
    pub place: String,

    /// Event time in milliseconds since the Unix epoch
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: i64,

    /// Last update in milliseconds since the Unix epoch
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated: i64,

    /// Timezone offset in minutes
    #[serde(default, deserialize_with = "null_as_default")]
    pub tz: i64,

    /// Longitude, when the feed repeats it in the properties block
    #[serde(default, deserialize_with = "null_as_default")]
    pub longitude: f64,

    /// Latitude, when the feed repeats it in the properties block
    #[serde(default, deserialize_with = "null_as_default")]
    pub latitude: f64,
}

impl Properties {
    /// Event time as a UTC date-time, `None` if the timestamp is out of range
    pub fn event_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.time)
    }

    /// Last update as a UTC date-time, `None` if the timestamp is out of range
    pub fn updated_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.updated)
    }
}

/// Event location
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// GeoJSON geometry tag, normally `Point`
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,

    /// `[longitude, latitude, depth?]`
    #[serde(default, deserialize_with = "null_as_default")]
    pub coordinates: Vec<f64>,
}

impl Geometry {
    /// First coordinate, if present
    pub fn longitude(&self) -> Option<f64> {
        self.coordinates.first().copied()
    }

    /// Second coordinate, if present
    pub fn latitude(&self) -> Option<f64> {
        self.coordinates.get(1).copied()
    }

    /// Depth in kilometers, when the feed supplies a third coordinate
    pub fn depth(&self) -> Option<f64> {
        self.coordinates.get(2).copied()
    }
}

impl FeedEnvelope {
    /// Check the invariants the reporter relies on
    ///
    /// Every record needs a longitude and latitude and an event time that
    /// converts to a UTC date-time.
    pub fn validate(&self) -> Result<()> {
        for (index, record) in self.records.iter().enumerate() {
            let len = record.geometry.coordinates.len();
            if len < 2 {
                return Err(Error::MissingCoordinates { index, len });
            }
            if record.properties.event_time().is_none() {
                return Err(Error::InvalidEventTime {
                    index,
                    millis: record.properties.time,
                });
            }
        }
        Ok(())
    }
}

/// Treat an explicit JSON `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
