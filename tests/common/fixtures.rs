//! Feed bodies shaped like the USGS summary GeoJSON

/// Feed with four quakes, including one exactly at magnitude 5.0
pub const SIGNIFICANT_MONTH: &str = r#"{
  "type": "FeatureCollection",
  "metadata": {
    "generated": 1700100000000,
    "url": "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/significant_month.geojson",
    "title": "USGS Significant Earthquakes, Past Month",
    "status": 200,
    "api": "1.10.3",
    "count": 4
  },
  "features": [
    {
      "type": "Feature",
      "properties": {
        "mag": 6.8,
        "place": "San Francisco Bay Area, California",
        "time": 1700000000000,
        "updated": 1700050000000,
        "tz": null,
        "url": "https://earthquake.usgs.gov/earthquakes/eventpage/nc0001",
        "status": "reviewed",
        "tsunami": 1,
        "sig": 712
      },
      "geometry": { "type": "Point", "coordinates": [-122.4194, 37.7749, 10.0] },
      "id": "nc0001"
    },
    {
      "type": "Feature",
      "properties": {
        "mag": 5.0,
        "place": "Central Alaska",
        "time": 1699900000000,
        "updated": 1699950000000,
        "tz": null
      },
      "geometry": { "type": "Point", "coordinates": [-149.9003, 61.2181, 40.3] },
      "id": "ak0002"
    },
    {
      "type": "Feature",
      "properties": {
        "mag": 4.2,
        "place": "Southern Greece",
        "time": 1699800000000,
        "updated": 1699850000000,
        "tz": null
      },
      "geometry": { "type": "Point", "coordinates": [22.4194, 36.7749, 8.5] },
      "id": "us0003"
    },
    {
      "type": "Feature",
      "properties": {
        "mag": 7.1,
        "place": "near the east coast of Honshu, Japan",
        "time": 1699700000000,
        "updated": 1699750000000,
        "tz": null
      },
      "geometry": { "type": "Point", "coordinates": [141.9, 38.3, 35.0] },
      "id": "us0004"
    }
  ]
}"#;

/// Feed with no quakes at all
pub const EMPTY_FEED: &str = r#"{
  "type": "FeatureCollection",
  "metadata": {
    "generated": 1700100000000,
    "title": "USGS Significant Earthquakes, Past Month",
    "status": 200,
    "count": 0
  },
  "features": []
}"#;

/// Magnitudes in [`SIGNIFICANT_MONTH`], in feed order
pub const SIGNIFICANT_MONTH_MAGNITUDES: [f64; 4] = [6.8, 5.0, 4.2, 7.1];

/// First half of [`SIGNIFICANT_MONTH`], as a connection cut mid-body would leave it
pub fn truncated_feed() -> &'static str {
    &SIGNIFICANT_MONTH[..SIGNIFICANT_MONTH.len() / 2]
}
