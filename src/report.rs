//! Threshold filtering and the plain-text report.
//!
//! Output goes to any [`std::io::Write`] so the binary can hand in stdout and
//! tests can hand in a `Vec<u8>`.

use std::io::Write;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::types::{FeedEnvelope, Record};

/// Line printed between report blocks
pub const SEPARATOR: &str =
    "-------------------------------------------------------------------";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// True if the record's magnitude is strictly above `minimum_magnitude`
///
/// A record exactly at the threshold does not match.
pub fn matches_threshold(record: &Record, minimum_magnitude: f64) -> bool {
    record.properties.mag > minimum_magnitude
}

/// Records above the threshold, in feed order
pub fn select(
    envelope: &FeedEnvelope,
    minimum_magnitude: f64,
) -> impl Iterator<Item = &Record> + '_ {
    envelope
        .records
        .iter()
        .filter(move |record| matches_threshold(record, minimum_magnitude))
}

/// Format a millisecond epoch timestamp as `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_event_time(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|t| t.format(TIME_FORMAT).to_string())
}

/// Write the banner shown before the record blocks
pub fn write_header<W: Write>(out: &mut W, minimum_magnitude: f64) -> Result<()> {
    writeln!(out, "{}", SEPARATOR)?;
    writeln!(
        out,
        "Earthquake(s) with magnitude {:.1} or higher in the last 30 days:",
        minimum_magnitude
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

/// Write one record block followed by a separator
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> Result<()> {
    let properties = &record.properties;
    let geometry = &record.geometry;

    writeln!(out, "Epicenter: {}", properties.place)?;
    writeln!(out, "Magnitude: {:.1}", properties.mag)?;
    match format_event_time(properties.time) {
        Some(time) => writeln!(out, "Time: {}", time)?,
        None => writeln!(out, "Time: {} ms", properties.time)?,
    }
    // Decoding guarantees two coordinates; a hand-built record without them prints NaN
    writeln!(
        out,
        "Longitude: {:.4}",
        geometry.longitude().unwrap_or(f64::NAN)
    )?;
    writeln!(
        out,
        "Latitude: {:.4}",
        geometry.latitude().unwrap_or(f64::NAN)
    )?;
    writeln!(out, "{}", SEPARATOR)?;
    Ok(())
}

/// Write a block for every record above the threshold and return how many matched
pub fn list_quakes<W: Write>(
    out: &mut W,
    envelope: &FeedEnvelope,
    minimum_magnitude: f64,
) -> Result<usize> {
    let mut total = 0;
    for record in select(envelope, minimum_magnitude) {
        write_record(out, record)?;
        total += 1;
    }
    Ok(total)
}

/// Write the closing count line
pub fn write_summary<W: Write>(out: &mut W, total: usize) -> Result<()> {
    writeln!(out, "Total number of Earthquakes: {}", total)?;
    Ok(())
}

/// Header, matching records and summary for an already decoded feed
pub fn write_report<W: Write>(
    out: &mut W,
    envelope: &FeedEnvelope,
    minimum_magnitude: f64,
) -> Result<usize> {
    write_header(out, minimum_magnitude)?;
    let total = list_quakes(out, envelope, minimum_magnitude)?;
    write_summary(out, total)?;
    Ok(total)
}
