//! # quake-report
//!
//! Fetches the USGS significant-earthquake feed for the past 30 days and
//! prints every quake whose magnitude is strictly above a threshold.
//!
//! The work is a three-stage pipeline, each stage usable on its own:
//! - [`feed::FeedClient`] issues one GET against the feed URL
//! - [`feed::decode`] turns the body into a [`FeedEnvelope`]
//! - [`report`] filters the records and writes the plain-text report
//!
//! ## Quick Start
//!
//! ```no_run
//! use quake_report::{Config, run};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::with_minimum_magnitude(5.0);
//!     let total = run(&config, &mut std::io::stdout()).await?;
//!     eprintln!("{} quake(s) listed", total);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Command-line arguments
pub mod cli;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Feed fetching and decoding
pub mod feed;
/// Threshold filter and text report
pub mod report;
/// Feed data model
pub mod types;

// Re-export commonly used types
pub use config::{Config, USGS_SIGNIFICANT_MONTH_URL};
pub use error::{Error, Result};
pub use feed::FeedClient;
pub use types::{FeedEnvelope, Geometry, Metadata, Properties, Record};

use std::io::Write;

/// Fetch the feed named in `config` and write the report to `out`.
///
/// Nothing is written until the feed has been fetched and decoded, so a
/// failed run leaves `out` untouched. Returns the number of listed quakes.
///
/// # Errors
/// Returns the first fetch, decode or write error.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    let client = FeedClient::new(config)?;
    let envelope = client.fetch_feed().await?;

    let total = report::write_report(out, &envelope, config.minimum_magnitude)?;
    out.flush()?;

    tracing::debug!(total, "Report written");
    Ok(total)
}
