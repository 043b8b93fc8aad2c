//! Command-line arguments
//!
//! The only input is an optional positional threshold. A value that does not
//! parse as a number is not an error for the run: it is logged and the
//! threshold falls back to 0. `inf` and `NaN` parse, and are used as given.

use clap::Parser;
use tracing::warn;

use crate::config::Config;
use crate::error::{Error, Result};

/// quake-report command line
#[derive(Parser, Debug, Clone)]
#[command(
    name = "quake-report",
    version,
    about = "List significant earthquakes from the past 30 days above a magnitude threshold"
)]
pub struct Args {
    /// Only list earthquakes with a magnitude above this value (default: 0)
    #[arg(value_name = "MINIMUM_MAGNITUDE", allow_negative_numbers = true)]
    pub minimum_magnitude: Option<String>,
}

impl Args {
    /// Effective threshold, falling back to 0 for a missing or bad argument
    pub fn minimum_magnitude(&self) -> f64 {
        parse_minimum_magnitude(self.minimum_magnitude.as_deref())
    }

    /// Build the run configuration for the public feed
    pub fn into_config(self) -> Config {
        Config::with_minimum_magnitude(self.minimum_magnitude())
    }
}

/// Parse a magnitude argument strictly
///
/// # Errors
/// Returns [`Error::InvalidMagnitude`] if the value is not a number
pub fn try_parse_magnitude(value: &str) -> Result<f64> {
    value.parse::<f64>().map_err(|e| Error::InvalidMagnitude {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Threshold for an optional argument: absent or invalid means 0
pub fn parse_minimum_magnitude(value: Option<&str>) -> f64 {
    match value {
        None => 0.0,
        Some(raw) => try_parse_magnitude(raw).unwrap_or_else(|e| {
            warn!("{}, using default of 0", e);
            0.0
        }),
    }
}
