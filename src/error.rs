//! Error types for quake-report
//!
//! Errors fall into three groups:
//! - Argument errors (non-fatal, the caller falls back to a default threshold)
//! - Fetch errors (transport failures, bad HTTP status, bad feed URL)
//! - Decode errors (malformed JSON, type mismatches, records that fail validation)

use thiserror::Error;

/// Result type alias for quake-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for quake-report
#[derive(Debug, Error)]
pub enum Error {
    /// The minimum magnitude argument is not a usable number
    #[error("invalid magnitude {value:?}: {reason}")]
    InvalidMagnitude {
        /// The raw argument as given on the command line
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The configured feed URL cannot be parsed
    #[error("invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Network error while requesting or reading the feed
    #[error("failed to fetch earthquake feed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The feed answered with a non-success status
    #[error("earthquake feed returned HTTP {status}: {url}")]
    HttpStatus {
        /// HTTP status code returned by the server
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The feed body is not valid JSON or does not match the feed schema
    #[error("failed to decode earthquake feed: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record has fewer than two coordinates
    #[error("feature {index} has {len} coordinate(s), expected at least longitude and latitude")]
    MissingCoordinates {
        /// Position of the record in the feed
        index: usize,
        /// Number of coordinates actually present
        len: usize,
    },

    /// A record's event time cannot be represented as a UTC date-time
    #[error("feature {index} has an out-of-range event time: {millis}")]
    InvalidEventTime {
        /// Position of the record in the feed
        index: usize,
        /// The raw millisecond timestamp
        millis: i64,
    },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns true if the error should abort the run
    ///
    /// Only a bad magnitude argument is recoverable: the threshold falls back to 0.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::InvalidMagnitude { .. })
    }

    /// Returns true for errors raised while decoding or validating the feed body
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            Error::Decode(_) | Error::MissingCoordinates { .. } | Error::InvalidEventTime { .. }
        )
    }

    /// Returns true for errors raised while talking to the feed server
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Error::Fetch(_) | Error::HttpStatus { .. } | Error::InvalidUrl(_)
        )
    }
}
