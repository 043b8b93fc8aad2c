//! Fetching and decoding the earthquake feed.
//!
//! [`FeedClient`] issues a single GET against the configured feed URL with a
//! default `reqwest` client: no timeout, no retries, no extra headers. The
//! response body is owned by the returned [`reqwest::Response`] and is released
//! when it is dropped, whether decoding succeeds or not.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::FeedEnvelope;
use tracing::debug;
use url::Url;

/// HTTP client bound to one feed URL
pub struct FeedClient {
    /// HTTP client for fetching the feed
    http_client: reqwest::Client,

    /// Feed to request
    url: Url,
}

impl FeedClient {
    /// Create a client for the feed named in `config`
    ///
    /// # Errors
    /// Returns error if the feed URL cannot be parsed or the HTTP client
    /// cannot be created
    pub fn new(config: &Config) -> Result<Self> {
        let url = Url::parse(&config.feed_url)?;
        let http_client = reqwest::Client::builder().build()?;

        Ok(Self { http_client, url })
    }

    /// The feed URL this client requests
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Send the GET request and check the status
    ///
    /// # Errors
    /// Returns [`Error::Fetch`] on transport failure (DNS, refused connection,
    /// reset) and [`Error::HttpStatus`] if the server does not answer 2xx.
    pub async fn fetch(&self) -> Result<reqwest::Response> {
        debug!("Fetching earthquake feed: {}", self.url);

        let response = self.http_client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: self.url.to_string(),
            });
        }

        Ok(response)
    }

    /// Fetch and decode the feed in one step
    pub async fn fetch_feed(&self) -> Result<FeedEnvelope> {
        let response = self.fetch().await?;
        decode_response(response).await
    }
}

/// Read the whole response body and decode it
///
/// Consumes the response, so the connection is released on every path out of
/// this function.
///
/// # Errors
/// Returns [`Error::Fetch`] if the body cannot be read and any error from
/// [`decode`] otherwise.
pub async fn decode_response(response: reqwest::Response) -> Result<FeedEnvelope> {
    let body = response.bytes().await?;
    debug!("Read {} bytes of feed body", body.len());
    decode(&body)
}

/// Decode a feed body and validate every record
///
/// # Errors
/// Returns [`Error::Decode`] for malformed JSON or a type mismatch, and
/// [`Error::MissingCoordinates`] / [`Error::InvalidEventTime`] for records the
/// report cannot print.
pub fn decode(body: &[u8]) -> Result<FeedEnvelope> {
    let envelope: FeedEnvelope = serde_json::from_slice(body)?;
    envelope.validate()?;

    let metadata = &envelope.metadata;
    debug!(
        title = %metadata.title,
        count = metadata.count,
        generated = ?metadata.generated_time(),
        "Decoded feed with {} records",
        envelope.records.len()
    );

    Ok(envelope)
}
