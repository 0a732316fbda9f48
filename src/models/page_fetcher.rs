use crate::types::RawMarkup;
use crate::Error;
#[cfg(feature = "fetch")]
use log::{info, warn};
#[cfg(feature = "fetch")]
use std::time::Duration;

/// Source of raw page markup.
///
/// Implementations return `Ok(None)` when the page could not be obtained (e.g. a
/// non-200 response) and reserve `Err` for transport failures.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<Option<RawMarkup>, Error>;
}

/// Blocking HTTP fetcher backed by `reqwest`.
#[cfg(feature = "fetch")]
pub struct HttpPageFetcher {
    client: reqwest::blocking::Client,
    timeout: Option<Duration>,
}

#[cfg(feature = "fetch")]
impl HttpPageFetcher {
    /// Fetcher without a request timeout; a slow page is waited on indefinitely.
    pub fn new() -> Result<Self, Error> {
        Self::build(None)
    }

    /// Fetcher whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, Error> {
        Self::build(Some(timeout))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    // The blocking client defaults to a 30s timeout, so `None` must be passed explicitly.
    fn build(timeout: Option<Duration>) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(HttpPageFetcher { client, timeout })
    }
}

#[cfg(feature = "fetch")]
impl PageFetcher for HttpPageFetcher {
    fn fetch(&self, url: &str) -> Result<Option<RawMarkup>, Error> {
        info!("Fetching {}...", url);

        let response = self.client.get(url).send()?;
        let status = response.status();

        if status != reqwest::StatusCode::OK {
            warn!("Request to {} returned status {}", url, status);
            return Ok(None);
        }

        Ok(Some(response.text()?))
    }
}
