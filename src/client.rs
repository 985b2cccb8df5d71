//! HTTP client for the countries endpoint.
//!
//! One unauthenticated `GET`, JSON array body, no retries.

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::country::Country;

/// Errors raised while fetching the countries payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network unreachable, connection reset, timeout
    #[error("Connection to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Server responded with {status}")]
    Protocol { status: StatusCode },

    /// Body is not a JSON array of country objects
    #[error("Invalid countries payload: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

/// Coarse classification used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    Transport,
    Protocol,
    Parse,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::Transport => "transport_error",
            FetchErrorKind::Protocol => "protocol_error",
            FetchErrorKind::Parse => "parse_error",
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Client(_) | FetchError::Transport { .. } => FetchErrorKind::Transport,
            FetchError::Protocol { .. } => FetchErrorKind::Protocol,
            FetchError::Parse { .. } => FetchErrorKind::Parse,
        }
    }
}

/// Anything that can produce the country list.
///
/// `CountryClient` is the production implementation; tests plug in
/// in-memory sources.
pub trait CountrySource: Send + Sync + 'static {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Country>, FetchError>> + Send;
}

pub struct CountryClient {
    client: Client,
    url: Url,
}

impl CountryClient {
    pub fn new(url: Url, timeout: Duration, connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn fetch(&self) -> Result<Vec<Country>, FetchError> {
        let started = Instant::now();
        tracing::debug!("GET {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|source| self.transport(source))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Protocol { status });
        }

        // Read the whole body first so a broken connection is reported as a
        // transport failure rather than a parse failure.
        let body = response
            .bytes()
            .await
            .map_err(|source| self.transport(source))?;

        let countries: Vec<Country> =
            serde_json::from_slice(&body).map_err(|source| FetchError::Parse { source })?;

        tracing::debug!(
            "Fetched {} countries ({} bytes) in {:?}",
            countries.len(),
            body.len(),
            started.elapsed()
        );
        Ok(countries)
    }

    fn transport(&self, source: reqwest::Error) -> FetchError {
        FetchError::Transport {
            url: self.url.to_string(),
            source,
        }
    }
}

impl CountrySource for CountryClient {
    fn fetch(&self) -> impl Future<Output = Result<Vec<Country>, FetchError>> + Send {
        CountryClient::fetch(self)
    }
}
