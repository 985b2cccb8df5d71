//! Uniform success/failure boundary around a [`CountrySource`].

use std::fmt;
use std::sync::Arc;

use crate::client::{CountrySource, FetchErrorKind};
use crate::country::Country;

/// Why a fetch attempt failed, reduced to something the UI can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FetchErrorKind,
    pub description: String,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl std::error::Error for FetchFailure {}

pub type FetchResult = Result<Vec<Country>, FetchFailure>;

/// Wraps a source so that every error comes back as a [`FetchFailure`].
pub struct CountryRepository<S> {
    source: Arc<S>,
}

impl<S> Clone for CountryRepository<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: CountrySource> CountryRepository<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    pub async fn fetch_countries(&self) -> FetchResult {
        match self.source.fetch().await {
            Ok(countries) => {
                tracing::debug!("Repository received {} countries", countries.len());
                Ok(countries)
            }
            Err(err) => {
                let kind = err.kind();
                tracing::warn!(error_type = kind.as_str(), "Country fetch failed: {}", err);
                Err(FetchFailure {
                    kind,
                    description: err.to_string(),
                })
            }
        }
    }
}
