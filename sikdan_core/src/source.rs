//! Fetching the raw meal page markup.

use crate::Result;
use std::time::Duration;

/// Timeout applied to every fetch so a stalled request cannot block the
/// calling flow indefinitely
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of the raw multi-day meal page
///
/// The page is one document covering many days; callers re-fetch it for
/// every query and every search step. Nothing is cached across calls.
pub trait MealSource {
    /// Fetch the full page markup
    fn fetch(&self) -> Result<String>;
}

/// HTTP-backed source issuing a blocking GET against the school's menu page
pub struct HttpMealSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpMealSource {
    /// Create a source for the given endpoint URL with the default timeout
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    /// Create a source with an explicit per-request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// The endpoint this source fetches from
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MealSource for HttpMealSource {
    fn fetch(&self) -> Result<String> {
        tracing::debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send()?.error_for_status()?;
        let body = response.text()?;
        tracing::debug!("Fetched {} bytes of markup", body.len());
        Ok(body)
    }
}

/// Test doubles shared by the search and session tests
#[cfg(test)]
pub(crate) mod doubles {
    use super::MealSource;
    use crate::Result;

    /// Serves the same canned markup on every fetch
    pub struct StaticSource(pub String);

    impl MealSource for StaticSource {
        fn fetch(&self) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    /// Fails every fetch with an IO error
    pub struct FailingSource;

    impl MealSource for FailingSource {
        fn fetch(&self) -> Result<String> {
            Err(std::io::Error::new(std::io::ErrorKind::TimedOut, "connection stalled").into())
        }
    }

    /// Panics on fetch; used to prove an operation validated before fetching
    pub struct NoFetchSource;

    impl MealSource for NoFetchSource {
        fn fetch(&self) -> Result<String> {
            panic!("fetch must not be called");
        }
    }
}
