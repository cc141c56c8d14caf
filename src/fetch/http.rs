use crate::fetch::{FetchError, Fetcher};
use reqwest::blocking::Client;
use reqwest::StatusCode;

/// Real fetcher over a blocking HTTP client.
///
/// HTTP 404 maps to [FetchError::NotFound]; every other failure (network
/// errors, non-success statuses) maps to [FetchError::Transient] and is
/// subject to the caller's retry budget.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client
    pub fn new() -> Self {
        HttpFetcher {
            client: Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", concat!("relcut/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| FetchError::Transient(e.to_string()))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !response.status().is_success() {
            return Err(FetchError::Transient(format!(
                "HTTP {}",
                response.status()
            )));
        }

        response
            .bytes()
            .map(|bytes| bytes.to_vec())
            .map_err(|e| FetchError::Transient(e.to_string()))
    }
}
