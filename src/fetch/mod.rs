//! Release-narrative fetching abstraction
//!
//! The primary abstraction is the [Fetcher] trait, which hides where
//! narrative text comes from. Concrete implementations:
//!
//! - [http::HttpFetcher]: a real implementation over a blocking HTTP client
//! - [mock::MockFetcher]: a scripted implementation for testing
//!
//! Most code should depend on the trait rather than a concrete
//! implementation, and go through [fetch_with_retry], which applies the
//! retry policy: "not found" is terminal and never retried, transient
//! failures are retried sequentially up to the attempt budget, and an
//! exhausted budget degrades to "no data" rather than an error.

pub mod http;
pub mod mock;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

use thiserror::Error;

/// Failure modes of a single fetch attempt.
///
/// "Not found" is a recognized, non-exceptional outcome meaning no
/// narrative text exists for the requested release; it is kept separate
/// from transient failures so the retry wrapper can short-circuit on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("resource not found")]
    NotFound,

    #[error("transient fetch failure: {0}")]
    Transient(String),
}

/// A single synchronous fetch of raw bytes from a URL
pub trait Fetcher {
    /// Fetch the resource at `url`.
    ///
    /// # Returns
    /// * `Ok(bytes)` - Raw response body
    /// * `Err(FetchError::NotFound)` - The resource does not exist
    /// * `Err(FetchError::Transient)` - A retryable failure
    fn fetch(&self, url: &str) -> std::result::Result<Vec<u8>, FetchError>;
}

/// Fetch with a bounded number of sequential attempts.
///
/// A "not found" outcome short-circuits after exactly one attempt,
/// regardless of the budget. Transient failures consume attempts; when the
/// budget is exhausted the result degrades to `None` instead of an error.
/// A budget of 0 is clamped to one attempt.
pub fn fetch_with_retry<F: Fetcher>(fetcher: &F, url: &str, max_attempts: u32) -> Option<Vec<u8>> {
    for _ in 0..max_attempts.max(1) {
        match fetcher.fetch(url) {
            Ok(bytes) => return Some(bytes),
            Err(FetchError::NotFound) => return None,
            Err(FetchError::Transient(_)) => continue,
        }
    }
    None
}
