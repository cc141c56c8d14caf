use crate::fetch::{FetchError, Fetcher};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Mock fetcher for testing without network access.
///
/// Outcomes can be scripted per call with [MockFetcher::push]; when the
/// script is exhausted the configured fallback outcome is returned. The
/// mock counts calls so tests can assert on the retry policy.
pub struct MockFetcher {
    script: RefCell<VecDeque<Result<Vec<u8>, FetchError>>>,
    fallback: Result<Vec<u8>, FetchError>,
    calls: Cell<u32>,
}

impl MockFetcher {
    /// Create a mock whose fallback outcome is a transient failure
    pub fn new() -> Self {
        MockFetcher {
            script: RefCell::new(VecDeque::new()),
            fallback: Err(FetchError::Transient("no scripted response".to_string())),
            calls: Cell::new(0),
        }
    }

    /// Create a mock that always returns the given body
    pub fn with_body(body: &[u8]) -> Self {
        MockFetcher {
            script: RefCell::new(VecDeque::new()),
            fallback: Ok(body.to_vec()),
            calls: Cell::new(0),
        }
    }

    /// Create a mock that always reports the resource as missing
    pub fn not_found() -> Self {
        MockFetcher {
            script: RefCell::new(VecDeque::new()),
            fallback: Err(FetchError::NotFound),
            calls: Cell::new(0),
        }
    }

    /// Create a mock that always fails transiently
    pub fn always_transient() -> Self {
        MockFetcher {
            script: RefCell::new(VecDeque::new()),
            fallback: Err(FetchError::Transient("scripted failure".to_string())),
            calls: Cell::new(0),
        }
    }

    /// Queue an outcome for the next unscripted call
    pub fn push(&self, outcome: Result<Vec<u8>, FetchError>) {
        self.script.borrow_mut().push_back(outcome);
    }

    /// Number of fetch calls made so far
    pub fn call_count(&self) -> u32 {
        self.calls.get()
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for MockFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match self.script.borrow_mut().pop_front() {
            Some(outcome) => outcome,
            None => self.fallback.clone(),
        }
    }
}
