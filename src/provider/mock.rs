//! provider::mock
//!
//! Mock provider implementation for deterministic testing.
//!
//! # Design
//!
//! The mock provider answers every prompt with a canned completion (or a
//! configured error) and records each prompt it receives, so tests can
//! assert both what was sent and whether anything was sent at all.
//!
//! # Example
//!
//! ```
//! use aiterm::provider::mock::MockProvider;
//! use aiterm::provider::Provider;
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::with_response("Use `ls`.");
//!
//! let completion = provider.complete("list files").await.unwrap();
//! assert_eq!(completion.text, "Use `ls`.");
//! assert_eq!(provider.prompts(), vec!["list files".to_string()]);
//! # });
//! ```

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::{Completion, Provider, ProviderError};

/// Default reply text.
pub const DEFAULT_MOCK_RESPONSE: &str = "mock response";

/// Mock provider for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone)]
pub struct MockProvider {
    inner: Arc<Mutex<MockProviderInner>>,
}

#[derive(Debug)]
struct MockProviderInner {
    /// Reply returned for every prompt.
    reply: Result<Completion, ProviderError>,
    /// Prompts received, in order.
    prompts: Vec<String>,
}

impl MockProvider {
    /// Create a mock that answers with [`DEFAULT_MOCK_RESPONSE`].
    pub fn new() -> Self {
        Self::with_response(DEFAULT_MOCK_RESPONSE)
    }

    /// Create a mock that answers with `text`.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(Completion::new(text)))
    }

    /// Create a mock that fails every call with `error`.
    ///
    /// # Example
    ///
    /// ```
    /// use aiterm::provider::mock::MockProvider;
    /// use aiterm::provider::ProviderError;
    ///
    /// let provider = MockProvider::failing(ProviderError::Network("offline".into()));
    /// ```
    pub fn failing(error: ProviderError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<Completion, ProviderError>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockProviderInner {
                reply,
                prompts: Vec::new(),
            })),
        }
    }

    /// Get all prompts received so far.
    pub fn prompts(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        inner.prompts.clone()
    }

    /// Number of calls made.
    pub fn call_count(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.prompts.len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, ProviderError> {
        let mut inner = self.inner.lock().unwrap();
        inner.prompts.push(prompt.to_string());
        inner.reply.clone()
    }
}
