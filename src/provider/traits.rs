//! provider::traits
//!
//! Provider trait definition for hosted AI APIs.
//!
//! # Design
//!
//! The `Provider` trait is async because completions involve network I/O.
//! Every call is a single attempt: failures are returned, never retried.
//!
//! # Example
//!
//! ```ignore
//! use aiterm::provider::{Provider, ProviderError};
//!
//! async fn ask(provider: &dyn Provider) -> Result<(), ProviderError> {
//!     let completion = provider.complete("How do I list files?").await?;
//!     println!("{}", completion.text);
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

/// Errors from provider operations.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// The configured provider name is not supported.
    #[error("Unknown API provider '{0}' configured.")]
    UnknownProvider(String),

    /// The provider is recognised but has no client yet.
    #[error("{0}")]
    NotImplemented(String),

    /// The API rejected the credentials (HTTP 401/403).
    #[error("authentication failed (status {status}): {message}")]
    AuthFailed {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Rate limit exceeded (HTTP 429).
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// API returned any other error status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    Network(String),
}

impl ProviderError {
    /// Whether the error points at a bad or unauthorised API key.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ProviderError::AuthFailed { .. })
    }
}

/// A successful completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Reply text, trimmed of surrounding whitespace
    pub text: String,
    /// Model that produced the reply, when reported
    pub model: Option<String>,
    /// Why generation stopped, when reported
    pub stop_reason: Option<String>,
}

impl Completion {
    /// Create a completion with only text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            model: None,
            stop_reason: None,
        }
    }
}

/// The Provider trait for sending a prompt to a hosted AI API.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be driven by any
/// tokio runtime.
///
/// # Error Handling
///
/// Callers report the error and print nothing; there is no retry:
/// - `AuthFailed`: suggest checking the API key
/// - `NotImplemented`: warn that the provider is not ready
/// - everything else: print the error
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name (e.g., "anthropic").
    fn name(&self) -> &'static str;

    /// Send `prompt` as a single user message and return the reply.
    async fn complete(&self, prompt: &str) -> Result<Completion, ProviderError>;
}
