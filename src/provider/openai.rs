//! provider::openai
//!
//! OpenAI stub.
//!
//! The provider name is accepted so configs can select it, but every call
//! returns `ProviderError::NotImplemented` without touching the network.

use async_trait::async_trait;

use super::traits::{Completion, Provider, ProviderError};

/// Message returned for every call.
pub const NOT_READY: &str = "OpenAI support is not fully implemented yet.";

/// OpenAI provider stub.
#[derive(Debug, Clone, Default)]
pub struct OpenAiProvider;

impl OpenAiProvider {
    /// Create the stub.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, _prompt: &str) -> Result<Completion, ProviderError> {
        Err(ProviderError::NotImplemented(NOT_READY.to_string()))
    }
}
