//! provider::factory
//!
//! Provider selection and creation.
//!
//! # Design
//!
//! The configured `api_provider` string is resolved once into the closed
//! [`ProviderKind`] set, then into a boxed [`Provider`]. Commands use
//! `create_provider()` and never name a concrete client.
//!
//! # Example
//!
//! ```ignore
//! use aiterm::provider::{create_provider, ProviderKind};
//!
//! assert_eq!(ProviderKind::parse("anthropic"), Some(ProviderKind::Anthropic));
//!
//! let provider = create_provider(&config)?;
//! assert_eq!(provider.name(), "anthropic");
//! ```

use super::anthropic::AnthropicProvider;
use super::openai::OpenAiProvider;
use super::traits::{Provider, ProviderError};
use crate::core::config::Config;

/// Supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Anthropic Messages API
    Anthropic,
    /// OpenAI (stub)
    OpenAi,
}

impl ProviderKind {
    /// Get all known providers.
    ///
    /// # Example
    ///
    /// ```
    /// use aiterm::provider::ProviderKind;
    ///
    /// assert!(ProviderKind::all().contains(&ProviderKind::Anthropic));
    /// ```
    pub fn all() -> &'static [ProviderKind] {
        &[ProviderKind::Anthropic, ProviderKind::OpenAi]
    }

    /// Get the provider name as used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::OpenAi => "openai",
        }
    }

    /// Parse a provider from a string (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use aiterm::provider::ProviderKind;
    ///
    /// assert_eq!(ProviderKind::parse("Anthropic"), Some(ProviderKind::Anthropic));
    /// assert_eq!(ProviderKind::parse("unknown"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "anthropic" => Some(ProviderKind::Anthropic),
            "openai" => Some(ProviderKind::OpenAi),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Create the provider selected by `config`.
///
/// # Errors
///
/// - `ProviderError::UnknownProvider` if `api_provider` names no known provider
pub fn create_provider(config: &Config) -> Result<Box<dyn Provider>, ProviderError> {
    let name = config.api_provider();
    let kind = ProviderKind::parse(name)
        .ok_or_else(|| ProviderError::UnknownProvider(name.to_string()))?;

    tracing::debug!(provider = %kind, "resolved API provider");

    let settings = config.provider_settings();
    match kind {
        ProviderKind::Anthropic => Ok(Box::new(AnthropicProvider::from_settings(settings))),
        ProviderKind::OpenAi => Ok(Box::new(OpenAiProvider::new())),
    }
}
