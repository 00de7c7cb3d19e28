//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Example
//!
//! ```yaml
//! api_provider: anthropic
//! debug_mode: false
//! auto_fix_errors: true
//!
//! anthropic:
//!   api_key: sk-ant-...
//!   model: claude-3-sonnet-20240229
//!   max_tokens: 500
//!   temperature: 0.5
//! ```
//!
//! Every top-level mapping other than the flags is treated as a provider
//! block keyed by provider name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default model when a provider block does not name one.
pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";

/// Default response token limit.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Prefix used by the shipped template for unfilled API keys.
pub const PLACEHOLDER_KEY_PREFIX: &str = "YOUR_";

/// Raw configuration file contents, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    /// Name of the provider block to use (e.g., "anthropic")
    pub api_provider: Option<String>,

    /// Enable debug logging
    pub debug_mode: bool,

    /// Allow the shell hook to request fixes automatically
    pub auto_fix_errors: bool,

    /// Provider blocks keyed by provider name
    #[serde(flatten)]
    pub providers: BTreeMap<String, ProviderSettings>,
}

/// Settings for a single provider block.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProviderSettings {
    /// API key sent with every request
    pub api_key: Option<String>,

    /// Model identifier
    pub model: Option<String>,

    /// Maximum tokens in the response
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    pub temperature: Option<f32>,

    /// API base URL override (proxies, local gateways)
    pub base_url: Option<String>,
}

// Custom Debug to avoid exposing api_key
impl std::fmt::Debug for ProviderSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSettings")
            .field("has_api_key", &self.api_key.is_some())
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderSettings {
    /// The API key, if one is set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Whether the key still holds the template placeholder.
    pub fn has_placeholder_key(&self) -> bool {
        self.api_key
            .as_deref()
            .is_some_and(|k| k.starts_with(PLACEHOLDER_KEY_PREFIX))
    }

    /// Model identifier, defaulting to [`DEFAULT_MODEL`].
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Token limit, defaulting to [`DEFAULT_MAX_TOKENS`].
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Temperature, defaulting to [`DEFAULT_TEMPERATURE`].
    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Base URL override, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags_and_provider_blocks() {
        let yaml = r#"
api_provider: anthropic
debug_mode: true
auto_fix_errors: true
anthropic:
  api_key: sk-test
  model: claude-3-haiku-20240307
  max_tokens: 256
  temperature: 0.2
openai:
  api_key: sk-openai
"#;
        let file: ConfigFile = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(file.api_provider.as_deref(), Some("anthropic"));
        assert!(file.debug_mode);
        assert!(file.auto_fix_errors);
        assert_eq!(file.providers.len(), 2);

        let anthropic = &file.providers["anthropic"];
        assert_eq!(anthropic.api_key(), Some("sk-test"));
        assert_eq!(anthropic.model(), "claude-3-haiku-20240307");
        assert_eq!(anthropic.max_tokens(), 256);
        assert!((anthropic.temperature() - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn flags_default_to_false() {
        let file: ConfigFile = serde_yaml::from_str("api_provider: anthropic\n").unwrap();

        assert!(!file.debug_mode);
        assert!(!file.auto_fix_errors);
        assert!(file.providers.is_empty());
    }

    #[test]
    fn settings_defaults() {
        let settings = ProviderSettings::default();

        assert_eq!(settings.model(), DEFAULT_MODEL);
        assert_eq!(settings.max_tokens(), DEFAULT_MAX_TOKENS);
        assert!((settings.temperature() - DEFAULT_TEMPERATURE).abs() < f32::EPSILON);
        assert!(settings.base_url().is_none());
    }

    #[test]
    fn blank_key_is_absent() {
        let settings = ProviderSettings {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(settings.api_key().is_none());
    }

    #[test]
    fn placeholder_key_detected() {
        let settings = ProviderSettings {
            api_key: Some("YOUR_ANTHROPIC_API_KEY".to_string()),
            ..Default::default()
        };
        assert!(settings.has_placeholder_key());
    }

    #[test]
    fn debug_redacts_api_key() {
        let settings = ProviderSettings {
            api_key: Some("sk-secret-value".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", settings);

        assert!(!debug.contains("sk-secret-value"));
        assert!(debug.contains("has_api_key: true"));
    }
}
