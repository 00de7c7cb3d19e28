//! provider::anthropic
//!
//! Anthropic Messages API client.
//!
//! # Design
//!
//! One `POST /v1/messages` per prompt with the fixed system instruction and a
//! single user message. Only the first text block of the reply is used.
//!
//! # Error Mapping
//!
//! - Transport failures → `ProviderError::Network`
//! - 401 / 403 → `ProviderError::AuthFailed`
//! - 429 → `ProviderError::RateLimited`
//! - any other non-2xx → `ProviderError::Api`
//! - a 2xx reply with an unexpected shape → the fixed text
//!   [`UNEXPECTED_RESPONSE`], not an error
//!
//! There is no retry and no timeout beyond reqwest's defaults.
//!
//! # Example
//!
//! ```ignore
//! use aiterm::provider::anthropic::AnthropicProvider;
//! use aiterm::provider::Provider;
//!
//! let provider = AnthropicProvider::new("sk-ant-...");
//! let completion = provider.complete("How do I undo a git commit?").await?;
//! ```

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{Completion, Provider, ProviderError};
use crate::core::config::schema::{
    ProviderSettings, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use crate::core::prompt::SYSTEM_INSTRUCTION;

/// Default Anthropic API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.anthropic.com";

/// Required `anthropic-version` header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Text returned when a successful reply carries no usable text block.
pub const UNEXPECTED_RESPONSE: &str = "Error: Received unexpected response format from API.";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = concat!("aiterm/", env!("CARGO_PKG_VERSION"));

/// Anthropic provider.
pub struct AnthropicProvider {
    /// HTTP client for making requests
    client: Client,
    /// API key sent as `x-api-key`
    api_key: String,
    /// Model identifier
    model: String,
    /// Response token limit
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
    /// API base URL (configurable for proxies and tests)
    api_base: String,
}

// Custom Debug to avoid exposing api_key
impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl AnthropicProvider {
    /// Create a provider with default model parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    /// Create a provider from a config block.
    ///
    /// Missing values fall back to the schema defaults.
    pub fn from_settings(settings: &ProviderSettings) -> Self {
        Self::new(settings.api_key().unwrap_or_default())
            .with_model(settings.model())
            .with_max_tokens(settings.max_tokens())
            .with_temperature(settings.temperature())
            .with_api_base(settings.base_url().unwrap_or(DEFAULT_API_BASE))
    }

    /// Set the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the response token limit.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the API base URL. A trailing slash is ignored.
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Get the API base URL.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build the messages endpoint URL.
    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.api_base)
    }

    /// Build request headers.
    fn headers(&self) -> Result<HeaderMap, ProviderError> {
        let key = HeaderValue::from_str(&self.api_key).map_err(|_| ProviderError::AuthFailed {
            status: 0,
            message: "API key contains characters not allowed in a header".into(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", key);
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    /// Build the request body for `prompt`.
    fn request_body<'a>(&'a self, prompt: &'a str) -> MessagesRequest<'a> {
        MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            system: SYSTEM_INSTRUCTION,
            messages: vec![MessagePayload {
                role: "user",
                content: prompt,
            }],
        }
    }

    /// Handle the API response, mapping errors appropriately.
    async fn handle_response(&self, response: Response) -> Result<Completion, ProviderError> {
        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(response, status).await);
        }

        // A 2xx reply that is not JSON is a shape anomaly, not a failure.
        match response.json::<serde_json::Value>().await {
            Ok(body) => Ok(extract_completion(body)),
            Err(e) => {
                tracing::debug!(error = %e, "API response body is not JSON");
                Ok(Completion::new(UNEXPECTED_RESPONSE))
            }
        }
    }

    /// Map an error response from the API.
    async fn handle_error_response(response: Response, status: StatusCode) -> ProviderError {
        let message = match response.json::<ApiErrorResponse>().await {
            Ok(err) => err.error.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthFailed {
                status: status.as_u16(),
                message,
            },
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited(message),
            _ => ProviderError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl Provider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, ProviderError> {
        tracing::debug!(
            model = %self.model,
            max_tokens = self.max_tokens,
            temperature = self.temperature,
            prompt_len = prompt.len(),
            "calling Anthropic API"
        );

        let response = self
            .client
            .post(self.messages_url())
            .headers(self.headers()?)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let completion = self.handle_response(response).await?;
        tracing::debug!(
            model = completion.model.as_deref().unwrap_or("-"),
            stop_reason = completion.stop_reason.as_deref().unwrap_or("-"),
            "API call successful"
        );
        Ok(completion)
    }
}

/// Extract the text of the first content block from a successful reply.
///
/// Falls back to [`UNEXPECTED_RESPONSE`] when the first block is missing or
/// is not a text block, or when the reply does not look like a Messages API
/// reply at all. Later blocks are never consulted.
pub fn extract_completion(body: serde_json::Value) -> Completion {
    let parsed: MessagesResponse = match serde_json::from_value(body) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::debug!(error = %e, "unexpected API response structure");
            return Completion::new(UNEXPECTED_RESPONSE);
        }
    };

    match parsed.content.into_iter().next() {
        Some(ResponseBlock::Text { text }) => Completion {
            text: text.trim().to_string(),
            model: parsed.model,
            stop_reason: parsed.stop_reason,
        },
        _ => {
            tracing::debug!("first API response block is missing or not text");
            Completion::new(UNEXPECTED_RESPONSE)
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<MessagePayload<'a>>,
}

#[derive(Debug, Serialize)]
struct MessagePayload<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}
