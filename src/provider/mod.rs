//! provider
//!
//! Abstraction for hosted AI APIs.
//!
//! # Architecture
//!
//! The `Provider` trait defines the single capability the assistant needs:
//! send one prompt, get one reply. Commands use the [`create_provider`]
//! factory rather than importing specific provider implementations.
//!
//! # Modules
//!
//! - `traits`: Core `Provider` trait, `Completion`, and `ProviderError`
//! - [`anthropic`]: Anthropic Messages API client
//! - [`openai`]: OpenAI stub (recognised, not implemented)
//! - [`mock`]: Mock implementation for deterministic testing
//! - `factory`: Provider selection and creation
//!
//! # Example
//!
//! ```ignore
//! use aiterm::core::config::Config;
//! use aiterm::provider::create_provider;
//!
//! let provider = create_provider(&config)?;
//! let completion = provider.complete("How do I find large files?").await?;
//! println!("{}", completion.text);
//! ```

pub mod anthropic;
mod factory;
pub mod mock;
pub mod openai;
mod traits;

pub use factory::{create_provider, ProviderKind};
pub use traits::*;
