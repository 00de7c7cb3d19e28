//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Builds a prompt
//! 3. Sends it through the configured provider
//! 4. Prints the reply, or nothing if the call failed
//!
//! # Async Calls
//!
//! Providers are async because they perform network I/O. Handlers stay
//! synchronous and drive the single request on a current-thread tokio
//! runtime.

mod build;
mod chat;
mod completion;
mod fix;
mod hook;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use chat::chat;
pub use completion::{completion, write_completion};
pub use fix::{fix, fix_error, internal_fix_error};
pub use hook::{hook, hook_script};

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::core::config::Config;
use crate::provider::{create_provider, Completion, Provider, ProviderError};
use crate::ui::output;

/// Hint printed after an authentication failure.
const AUTH_HINT: &str = "Check if your API key is correct and has permissions.";

/// Shared state for command handlers.
///
/// Built once per invocation from the validated configuration. The provider
/// is resolved here; an unknown provider is kept as an error and reported
/// by the first handler that needs it.
pub struct Context {
    /// Validated configuration
    pub config: Config,
    provider: Result<Box<dyn Provider>, ProviderError>,
}

impl Context {
    /// Create a context, resolving the configured provider.
    pub fn new(config: Config) -> Self {
        let provider = create_provider(&config);
        Self { config, provider }
    }

    /// Create a context with an explicit provider (for tests).
    pub fn with_provider(config: Config, provider: Box<dyn Provider>) -> Self {
        Self {
            config,
            provider: Ok(provider),
        }
    }

    /// The resolved provider, or the reason it could not be resolved.
    pub fn provider(&self) -> Result<&dyn Provider, &ProviderError> {
        self.provider.as_deref()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish()
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Chat { query } => chat::chat(ctx, &query),
        Command::Fix => fix::fix(ctx),
        Command::InternalFixError { command, exit_code } => {
            fix::internal_fix_error(ctx, &command, &exit_code)
        }
        Command::Build { description } => build::build(&description),
        Command::Completion { shell } => completion::completion(shell),
        Command::Hook { shell } => hook::hook(shell),
    }
}

/// Send `prompt` to the configured provider.
///
/// Provider failures are reported on stderr and yield `Ok(None)`; only a
/// failure to start the runtime is an error.
pub(crate) fn ask(ctx: &Context, prompt: &str) -> Result<Option<Completion>> {
    let provider = match ctx.provider() {
        Ok(provider) => provider,
        Err(err) => {
            report_provider_error(err);
            return Ok(None);
        }
    };

    tracing::debug!(
        provider = provider.name(),
        prompt_len = prompt.len(),
        "sending prompt"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    match runtime.block_on(provider.complete(prompt)) {
        Ok(completion) => Ok(Some(completion)),
        Err(err) => {
            report_provider_error(&err);
            Ok(None)
        }
    }
}

/// Print a provider failure for the user.
fn report_provider_error(err: &ProviderError) {
    match err {
        ProviderError::NotImplemented(message) => output::warn(message),
        ProviderError::AuthFailed { .. } => {
            output::error(err);
            output::hint(AUTH_HINT);
        }
        _ => output::error(err),
    }
}
