//! cli
//!
//! Command-line interface layer for aiterm.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration once, before any handler runs
//! - Set up logging
//! - Delegate to command handlers
//!
//! # Exit Codes
//!
//! Handlers report their own failures. A handler that must end the process
//! with a specific status returns [`ExitError`]; `main.rs` maps it to the
//! process exit code without printing anything further.

pub mod args;
pub mod commands;

pub use args::{normalize_args, Cli, Command, HookShell, Shell, BIN_NAME};
pub use commands::Context;

use std::ffi::OsString;
use std::path::Path;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::CommandFactory;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::core::config::{Config, ConfigError};
use crate::ui::output;

/// Hint printed when no configuration file exists.
const MISSING_CONFIG_HINT: &str =
    "Please copy config.yaml.template to config.yaml and add your API key.";

/// A request to end the process with `code` after the message was shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("exiting with status {code}")]
pub struct ExitError {
    /// Process exit status
    pub code: u8,
}

impl ExitError {
    /// Create an exit request.
    pub fn new(code: u8) -> Self {
        Self { code }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    run_from(std::env::args_os())
}

/// Run the CLI application with explicit arguments.
pub fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = match Cli::parse_from_args(args) {
        Ok(cli) => cli,
        Err(err) => return handle_parse_error(err),
    };

    match cli.command {
        // Shell setup commands work before a config exists.
        Command::Completion { shell } => {
            init_logging(cli.debug);
            commands::completion(shell)
        }
        Command::Hook { shell } => {
            init_logging(cli.debug);
            commands::hook(shell)
        }
        command => {
            let config = load_config(cli.config.as_deref())?;
            init_logging(cli.debug || config.debug_mode());
            tracing::debug!(
                path = %config.path().display(),
                provider = config.api_provider(),
                "configuration loaded"
            );

            let ctx = Context::new(config);
            commands::dispatch(command, &ctx)
        }
    }
}

/// Print a clap error or help text and choose the exit status.
///
/// Help and version exit 0. When no command was given the help goes to
/// stdout and the status is 1, as for every other parse error.
///
/// `$AITERM_CONFIG` fills `--config`, so a bare `ai` with the variable set
/// reaches clap as `MissingSubcommand` rather than the help-on-empty kind.
fn handle_parse_error(err: clap::Error) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            // Nothing useful to do if stdout is gone.
            let _ = err.print();
            Ok(())
        }
        ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand | ErrorKind::MissingSubcommand => {
            output::print(usage_text());
            Err(ExitError::new(1).into())
        }
        _ => {
            let _ = err.print();
            Err(ExitError::new(1).into())
        }
    }
}

/// Top-level help, as shown for `ai --help`.
fn usage_text() -> String {
    Cli::command().render_help().to_string().trim_end().to_string()
}

/// Resolve, load, and validate the configuration, reporting failures.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    Config::resolve_path(explicit)
        .and_then(|path| Config::load(&path))
        .map_err(|err| {
            output::error(&err);
            if matches!(err, ConfigError::NotFound { .. }) {
                output::hint(MISSING_CONFIG_HINT);
            }
            ExitError::new(1).into()
        })
}

/// Install the stderr tracing subscriber.
///
/// `debug` forces debug output for this crate; otherwise `RUST_LOG` applies,
/// defaulting to warnings only.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("aiterm=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // Already installed when run_from is called more than once in a process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn exit_code(result: Result<()>) -> Option<u8> {
        result
            .err()
            .and_then(|e| e.downcast_ref::<ExitError>().map(|exit| exit.code))
    }

    #[test]
    fn help_exits_zero() {
        assert!(run_from(["ai", "--help"]).is_ok());
    }

    #[test]
    fn no_arguments_exit_one() {
        assert_eq!(exit_code(run_from(["ai"])), Some(1));
    }

    #[test]
    fn global_flag_without_command_exits_one() {
        // Same parse path as a bare `ai` with $AITERM_CONFIG exported.
        assert_eq!(exit_code(run_from(["ai", "--config", "/tmp/c.yaml"])), Some(1));
        assert_eq!(exit_code(run_from(["ai", "--debug"])), Some(1));
    }

    #[test]
    fn usage_text_lists_public_commands_only() {
        let usage = usage_text();

        assert!(usage.contains("Usage"));
        assert!(usage.contains("chat"));
        assert!(!usage.contains("internal-fix-error"));
    }

    #[test]
    fn unknown_flag_exits_one() {
        assert_eq!(exit_code(run_from(["ai", "--bogus"])), Some(1));
    }

    #[test]
    fn missing_config_exits_one() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");

        let result = run_from([
            "ai",
            "--config",
            path.to_str().unwrap(),
            "chat",
            "hello",
        ]);
        assert_eq!(exit_code(result), Some(1));
    }

    #[test]
    fn placeholder_key_exits_one() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(
            &path,
            "api_provider: anthropic\nanthropic:\n  api_key: YOUR_ANTHROPIC_API_KEY\n",
        )
        .unwrap();

        let result = run_from(["ai", "--config", path.to_str().unwrap(), "fix"]);
        assert_eq!(exit_code(result), Some(1));
    }

    #[test]
    fn hook_runs_without_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.yaml");

        let result = run_from(["ai", "--config", path.to_str().unwrap(), "hook", "zsh"]);
        assert!(result.is_ok());
    }
}
