//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this config file (also `$AITERM_CONFIG`)
//! - `--debug`: Enable debug logging
//!
//! # Implicit Chat
//!
//! `ai how do I list files` is treated as `ai chat how do I list files`; see
//! [`normalize_args`].

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::config::CONFIG_ENV_VAR;

/// Name of the installed binary.
pub const BIN_NAME: &str = "ai";

/// Subcommand names that are never rewritten into a chat query.
const KNOWN_COMMANDS: &[&str] = &["chat", "fix", "build", "completion", "hook", "help"];

/// aiterm - AI assistant for your terminal
#[derive(Parser, Debug)]
#[command(name = "ai")]
#[command(author, version, about = "AI Terminal Assistant", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, env = CONFIG_ENV_VAR, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse arguments from the process environment.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::parse_from_args(std::env::args_os())
    }

    /// Parse arguments after applying the implicit-chat rewrite.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Available commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Chat with the AI assistant (default if no command specified)
    #[command(
        name = "chat",
        after_help = "\
EXAMPLES:
    ai chat how do I find files larger than 100MB
    ai how do I find files larger than 100MB     # same thing"
    )]
    Chat {
        /// Your question or prompt for the AI
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Analyze the last failed command and suggest a fix
    #[command(
        name = "fix",
        long_about = "Analyze the last command in your shell history and suggest a fix.\n\n\
            The command is read from your shell history file, so run `ai fix` right \
            after the failure. The exit code is not available on this path."
    )]
    Fix,

    /// Build a shell command from a description (not implemented yet)
    Build {
        /// Description of the command to build
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the shell integration that suggests fixes after failed commands
    #[command(
        name = "hook",
        after_help = "\
SETUP:
    # zsh
    eval \"$(ai hook zsh)\"

    # bash
    eval \"$(ai hook bash)\"

Set `auto_fix_errors: true` in config.yaml to enable suggestions."
    )]
    Hook {
        /// Shell to print the integration for
        #[arg(value_enum)]
        shell: HookShell,
    },

    /// Internal: called by the shell hook after a failed command
    #[command(name = "internal-fix-error", long_flag = "internal-fix-error", hide = true)]
    InternalFixError {
        /// The failed command string
        #[arg(long = "command", required = true, allow_hyphen_values = true)]
        command: String,

        /// The exit code of the failed command
        #[arg(long = "exit_code", required = true, allow_hyphen_values = true)]
        exit_code: String,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Shells with a fix-on-failure integration
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookShell {
    Bash,
    Zsh,
}

/// Insert `chat` when the first command word is not a known subcommand.
///
/// Leading global flags are skipped, so `ai --debug why is my disk full`
/// also becomes a chat query. Anything starting with `-` is left for clap.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    let mut i = 1;
    while let Some(arg) = args.get(i).and_then(|a| a.to_str()) {
        match arg {
            "--debug" => i += 1,
            "--config" => i += 2,
            _ if arg.starts_with("--config=") => i += 1,
            _ => break,
        }
    }

    let implicit_chat = args.get(i).is_some_and(|first| {
        let first = first.to_string_lossy();
        !first.starts_with('-') && !KNOWN_COMMANDS.contains(&first.as_ref())
    });
    if implicit_chat {
        args.insert(i, OsString::from("chat"));
    }
    args
}
