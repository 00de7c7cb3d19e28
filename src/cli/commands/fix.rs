//! fix command - Explain a failed shell command and suggest a fix
//!
//! Two entry points share one flow:
//! - `ai fix`: the command comes from shell history; exit code unknown
//! - `ai --internal-fix-error`: the shell hook passes command and exit code,
//!   honored only when `auto_fix_errors` is enabled

use anyhow::Result;

use super::{ask, Context};
use crate::cli::args::BIN_NAME;
use crate::core::{history, prompt};
use crate::ui::output;

/// Suggest a fix for the most recent command in shell history.
///
/// The history entry is a best-effort guess: nothing ties it to an actual
/// failure. Lookup failures are reported and the command exits 0.
pub fn fix(ctx: &Context) -> Result<()> {
    match history::last_command(BIN_NAME) {
        Ok(command) => {
            tracing::debug!(command = %command, "manual fix: last command from history");
            fix_error(ctx, &command, prompt::UNKNOWN_EXIT_CODE)
        }
        Err(err) => {
            output::error(format!("Error retrieving last command from history: {}", err));
            output::hint(format!(
                "Please run '{} fix' immediately after a command fails for best results.",
                BIN_NAME
            ));
            Ok(())
        }
    }
}

/// Suggest a fix for a command reported by the shell hook.
///
/// Silent no-op when `auto_fix_errors` is disabled.
pub fn internal_fix_error(ctx: &Context, command: &str, exit_code: &str) -> Result<()> {
    if !ctx.config.auto_fix_errors() {
        tracing::debug!("automatic error fixing is disabled in config; skipping");
        return Ok(());
    }

    tracing::debug!(command = %command, exit_code = %exit_code, "hook-triggered fix");
    fix_error(ctx, command, exit_code)
}

/// Ask for a fix for `command` and print the suggestion.
pub fn fix_error(ctx: &Context, command: &str, exit_code: &str) -> Result<()> {
    let command = command.trim();
    if command.is_empty() {
        output::error("Could not determine the command that failed.");
        return Ok(());
    }

    let prompt = prompt::fix_prompt(command, exit_code);
    if let Some(completion) = ask(ctx, &prompt)? {
        output::print_response(&prompt::fix_title(command), &completion.text);
    }
    Ok(())
}
