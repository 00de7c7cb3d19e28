//! build command - Generate a shell command from a description (not implemented)

use anyhow::Result;

use crate::ui::output;

/// Message printed for every invocation.
pub const NOT_IMPLEMENTED: &str =
    "Sorry, the 'build' command (generating commands from description) is not yet implemented.";

/// Print the not-implemented notice. No provider call is made.
pub fn build(description: &[String]) -> Result<()> {
    tracing::debug!(description = %description.join(" "), "build requested");
    output::notice(NOT_IMPLEMENTED);
    Ok(())
}
