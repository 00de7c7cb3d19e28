//! chat command - Ask the assistant a free-form question

use anyhow::Result;

use super::{ask, Context};
use crate::cli::ExitError;
use crate::core::prompt;
use crate::ui::output;

/// Title of the reply block.
pub const CHAT_TITLE: &str = "AI Chat";

/// Ask a question and print the reply.
///
/// Exits with status 1 when the query is empty; the provider is not called.
pub fn chat(ctx: &Context, query: &[String]) -> Result<()> {
    let query = query.join(" ");
    if query.trim().is_empty() {
        output::error("Please provide a question for the chat.");
        return Err(ExitError::new(1).into());
    }

    tracing::debug!(query = %query, "chat query");

    let prompt = prompt::chat_prompt(&query);
    if let Some(completion) = ask(ctx, &prompt)? {
        output::print_response(CHAT_TITLE, &completion.text);
    }
    Ok(())
}
