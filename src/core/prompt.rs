//! core::prompt
//!
//! Prompt templates sent to the provider.

/// System instruction sent with every request.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful AI assistant integrated into a user's terminal. \
Provide concise and accurate explanations or shell commands. \
Format commands clearly, often in code blocks.";

/// Exit code reported when the failing command came from shell history.
pub const UNKNOWN_EXIT_CODE: &str = "unknown";

/// Build the user prompt for a free-form question.
pub fn chat_prompt(query: &str) -> String {
    format!(
        "The user asked the following question in their terminal: '{}'. \
         Provide a helpful answer or relevant command(s).",
        query
    )
}

/// Build the user prompt for a failed command.
pub fn fix_prompt(command: &str, exit_code: &str) -> String {
    format!(
        "The following shell command failed with exit code {exit_code}:\n\
         ```\n{command}\n```\n\
         Explain the likely reason for the error and suggest one or more specific commands \
         to fix it or achieve the user's likely intent. \
         If it's a simple typo, point it out. Be concise."
    )
}

/// Title of the block printed for a fix suggestion.
pub fn fix_title(command: &str) -> String {
    format!("AI Fix Suggestion (for `{}`)", command)
}
