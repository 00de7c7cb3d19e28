//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Replies go to stdout as a titled, indented block. Errors and warnings go
//! to stderr. Colors come from `console`, which disables them when the
//! stream is not a terminal or `NO_COLOR` is set.

use std::fmt::Display;

use console::style;

/// Indentation applied to every reply line.
pub const RESPONSE_INDENT: &str = "   ";

/// Render a reply as a titled block.
///
/// The block starts with a blank line, then the title, then each line of
/// `text` indented by [`RESPONSE_INDENT`], and ends with a blank line.
pub fn render_response(title: &str, text: &str) -> String {
    let mut out = String::from("\n");
    out.push_str(&format!(
        "{}\n",
        style(format!("\u{1F916} {}:", title)).cyan().bold()
    ));
    for line in text.lines() {
        out.push_str(RESPONSE_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Print a reply block to stdout.
pub fn print_response(title: &str, text: &str) {
    print!("{}", render_response(title, text));
}

/// Print a message to stdout.
pub fn print(message: impl Display) {
    println!("{}", message);
}

/// Print a highlighted notice to stdout.
pub fn notice(message: impl Display) {
    println!("{}", style(message).yellow());
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("{}", style(format!("error: {}", message)).red().for_stderr());
}

/// Print a warning message.
pub fn warn(message: impl Display) {
    eprintln!(
        "{}",
        style(format!("warning: {}", message)).yellow().for_stderr()
    );
}

/// Print a follow-up hint under an error.
pub fn hint(message: impl Display) {
    eprintln!("{}", style(message).dim().for_stderr());
}
