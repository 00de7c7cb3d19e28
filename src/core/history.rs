//! core::history
//!
//! Best-effort lookup of the most recent shell command.
//!
//! # Limitations
//!
//! The history file records what was typed, not whether it failed. The entry
//! returned here is simply the newest one that is not an invocation of
//! `ai fix` itself, and its exit code is unknown. Shells that do not write
//! history until exit (bash without `history -a`) will return an older
//! command.
//!
//! # Location
//!
//! `$HISTFILE` if set, otherwise the first existing of `~/.zsh_history` and
//! `~/.bash_history`.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// History files probed under the home directory, in order.
const HISTORY_FILES: &[&str] = &[".zsh_history", ".bash_history"];

/// Errors from history lookup.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("no shell history file found (set HISTFILE to point at it)")]
    NotFound,

    #[error("failed to read history file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("shell history in '{path}' has no usable entries")]
    Empty { path: PathBuf },
}

/// Locate the shell history file.
pub fn history_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("HISTFILE").filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let home = dirs::home_dir()?;
    HISTORY_FILES
        .iter()
        .map(|name| home.join(name))
        .find(|path| path.exists())
}

/// Return the most recent command from the user's shell history.
///
/// `program` is the assistant's own binary name; `<program> fix` entries are
/// skipped so the lookup does not return the command that triggered it.
pub fn last_command(program: &str) -> Result<String, HistoryError> {
    let path = history_file().ok_or(HistoryError::NotFound)?;
    last_command_in(&path, program)
}

/// Return the most recent command recorded in `path`.
pub fn last_command_in(path: &Path, program: &str) -> Result<String, HistoryError> {
    // zsh metafies non-ASCII bytes, so the file is not always valid UTF-8.
    let bytes = fs::read(path).map_err(|e| HistoryError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let contents = String::from_utf8_lossy(&bytes);

    contents
        .lines()
        .rev()
        .map(parse_entry)
        .find(|cmd| !cmd.is_empty() && !is_fix_invocation(cmd, program))
        .map(str::to_string)
        .ok_or_else(|| HistoryError::Empty {
            path: path.to_path_buf(),
        })
}

/// Strip the zsh extended-history prefix (`: <start>:<elapsed>;`) if present.
pub fn parse_entry(line: &str) -> &str {
    let trimmed = line.trim();
    if let Some(rest) = trimmed.strip_prefix(": ") {
        if let Some((meta, command)) = rest.split_once(';') {
            let is_meta = meta
                .split(':')
                .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()));
            if is_meta {
                return command.trim();
            }
        }
    }
    trimmed
}

/// Whether `command` runs `<program> fix`.
fn is_fix_invocation(command: &str, program: &str) -> bool {
    let mut words = command.split_whitespace();
    let invoked = words
        .next()
        .and_then(|w| Path::new(w).file_name())
        .is_some_and(|name| name == program);
    invoked && words.next() == Some("fix")
}
