//! core
//!
//! Configuration, prompt construction, and shell history for aiterm.
//!
//! # Modules
//!
//! - [`config`] - Configuration schema, loading, and validation
//! - [`prompt`] - System instruction and user prompt templates
//! - [`history`] - Best-effort lookup of the last shell command
//!
//! # Design Principles
//!
//! - Configuration is validated all-or-nothing at startup
//! - Nothing in this layer performs network I/O

pub mod config;
pub mod history;
pub mod prompt;
