//! aiterm - An AI assistant for the terminal
//!
//! aiterm forwards questions, or the context of a failed shell command, to a
//! hosted language-model API and prints the reply as a formatted block.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, dispatches handlers)
//! - [`core`] - Configuration, prompt templates, and shell history lookup
//! - [`provider`] - Abstraction over hosted AI APIs (Anthropic v1)
//! - [`ui`] - Terminal output formatting
//!
//! # Invariants
//!
//! 1. Configuration is loaded and validated once, before any command runs
//! 2. No provider call is attempted without a non-placeholder API key
//! 3. Provider failures are reported on stderr and never abort the process

pub mod cli;
pub mod core;
pub mod provider;
pub mod ui;
