//! ui
//!
//! User-facing terminal output.
//!
//! # Modules
//!
//! - [`output`] - Reply blocks, errors, and warnings
//!
//! # Design
//!
//! All user-facing output goes through this module. Diagnostics for
//! developers go through `tracing` instead.

pub mod output;
