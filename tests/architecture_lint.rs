//! Architecture enforcement tests.
//!
//! Command handlers talk to providers only through the `Provider` trait and
//! `create_provider()`, and print only through `ui::output`. These tests
//! scan the source tree so violations are caught in CI.
//!
//! # Test Categories
//!
//! 1. **Provider Isolation** - Handlers must not name concrete clients or HTTP
//! 2. **Output Discipline** - Handlers must not print directly
//! 3. **Error Propagation** - Production code must not unwrap

use std::fs;
use std::path::{Path, PathBuf};

/// Concrete provider types and HTTP crates that handlers must not name.
const PROVIDER_INTERNALS: &[&str] = &["AnthropicProvider", "OpenAiProvider", "reqwest"];

/// Handlers allowed to write to stdout directly.
///
/// - `completion.rs` - clap_complete writes the script to an `io::Write`
const DIRECT_OUTPUT_ALLOWED: &[&str] = &["completion.rs"];

/// Files allowed to unwrap outside `#[cfg(test)]`.
///
/// - `mock.rs` - test double; a poisoned lock means a test already panicked
const UNWRAP_ALLOWED: &[&str] = &["mock.rs"];

/// Collect every `.rs` file under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap_or_else(|_| panic!("Failed to read {}", dir.display())) {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|e| e == "rs") {
            files.push(path);
        }
    }
    files.sort();
    files
}

/// Source lines before the test module, with comment lines removed.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|_| panic!("Failed to read {}", path.display()));

    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap()
}

fn assert_no_violations(violations: Vec<String>) {
    assert!(
        violations.is_empty(),
        "Architecture violations found:\n  {}",
        violations.join("\n  ")
    );
}

// =============================================================================
// Provider Isolation
// =============================================================================

/// Handlers must resolve providers through `create_provider()`.
///
/// Naming a concrete client (or reqwest) in a handler would bypass the
/// dispatcher and its unknown-provider handling.
#[test]
fn handlers_do_not_name_concrete_providers() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/cli")) {
        for (line_no, line) in production_lines(&path) {
            for needle in PROVIDER_INTERNALS {
                if line.contains(needle) {
                    violations.push(format!(
                        "{}:{}: names `{}` - use create_provider() and the Provider trait",
                        path.display(),
                        line_no,
                        needle
                    ));
                }
            }
        }
    }

    assert_no_violations(violations);
}

/// Only the provider module performs HTTP.
#[test]
fn http_is_confined_to_providers() {
    let mut violations = Vec::new();

    for dir in ["src/cli", "src/core", "src/ui"] {
        for path in rust_files(Path::new(dir)) {
            for (line_no, line) in production_lines(&path) {
                if line.contains("reqwest") {
                    violations.push(format!("{}:{}: uses reqwest", path.display(), line_no));
                }
            }
        }
    }

    assert_no_violations(violations);
}

// =============================================================================
// Output Discipline
// =============================================================================

/// Handlers print through `ui::output` so formatting and color stay uniform.
#[test]
fn handlers_print_through_output_module() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src/cli")) {
        if DIRECT_OUTPUT_ALLOWED.contains(&file_name(&path)) {
            continue;
        }
        for (line_no, line) in production_lines(&path) {
            if line.contains("println!") || line.contains("print!(") {
                violations.push(format!(
                    "{}:{}: prints directly - use ui::output",
                    path.display(),
                    line_no
                ));
            }
        }
    }

    assert_no_violations(violations);
}

// =============================================================================
// Error Propagation
// =============================================================================

/// Production code propagates errors instead of panicking.
#[test]
fn production_code_does_not_unwrap() {
    let mut violations = Vec::new();

    for path in rust_files(Path::new("src")) {
        if UNWRAP_ALLOWED.contains(&file_name(&path)) {
            continue;
        }
        for (line_no, line) in production_lines(&path) {
            if line.contains(".unwrap()") || line.contains(".expect(") {
                violations.push(format!(
                    "{}:{}: unwraps - propagate the error with `?`",
                    path.display(),
                    line_no
                ));
            }
        }
    }

    assert_no_violations(violations);
}

/// The lint must actually see the handlers it is meant to police.
#[test]
fn lint_covers_all_handlers() {
    let handlers: Vec<String> = rust_files(Path::new("src/cli/commands"))
        .iter()
        .map(|p| file_name(p).to_string())
        .collect();

    for expected in ["chat.rs", "fix.rs", "build.rs", "hook.rs", "completion.rs", "mod.rs"] {
        assert!(
            handlers.iter().any(|h| h == expected),
            "expected handler {} not found",
            expected
        );
    }
}
