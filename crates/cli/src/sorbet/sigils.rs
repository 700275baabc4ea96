// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Strictness sigils (`# typed: strict`).

use std::path::Path;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Strictness levels understood by the checker.
pub const VALID_STRICTNESS: &[&str] = &[
    "ignore",
    "false",
    "true",
    "strict",
    "strong",
    "__STDLIB_INTERNAL",
];

/// Sigil comment; the captured group is the strictness level.
#[allow(clippy::expect_used)]
static SIGIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]*typed:[ \t]*(\S*)").expect("valid regex"));

/// Sigil comment for a strictness level.
pub fn sigil_string(strictness: &str) -> String {
    format!("# typed: {strictness}")
}

/// Whether `strictness` is a level the checker accepts.
pub fn valid_strictness(strictness: &str) -> bool {
    VALID_STRICTNESS.contains(&strictness)
}

/// Strictness declared by the first sigil in `content`.
pub fn strictness_in_content(content: &str) -> Option<String> {
    SIGIL_PATTERN
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Strictness declared in the file at `path`.
///
/// Returns `None` if the file cannot be read or has no sigil.
pub fn file_strictness(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    strictness_in_content(&content)
}

/// Replace the first sigil in `content` with one for `new_strictness`.
///
/// Content without a sigil is returned unchanged.
pub fn update_sigil(content: &str, new_strictness: &str) -> String {
    SIGIL_PATTERN
        .replace(content, NoExpand(&sigil_string(new_strictness)))
        .into_owned()
}

#[cfg(test)]
#[path = "sigils_tests.rs"]
mod tests;
