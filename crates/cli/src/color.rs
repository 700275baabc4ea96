// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default:
//!    - If not stdout.is_tty() → no color
//!    - If CI is set → no color
//!    - Else → auto

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve color choice from CLI flags and environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os("CI").is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for text output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold field label (e.g., "version").
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow commit hash.
    pub fn sha() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Green value.
    pub fn value() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Dimmed marker for absent values.
    pub fn absent() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }

    /// Red bold error indicator.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
