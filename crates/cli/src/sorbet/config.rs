// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for the checker's `sorbet/config` file.
//!
//! The file holds one command-line option or path per line:
//!
//! ```text
//! .
//! --ignore=vendor/
//! --allowed-extension
//! .rake
//! ```
//!
//! Only the options that decide which files are checked are retained.
//! Other options are skipped, together with their value when the value
//! sits on the following line.

use serde::Serialize;

/// Parsed checker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Paths passed as positional arguments, `--dir` or `--file`.
    pub paths: Vec<String>,
    /// Path substrings excluded from checking.
    pub ignore: Vec<String>,
    /// Extensions of checked files (with leading dot).
    pub allowed_extensions: Vec<String>,
    /// Whether `--no-stdlib` is set.
    pub no_stdlib: bool,
}

/// What the next plain line means.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Pending {
    Path,
    Ignore,
    Extension,
    Skip,
}

impl Config {
    /// Parse config file contents.
    pub fn parse_string(content: &str) -> Self {
        let mut config = Config::default();
        let mut pending = Pending::Path;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(option) = line.strip_prefix("--") {
                match option.split_once('=') {
                    Some((name, value)) => {
                        let value = value.trim().to_string();
                        match name {
                            "allowed-extension" => config.allowed_extensions.push(value),
                            "ignore" => config.ignore.push(value),
                            "dir" | "file" => config.paths.push(value),
                            _ => {}
                        }
                    }
                    None => match option {
                        "allowed-extension" => pending = Pending::Extension,
                        "ignore" => pending = Pending::Ignore,
                        "dir" | "file" => pending = Pending::Path,
                        "no-stdlib" => config.no_stdlib = true,
                        _ => pending = Pending::Skip,
                    },
                }
                continue;
            }

            // Short options never take a value on the next line.
            if line.starts_with('-') {
                continue;
            }

            let value = line.to_string();
            match pending {
                Pending::Path => config.paths.push(value),
                Pending::Ignore => config.ignore.push(value),
                Pending::Extension => config.allowed_extensions.push(value),
                Pending::Skip => {}
            }
            pending = Pending::Path;
        }

        config
    }

    /// Render the config back as checker command-line options.
    pub fn options_string(&self) -> String {
        let mut opts = Vec::new();
        opts.extend(self.paths.iter().map(|p| format!("'{p}'")));
        opts.extend(self.ignore.iter().map(|p| format!("--ignore '{p}'")));
        opts.extend(
            self.allowed_extensions
                .iter()
                .map(|ext| format!("--allowed-extension '{ext}'")),
        );
        if self.no_stdlib {
            opts.push("--no-stdlib".to_string());
        }
        opts.join(" ")
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
