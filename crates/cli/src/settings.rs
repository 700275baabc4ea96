// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tool settings from `srbkit.toml`.
//!
//! Handles discovery and parsing with version validation.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Settings file name.
pub const SETTINGS_FILE: &str = "srbkit.toml";

/// Currently supported settings version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Settings file version (must be 1).
    pub version: i64,

    /// Bundler settings.
    #[serde(default)]
    pub bundle: BundleSettings,

    /// Checker settings.
    #[serde(default)]
    pub sorbet: SorbetSettings,
}

/// `[bundle]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BundleSettings {
    /// Bundler version to pin.
    pub version: Option<String>,
}

/// `[sorbet]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SorbetSettings {
    /// Checker binary run instead of `bundle exec srb`.
    pub bin: Option<String>,

    /// Capture checker stderr. Unset keeps each command's default
    /// (captured for `tc` and `version`, inherited for `metrics`).
    pub capture_err: Option<bool>,
}

/// Load settings from a file.
pub fn load(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse settings from string content.
pub fn parse(content: &str, path: &Path) -> Result<Settings> {
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Settings {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Settings {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Settings {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade srbkit to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| Error::Settings {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Find `srbkit.toml` starting from a directory and walking up.
///
/// Stops at the git root (a directory containing `.git`).
pub fn find_settings(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let settings_path = current.join(SETTINGS_FILE);
        if settings_path.exists() {
            return Some(settings_path);
        }

        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve settings from an explicit path or by discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (handled by clap with env = "SRBKIT_CONFIG")
/// 2. Discovery from `start_dir` up to the git root
/// 3. Defaults
pub fn resolve(explicit: Option<&Path>, start_dir: &Path) -> Result<Settings> {
    let path = match explicit {
        Some(path) if path.exists() => path.to_path_buf(),
        Some(path) => {
            return Err(Error::Settings {
                message: format!("config file not found: {}", path.display()),
                path: Some(path.to_path_buf()),
            });
        }
        None => match find_settings(start_dir) {
            Some(path) => path,
            None => return Ok(Settings::default_v1()),
        },
    };
    tracing::debug!("loading settings from {}", path.display());
    load(&path)
}

impl Settings {
    /// Settings used when no file is present.
    pub fn default_v1() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
