// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bundler helpers.
//!
//! Reads and writes the `Gemfile`, runs `bundle` commands and extracts
//! resolved gem versions from `Gemfile.lock`.

use regex::Regex;

use super::ContextOps;
use crate::error::Result;
use crate::exec::ExecResult;

/// Dependency manifest file name.
pub const GEMFILE: &str = "Gemfile";

/// Lock file written by `bundle install`.
pub const GEMFILE_LOCK: &str = "Gemfile.lock";

/// Options for `bundle` invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOptions {
    /// Bundler version to pin, passed as `_<version>_`.
    pub version: Option<String>,
    /// Capture stderr into the result.
    pub capture_err: bool,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            version: None,
            capture_err: true,
        }
    }
}

impl ExecOptions {
    /// Options pinning a Bundler version.
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }
}

/// Command line for `bundle <command>`, optionally pinned to a version.
pub fn bundle_command(command: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("bundle _{version}_ {command}"),
        None => format!("bundle {command}"),
    }
}

/// Version of `gem` from `Gemfile.lock` contents.
///
/// Scans in file order and returns the `major.minor.patch` token of the
/// first matching `    <gem> (...)` line.
pub fn gem_version_from_lock(lock: &str, gem: &str) -> Option<String> {
    let pattern = format!(r"(?m)^    {} \(.*?(\d+\.\d+\.\d+).*\)", regex::escape(gem));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(e) => {
            tracing::warn!("invalid gem pattern for '{}': {}", gem, e);
            return None;
        }
    };
    re.captures(lock)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Bundler features of a project context.
pub trait Bundle: ContextOps {
    /// Contents of the `Gemfile`, or `None` if there is none.
    fn read_gemfile(&self) -> Result<Option<String>> {
        if !self.is_file(GEMFILE) {
            return Ok(None);
        }
        self.read(GEMFILE).map(Some)
    }

    /// Set the contents of the `Gemfile`.
    fn write_gemfile(&self, contents: &str, append: bool) -> Result<()> {
        self.write(GEMFILE, contents, append)
    }

    /// Run `bundle <command>` in the project directory.
    fn bundle(&self, command: &str, opts: &ExecOptions) -> Result<ExecResult> {
        self.exec(
            &bundle_command(command, opts.version.as_deref()),
            opts.capture_err,
        )
    }

    /// Run `bundle install`.
    fn bundle_install(&self, opts: &ExecOptions) -> Result<ExecResult> {
        self.bundle("install", opts)
    }

    /// Run `bundle exec <command>`.
    fn bundle_exec(&self, command: &str, opts: &ExecOptions) -> Result<ExecResult> {
        self.bundle(&format!("exec {command}"), opts)
    }

    /// Resolved version of `gem` from `Gemfile.lock`.
    ///
    /// Returns `None` if there is no lock file or the gem is not listed.
    fn gem_version_from_gemfile_lock(&self, gem: &str) -> Result<Option<String>> {
        if !self.is_file(GEMFILE_LOCK) {
            return Ok(None);
        }
        let lock = self.read(GEMFILE_LOCK)?;
        Ok(gem_version_from_lock(&lock, gem))
    }
}

impl<T: ContextOps + ?Sized> Bundle for T {}

#[cfg(test)]
#[path = "bundle_tests.rs"]
mod tests;
