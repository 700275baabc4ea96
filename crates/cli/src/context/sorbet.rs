// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sorbet helpers.
//!
//! Runs the checker either through `bundle exec srb` or through an explicit
//! binary, and reads the files the checker uses in the project directory.
//!
//! ## Abnormal termination
//!
//! Exit codes [`KILLED_CODE`] and [`SEGFAULT_CODE`] are returned as
//! [`Error::Killed`] and [`Error::Segfault`], each carrying the full
//! [`ExecResult`]. Every other exit code, including ordinary failures, is
//! returned as `Ok`.

use regex::Regex;

use super::bundle::{Bundle, ExecOptions};
use super::git::Git;
use super::ContextOps;
use crate::error::{Error, Result};
use crate::exec::ExecResult;
use crate::git::{Commit, LOG_FORMAT};
use crate::sorbet::{
    self, BIN_NAME, CONFIG_PATH, Config, DEFAULT_EXTENSIONS, KILLED_CODE, Metrics, SEGFAULT_CODE,
    sigils,
};

/// File the checker writes metrics to during [`Sorbet::srb_metrics`].
///
/// The name is fixed, so two metrics runs in the same directory must not
/// overlap.
pub const METRICS_FILE: &str = "metrics.tmp";

/// Options for checker invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrbOptions {
    /// Checker binary to run directly instead of `bundle exec srb`.
    pub sorbet_bin: Option<String>,
    /// Capture stderr into the result.
    pub capture_err: bool,
}

impl Default for SrbOptions {
    fn default() -> Self {
        Self {
            sorbet_bin: None,
            capture_err: true,
        }
    }
}

impl SrbOptions {
    /// Options running the given checker binary.
    pub fn with_bin(sorbet_bin: impl Into<String>) -> Self {
        Self {
            sorbet_bin: Some(sorbet_bin.into()),
            ..Self::default()
        }
    }
}

/// Turn the reserved exit codes into errors.
fn check_termination(result: ExecResult) -> Result<ExecResult> {
    match result.exit_code {
        KILLED_CODE => Err(Error::Killed {
            message: "Sorbet was killed.".to_string(),
            result: Box::new(result),
        }),
        SEGFAULT_CODE => Err(Error::Segfault {
            message: "Sorbet segfaulted.".to_string(),
            result: Box::new(result),
        }),
        _ => Ok(result),
    }
}

/// Sorbet features of a project context.
pub trait Sorbet: Bundle + Git {
    /// Run the checker with `args`.
    fn srb(&self, args: &[&str], opts: &SrbOptions) -> Result<ExecResult> {
        let args = args.join(" ");
        let result = match &opts.sorbet_bin {
            Some(bin) => self.exec(&format!("{bin} {args}"), opts.capture_err)?,
            None => self.bundle_exec(
                &format!("{BIN_NAME} {args}"),
                &ExecOptions {
                    version: None,
                    capture_err: opts.capture_err,
                },
            )?,
        };
        check_termination(result)
    }

    /// Run `srb tc` with `args`.
    ///
    /// The `tc` subcommand is only added when going through `bundle exec`;
    /// an explicit binary receives `args` as is.
    fn srb_tc(&self, args: &[&str], opts: &SrbOptions) -> Result<ExecResult> {
        if opts.sorbet_bin.is_some() {
            return self.srb(args, opts);
        }
        let mut tc_args = Vec::with_capacity(args.len() + 1);
        tc_args.push("tc");
        tc_args.extend_from_slice(args);
        self.srb(&tc_args, opts)
    }

    /// Typecheck and collect the metrics the checker writes.
    ///
    /// Returns `None` if the checker produced no metrics file. The file is
    /// removed once parsed.
    fn srb_metrics(&self, args: &[&str], opts: &SrbOptions) -> Result<Option<Metrics>> {
        let mut metrics_args = vec!["--metrics-file", METRICS_FILE];
        metrics_args.extend_from_slice(args);
        self.srb_tc(&metrics_args, opts)?;

        if !self.is_file(METRICS_FILE) {
            return Ok(None);
        }
        let metrics = sorbet::metrics::parse_file(&self.absolute_path_to(METRICS_FILE))?;
        self.remove(METRICS_FILE)?;
        Ok(Some(metrics))
    }

    /// Files typechecked according to `with_config`, or to `sorbet/config`
    /// when no config is given.
    fn srb_files(&self, with_config: Option<&Config>) -> Result<Vec<String>> {
        let owned;
        let config = match with_config {
            Some(config) => config,
            None => {
                owned = self.sorbet_config()?;
                &owned
            }
        };

        let ignores = config
            .ignore
            .iter()
            .map(|s| Regex::new(&regex::escape(s)))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::Argument(format!("invalid ignore pattern: {e}")))?;

        let exts = if config.allowed_extensions.is_empty() {
            DEFAULT_EXTENSIONS.join(",")
        } else {
            config.allowed_extensions.join(",")
        };

        let mut files = self.glob(&format!("**/*{{{exts}}}"))?;
        files.retain(|f| !ignores.iter().any(|re| re.is_match(f)));
        files.sort();
        Ok(files)
    }

    /// Checker version, or `None` if the checker could not report it.
    fn srb_version(&self, args: &[&str], opts: &SrbOptions) -> Result<Option<String>> {
        let mut version_args = vec!["--no-config", "--version"];
        version_args.extend_from_slice(args);
        let res = self.srb_tc(&version_args, opts)?;
        if !res.status {
            return Ok(None);
        }
        // "Sorbet typechecker 0.5.11144 git ..."
        Ok(res.out.split_whitespace().nth(2).map(str::to_string))
    }

    /// Whether the project has a `sorbet/config` file.
    fn has_sorbet_config(&self) -> bool {
        self.is_file(CONFIG_PATH)
    }

    /// Parsed `sorbet/config`. Fails if the file is missing.
    fn sorbet_config(&self) -> Result<Config> {
        Ok(Config::parse_string(&self.read_sorbet_config()?))
    }

    /// Raw contents of `sorbet/config`.
    fn read_sorbet_config(&self) -> Result<String> {
        self.read(CONFIG_PATH)
    }

    /// Set the contents of `sorbet/config`.
    fn write_sorbet_config(&self, contents: &str, append: bool) -> Result<()> {
        self.write(CONFIG_PATH, contents, append)
    }

    /// Strictness sigil of the file at `relative_path`, if any.
    fn read_file_strictness(&self, relative_path: &str) -> Option<String> {
        sigils::file_strictness(&self.absolute_path_to(relative_path))
    }

    /// Commit that added `sorbet/config`.
    fn sorbet_intro_commit(&self) -> Result<Option<Commit>> {
        config_commit(self, 'A')
    }

    /// Commit that deleted `sorbet/config`.
    fn sorbet_removal_commit(&self) -> Result<Option<Commit>> {
        config_commit(self, 'D')
    }
}

impl<T: ContextOps + ?Sized> Sorbet for T {}

/// Single commit touching `sorbet/config` with the given diff filter.
fn config_commit<C: Git + ?Sized>(context: &C, diff_filter: char) -> Result<Option<Commit>> {
    let filter = format!("--diff-filter={diff_filter}");
    let format = format!("--format='{LOG_FORMAT}'");
    let res = context.git_log(&[&filter, &format, "-1", "--", CONFIG_PATH])?;
    if !res.status {
        return Ok(None);
    }
    let out = res.out.trim();
    if out.is_empty() {
        return Ok(None);
    }
    Ok(Commit::parse_line(out))
}

#[cfg(test)]
#[path = "sorbet_tests.rs"]
mod tests;
