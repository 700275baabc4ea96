// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command execution.
//!
//! Commands are plain strings handed to the platform shell, so quoting in
//! the command line (e.g. `--format='%h %at'`) behaves as it would in a
//! terminal.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use serde::Serialize;

use crate::error::{Error, Result};

/// Captured outcome of one subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecResult {
    /// Captured standard output.
    pub out: String,
    /// Captured standard error (`None` when stderr was not captured).
    pub err: Option<String>,
    /// Whether the process reported success.
    pub status: bool,
    /// Raw exit code (`128 + signal` when terminated by a signal).
    pub exit_code: i32,
}

impl ExecResult {
    /// Build a result from a finished process.
    pub fn from_output(status: ExitStatus, stdout: &[u8], stderr: Option<&[u8]>) -> Self {
        Self {
            out: String::from_utf8_lossy(stdout).into_owned(),
            err: stderr.map(|s| String::from_utf8_lossy(s).into_owned()),
            status: status.success(),
            exit_code: exit_code_of(status),
        }
    }
}

/// Exit code of a finished process, mapping signals the way shells do.
#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => -1,
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

/// Run `command` through the platform shell with `dir` as working directory.
///
/// Stdout is always captured. Stderr is captured when `capture_err` is set,
/// otherwise it is inherited from the current process.
pub fn run_shell(command: &str, dir: &Path, capture_err: bool) -> Result<ExecResult> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    };

    cmd.current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(if capture_err {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });

    let output = cmd.output().map_err(|source| Error::Spawn {
        command: command.to_string(),
        source,
    })?;

    let result = ExecResult::from_output(
        output.status,
        &output.stdout,
        capture_err.then_some(output.stderr.as_slice()),
    );
    tracing::debug!("exec `{}` in {} -> {}", command, dir.display(), result.exit_code);
    Ok(result)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
