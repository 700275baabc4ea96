// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::exec::ExecResult;

/// srbkit error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Settings file not found or invalid
    #[error("config error: {message}")]
    Settings {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The shell could not be started for a command.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The checker process was killed.
    ///
    /// Carries the full captured result so callers can still inspect output.
    #[error("{message}")]
    Killed {
        message: String,
        result: Box<ExecResult>,
    },

    /// The checker process crashed with a segmentation fault.
    #[error("{message}")]
    Segfault {
        message: String,
        result: Box<ExecResult>,
    },

    /// Metrics file could not be parsed.
    #[error("invalid metrics file {}: {message}", .path.display())]
    Metrics { path: PathBuf, message: String },
}

impl Error {
    /// Captured result of an aborted checker run, if this error carries one.
    pub fn exec_result(&self) -> Option<&ExecResult> {
        match self {
            Error::Killed { result, .. } | Error::Segfault { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Result type using srbkit Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes for the srbkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// The wrapped tool reported failure, or the requested value is absent
    CommandFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
    /// The checker was killed or crashed
    CheckerAborted = 4,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Settings { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::Spawn { .. } | Error::Metrics { .. } => {
                ExitCode::InternalError
            }
            Error::Killed { .. } | Error::Segfault { .. } => ExitCode::CheckerAborted,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
