//! Output formatting for command results.

pub mod json;
pub mod text;

use serde::Serialize;

use crate::exec::ExecResult;
use crate::git::Commit;
use crate::sorbet::{Config, Metrics};

/// Result of one srbkit command, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// Raw file contents (`None` when the file is absent).
    File {
        path: String,
        contents: Option<String>,
    },
    /// A single named value such as a gem or checker version.
    Value { name: String, value: Option<String> },
    /// Outcome of a wrapped command.
    Exec { command: String, result: ExecResult },
    /// Typecheck metrics.
    Metrics { metrics: Option<Metrics> },
    /// Files selected for typechecking.
    Files { files: Vec<String> },
    /// Parsed checker config.
    Config { config: Config },
    /// Strictness sigil of a file.
    Strictness {
        file: String,
        strictness: Option<String>,
    },
    /// Commits that added and removed the checker config.
    Commits {
        intro: Option<Commit>,
        removal: Option<Commit>,
    },
}

impl Report {
    /// Whether the report carries the value the command asked for.
    ///
    /// Drives the exit code: absent values and failed commands exit 1.
    pub fn is_success(&self) -> bool {
        match self {
            Report::File { contents, .. } => contents.is_some(),
            Report::Value { value, .. } => value.is_some(),
            Report::Exec { result, .. } => result.status,
            Report::Metrics { metrics } => metrics.is_some(),
            Report::Strictness { strictness, .. } => strictness.is_some(),
            Report::Files { .. } | Report::Config { .. } | Report::Commits { .. } => true,
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
