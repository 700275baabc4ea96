// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git commit metadata and repository detection.
//!
//! History queries shell out to `git log` (see `context::git`); repository
//! state that does not need a log format is read through git2.

use std::path::Path;

use chrono::{DateTime, Utc};
use git2::Repository;
use serde::Serialize;

/// Log format producing lines accepted by [`Commit::parse_line`].
pub const LOG_FORMAT: &str = "%h %at";

/// A commit with its short hash and author timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    /// Short commit hash.
    pub sha: String,
    /// Author time, seconds since the Unix epoch.
    pub timestamp: i64,
}

impl Commit {
    /// Parse a `<short-hash> <unix-timestamp>` line.
    ///
    /// Returns `None` when either part is missing or the timestamp is not an
    /// integer.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.trim().splitn(2, ' ');
        let sha = parts.next().filter(|s| !s.is_empty())?;
        let timestamp = parts.next()?.trim().parse::<i64>().ok()?;
        Some(Self {
            sha: sha.to_string(),
            timestamp,
        })
    }

    /// Author time as a UTC datetime.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}

/// Check if a path is in a git repository.
pub fn is_git_repo(root: &Path) -> bool {
    Repository::discover(root).is_ok()
}

/// Name of the checked-out branch.
///
/// Returns `None` outside a repository, on a detached HEAD, or before the
/// first commit.
pub fn current_branch(root: &Path) -> Option<String> {
    let repo = Repository::discover(root).ok()?;
    let head = repo.head().ok()?;
    if !head.is_branch() {
        return None;
    }
    head.shorthand().map(str::to_string)
}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
