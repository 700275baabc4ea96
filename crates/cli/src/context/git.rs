// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Git helpers for a project context.

use super::ContextOps;
use crate::error::Result;
use crate::exec::ExecResult;
use crate::git::{self as repo, Commit, LOG_FORMAT};

/// Git features of a project context.
pub trait Git: ContextOps {
    /// Run `git <command>` in the project directory.
    fn git(&self, command: &str) -> Result<ExecResult> {
        self.exec(&format!("git {command}"), true)
    }

    /// Initialize a repository, optionally naming the initial branch.
    fn git_init(&self, branch: Option<&str>) -> Result<ExecResult> {
        match branch {
            Some(branch) => self.git(&format!("init -q -b {branch}")),
            None => self.git("init -q"),
        }
    }

    /// Run `git log` with the given arguments.
    fn git_log(&self, args: &[&str]) -> Result<ExecResult> {
        self.git(&format!("log {}", args.join(" ")))
    }

    /// Stage everything and commit it.
    fn git_commit(&self, message: &str, allow_empty: bool) -> Result<ExecResult> {
        let added = self.git("add --all")?;
        if !added.status {
            return Ok(added);
        }
        let message = message.replace('\'', r"'\''");
        let mut command = format!("-c commit.gpgsign=false commit -q -m '{message}'");
        if allow_empty {
            command.push_str(" --allow-empty");
        }
        self.git(&command)
    }

    /// Checked-out branch name.
    fn git_current_branch(&self) -> Option<String> {
        repo::current_branch(self.root())
    }

    /// Most recent commit on `HEAD`.
    fn git_last_commit(&self) -> Result<Option<Commit>> {
        let format = format!("--format='{LOG_FORMAT}'");
        let res = self.git_log(&["HEAD", &format, "-1"])?;
        if !res.status {
            return Ok(None);
        }
        Ok(Commit::parse_line(res.out.trim()))
    }
}

impl<T: ContextOps + ?Sized> Git for T {}

#[cfg(test)]
#[path = "git_tests.rs"]
mod tests;
