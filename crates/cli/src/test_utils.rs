//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::context::ContextOps;
use crate::error::Result;
use crate::exec::ExecResult;

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
///
/// # Example
///
/// ```ignore
/// let tmp = TempDir::new().unwrap();
/// create_tree(tmp.path(), &[
///     ("lib/a.rb", "# typed: true"),
///     ("sorbet/config", "."),
/// ]);
/// ```
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Successful result with the given stdout.
pub fn exec_ok(out: &str) -> ExecResult {
    ExecResult {
        out: out.to_string(),
        err: Some(String::new()),
        status: true,
        exit_code: 0,
    }
}

/// Failed result with the given exit code.
pub fn exec_exit(code: i32) -> ExecResult {
    ExecResult {
        out: String::new(),
        err: Some(format!("exit {code}")),
        status: code == 0,
        exit_code: code,
    }
}

/// Canned answer to one `exec` call.
struct Reply {
    result: ExecResult,
    writes: Vec<(String, String)>,
}

/// Context backed by a temp directory whose `exec` is scripted.
///
/// Commands are recorded instead of run. Each call consumes the next queued
/// reply (or succeeds with empty output when none is queued) and writes the
/// files attached to that reply, standing in for tool side effects.
pub struct ScriptedContext {
    dir: TempDir,
    commands: RefCell<Vec<(String, bool)>>,
    replies: RefCell<VecDeque<Reply>>,
}

impl ScriptedContext {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
            commands: RefCell::new(Vec::new()),
            replies: RefCell::new(VecDeque::new()),
        }
    }

    /// Create files in the context directory.
    pub fn with_tree(self, files: &[(&str, &str)]) -> Self {
        create_tree(self.dir.path(), files);
        self
    }

    /// Queue the result of the next `exec` call.
    pub fn reply(&self, result: ExecResult) {
        self.replies.borrow_mut().push_back(Reply {
            result,
            writes: Vec::new(),
        });
    }

    /// Queue a result whose command also writes `path`.
    pub fn reply_writing(&self, result: ExecResult, path: &str, contents: &str) {
        self.replies.borrow_mut().push_back(Reply {
            result,
            writes: vec![(path.to_string(), contents.to_string())],
        });
    }

    /// Commands passed to `exec`, in call order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    /// `capture_err` flags passed to `exec`, in call order.
    pub fn capture_flags(&self) -> Vec<bool> {
        self.commands.borrow().iter().map(|(_, c)| *c).collect()
    }
}

impl Default for ScriptedContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextOps for ScriptedContext {
    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn exec(&self, command: &str, capture_err: bool) -> Result<ExecResult> {
        self.commands
            .borrow_mut()
            .push((command.to_string(), capture_err));
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(reply) => {
                for (path, contents) in &reply.writes {
                    self.write(path, contents, false)?;
                }
                Ok(reply.result)
            }
            None => Ok(exec_ok("")),
        }
    }
}
