// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project directory context.
//!
//! A [`Context`] wraps the root of a Ruby project. File and process
//! primitives live on [`ContextOps`]; the Bundler, Sorbet and git helpers are
//! extension traits implemented for every `ContextOps`, so any type that
//! provides the primitives gets the helpers for free.

pub mod bundle;
pub mod git;
pub mod sorbet;

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use ignore::WalkBuilder;

use crate::error::{Error, Result};
use crate::exec::{self, ExecResult};

pub use bundle::{Bundle, ExecOptions};
pub use git::Git;
pub use sorbet::{Sorbet, SrbOptions};

/// File and process primitives of a project directory.
///
/// All relative paths are resolved against [`ContextOps::root`].
pub trait ContextOps {
    /// Project root.
    fn root(&self) -> &Path;

    /// Absolute path of `relative_path` inside the project.
    fn absolute_path_to(&self, relative_path: &str) -> PathBuf {
        self.root().join(relative_path)
    }

    /// Run a shell command with the project root as working directory.
    fn exec(&self, command: &str, capture_err: bool) -> Result<ExecResult> {
        exec::run_shell(command, self.root(), capture_err)
    }

    /// Whether `relative_path` is an existing file.
    fn is_file(&self, relative_path: &str) -> bool {
        self.absolute_path_to(relative_path).is_file()
    }

    /// Read a file as UTF-8 text.
    fn read(&self, relative_path: &str) -> Result<String> {
        let path = self.absolute_path_to(relative_path);
        std::fs::read_to_string(&path).map_err(|source| Error::Io { path, source })
    }

    /// Write a file, creating parent directories.
    ///
    /// Overwrites existing contents unless `append` is set.
    fn write(&self, relative_path: &str, contents: &str, append: bool) -> Result<()> {
        use std::io::Write;

        let path = self.absolute_path_to(relative_path);
        let io_err = |source| Error::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(&path)
            .map_err(io_err)?;
        file.write_all(contents.as_bytes()).map_err(io_err)
    }

    /// Remove a file or directory tree. Missing paths are not an error.
    fn remove(&self, relative_path: &str) -> Result<()> {
        let path = self.absolute_path_to(relative_path);
        let removed = if path.is_dir() {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };
        match removed {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(Error::Io { path, source }),
        }
    }

    /// Create a directory and its parents.
    fn mkdir(&self, relative_path: &str) -> Result<()> {
        let path = self.absolute_path_to(relative_path);
        std::fs::create_dir_all(&path).map_err(|source| Error::Io { path, source })
    }

    /// Sorted names of the entries at the project root.
    fn list(&self) -> Result<Vec<String>> {
        let root = self.root();
        let io_err = |source| Error::Io {
            path: root.to_path_buf(),
            source,
        };
        let mut names = Vec::new();
        for entry in std::fs::read_dir(root).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    /// Relative paths of the files matching a shell-style glob.
    ///
    /// `*` stays within one path component, `**/` spans any number of
    /// directories and `{a,b}` selects alternatives. Symlinks to files are
    /// listed; hidden entries are not visited. Results are sorted.
    fn glob(&self, pattern: &str) -> Result<Vec<String>> {
        let matcher = build_glob_matcher(pattern)?;
        let root = self.root();

        let mut matches = Vec::new();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .hidden(true)
            .build();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {}", e);
                    continue;
                }
            };
            // Follows symlinks, so linked files are listed under the link's path.
            if !entry.path().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            let relative = relative_to_string(relative);
            if matcher.is_match(&relative) {
                matches.push(relative);
            }
        }
        matches.sort();
        Ok(matches)
    }
}

/// Compile a glob whose `*` does not cross directory separators.
fn build_glob_matcher(pattern: &str) -> Result<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| Error::Argument(format!("invalid glob pattern '{pattern}': {e}")))
}

/// Relative path with `/` separators on every platform.
fn relative_to_string(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A project directory on disk.
#[derive(Debug, Clone)]
pub struct Context {
    root: PathBuf,
}

impl Context {
    /// Wrap an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Whether the root directory exists.
    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }
}

impl ContextOps for Context {
    fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
