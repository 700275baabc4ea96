// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sorbet type checker conventions and file formats.

pub mod config;
pub mod metrics;
pub mod sigils;

pub use config::Config;
pub use metrics::Metrics;

/// Conventional location of the checker config, relative to the project root.
pub const CONFIG_PATH: &str = "sorbet/config";

/// Checker executable name when run through `bundle exec`.
pub const BIN_NAME: &str = "srb";

/// Exit code reported when the checker was killed (128 + SIGKILL).
pub const KILLED_CODE: i32 = 137;

/// Exit code reported when the checker segfaulted (128 + SIGSEGV).
pub const SEGFAULT_CODE: i32 = 139;

/// Extensions checked when the config declares none.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".rb", ".rbi"];
