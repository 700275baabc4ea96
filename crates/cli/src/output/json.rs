// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! Every report is one pretty-printed object tagged with `kind`.

use std::io::Write;

use super::Report;

/// Write a report as JSON followed by a newline.
pub fn write_report<W: Write>(mut writer: W, report: &Report) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
