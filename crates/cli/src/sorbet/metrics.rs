// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for the JSON metrics file written by `srb tc --metrics-file`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Metric name to count.
pub type Metrics = BTreeMap<String, i64>;

/// Prefix the checker puts on every metric name.
pub const DEFAULT_PREFIX: &str = "ruby_typer.unknown.";

#[derive(Debug, Deserialize)]
struct MetricsFile {
    #[serde(default)]
    metrics: Vec<MetricEntry>,
}

#[derive(Debug, Deserialize)]
struct MetricEntry {
    name: String,
    #[serde(default)]
    value: Option<i64>,
}

/// Parse metrics JSON, stripping `prefix` from metric names.
///
/// A metric without a value counts as zero.
pub fn parse_string(content: &str, prefix: &str) -> serde_json::Result<Metrics> {
    let file: MetricsFile = serde_json::from_str(content)?;
    Ok(file
        .metrics
        .into_iter()
        .map(|m| {
            let name = m.name.strip_prefix(prefix).unwrap_or(&m.name).to_string();
            (name, m.value.unwrap_or(0))
        })
        .collect())
}

/// Read and parse a metrics file with the default prefix.
pub fn parse_file(path: &Path) -> Result<Metrics> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_string(&content, DEFAULT_PREFIX).map_err(|e| Error::Metrics {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
