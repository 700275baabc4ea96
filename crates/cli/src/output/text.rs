//! Text output formatter.
//!
//! Values are printed bare so output can be piped:
//! ```text
//! $ srbkit gem-version sorbet
//! 0.5.11144
//! $ srbkit commits
//! intro: abc1234 2023-11-14T22:13:20+00:00
//! removal: none
//! ```

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use super::Report;
use crate::color::scheme;
use crate::git::Commit;

/// Text output formatter with color support.
pub struct TextFormatter<W> {
    out: W,
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a new text formatter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a report.
    pub fn write_report(&mut self, report: &Report) -> std::io::Result<()> {
        match report {
            Report::File { path, contents } => match contents {
                Some(contents) => write!(self.out, "{contents}"),
                None => self.write_absent(&format!("no {path}")),
            },
            Report::Value { name, value } => match value {
                Some(value) => self.writeln_colored(&scheme::value(), value),
                None => self.write_absent(&format!("{name}: not found")),
            },
            // Captured stderr is left to the caller.
            Report::Exec { result, .. } => write!(self.out, "{}", result.out),
            Report::Metrics { metrics } => match metrics {
                Some(metrics) => {
                    for (name, value) in metrics {
                        self.write_label(name)?;
                        writeln!(self.out, " {value}")?;
                    }
                    Ok(())
                }
                None => self.write_absent("no metrics"),
            },
            Report::Files { files } => {
                for file in files {
                    self.writeln_colored(&scheme::path(), file)?;
                }
                Ok(())
            }
            Report::Config { config } => writeln!(self.out, "{}", config.options_string()),
            Report::Strictness { file, strictness } => {
                self.out.set_color(&scheme::path())?;
                write!(self.out, "{file}")?;
                self.out.reset()?;
                write!(self.out, ": ")?;
                match strictness {
                    Some(s) => self.writeln_colored(&scheme::value(), s),
                    None => self.writeln_colored(&scheme::absent(), "none"),
                }
            }
            Report::Commits { intro, removal } => {
                self.write_commit("intro", intro.as_ref())?;
                self.write_commit("removal", removal.as_ref())
            }
        }
    }

    fn write_commit(&mut self, label: &str, commit: Option<&Commit>) -> std::io::Result<()> {
        self.write_label(label)?;
        write!(self.out, " ")?;
        let Some(commit) = commit else {
            return self.writeln_colored(&scheme::absent(), "none");
        };
        self.out.set_color(&scheme::sha())?;
        write!(self.out, "{}", commit.sha)?;
        self.out.reset()?;
        match commit.time() {
            Some(time) => writeln!(self.out, " {}", time.to_rfc3339()),
            None => writeln!(self.out, " {}", commit.timestamp),
        }
    }

    fn write_label(&mut self, label: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::label())?;
        write!(self.out, "{label}:")?;
        self.out.reset()
    }

    fn write_absent(&mut self, message: &str) -> std::io::Result<()> {
        self.writeln_colored(&scheme::absent(), message)
    }

    fn writeln_colored(&mut self, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
        self.out.set_color(spec)?;
        write!(self.out, "{text}")?;
        self.out.reset()?;
        writeln!(self.out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
