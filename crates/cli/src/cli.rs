// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Bundler and Sorbet helpers for Ruby project directories
#[derive(Parser)]
#[command(name = "srbkit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SRBKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project directory
    #[arg(short = 'd', long = "dir", global = true, default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long, global = true)]
    pub color: bool,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the Gemfile
    Gemfile,
    /// Run a bundle command
    Bundle(BundleArgs),
    /// Show the locked version of a gem
    GemVersion(GemVersionArgs),
    /// Typecheck the project
    Tc(SrbArgs),
    /// Collect typecheck metrics
    Metrics(SrbArgs),
    /// List files selected by sorbet/config
    Files,
    /// Show the checker version
    Version(SrbArgs),
    /// Show the parsed sorbet/config
    Config,
    /// Show the strictness sigil of a file
    Strictness(StrictnessArgs),
    /// Show the commits that added and removed sorbet/config
    Commits,
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct BundleArgs {
    /// Bundler version to pin (overrides config)
    #[arg(long, value_name = "VERSION")]
    pub bundler: Option<String>,

    /// Bundle command and arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,
}

#[derive(clap::Args)]
pub struct GemVersionArgs {
    /// Gem name
    pub gem: String,
}

#[derive(clap::Args)]
pub struct SrbArgs {
    /// Checker binary to run instead of `bundle exec srb` (overrides config)
    #[arg(long, value_name = "PATH")]
    pub sorbet_bin: Option<String>,

    /// Leave checker stderr attached to the terminal
    #[arg(long)]
    pub no_capture_err: bool,

    /// Extra checker arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(clap::Args)]
pub struct StrictnessArgs {
    /// File path relative to the project directory
    pub file: String,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
