// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Checker commands: `tc`, `metrics`, `files`, `version`, `config`,
//! `strictness` and `commits`.

use anyhow::Result;

use srbkit::cli::{SrbArgs, StrictnessArgs};
use srbkit::{Context, Report, Settings, Sorbet, SrbOptions};

/// Checker options from CLI flags, falling back to settings.
///
/// `--no-capture-err` wins, then `sorbet.capture_err` from settings, then
/// the command's own default.
fn srb_options(settings: &Settings, args: &SrbArgs, default_capture_err: bool) -> SrbOptions {
    SrbOptions {
        sorbet_bin: args
            .sorbet_bin
            .clone()
            .or_else(|| settings.sorbet.bin.clone()),
        capture_err: !args.no_capture_err
            && settings.sorbet.capture_err.unwrap_or(default_capture_err),
    }
}

fn arg_refs(args: &SrbArgs) -> Vec<&str> {
    args.args.iter().map(String::as_str).collect()
}

pub fn typecheck(context: &Context, settings: &Settings, args: &SrbArgs) -> Result<Report> {
    let opts = srb_options(settings, args, true);
    let result = context.srb_tc(&arg_refs(args), &opts)?;
    let command = match &opts.sorbet_bin {
        Some(bin) => format!("{bin} {}", args.args.join(" ")),
        None => format!("bundle exec srb tc {}", args.args.join(" ")),
    };
    Ok(Report::Exec {
        command: command.trim_end().to_string(),
        result,
    })
}

pub fn metrics(context: &Context, settings: &Settings, args: &SrbArgs) -> Result<Report> {
    // Metrics runs leave stderr on the terminal unless settings say otherwise.
    let opts = srb_options(settings, args, false);
    Ok(Report::Metrics {
        metrics: context.srb_metrics(&arg_refs(args), &opts)?,
    })
}

pub fn files(context: &Context) -> Result<Report> {
    Ok(Report::Files {
        files: context.srb_files(None)?,
    })
}

pub fn version(context: &Context, settings: &Settings, args: &SrbArgs) -> Result<Report> {
    let opts = srb_options(settings, args, true);
    Ok(Report::Value {
        name: "sorbet".to_string(),
        value: context.srb_version(&arg_refs(args), &opts)?,
    })
}

pub fn config(context: &Context) -> Result<Report> {
    Ok(Report::Config {
        config: context.sorbet_config()?,
    })
}

pub fn strictness(context: &Context, args: &StrictnessArgs) -> Report {
    Report::Strictness {
        file: args.file.clone(),
        strictness: context.read_file_strictness(&args.file),
    }
}

pub fn commits(context: &Context) -> Result<Report> {
    Ok(Report::Commits {
        intro: context.sorbet_intro_commit()?,
        removal: context.sorbet_removal_commit()?,
    })
}

#[cfg(test)]
#[path = "cmd_sorbet_tests.rs"]
mod tests;
