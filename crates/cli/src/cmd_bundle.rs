// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `srbkit gemfile`, `srbkit bundle` and `srbkit gem-version`.

use anyhow::Result;

use srbkit::cli::{BundleArgs, GemVersionArgs};
use srbkit::context::bundle::{GEMFILE, bundle_command};
use srbkit::{Bundle, Context, ExecOptions, Report, Settings};

pub fn gemfile(context: &Context) -> Result<Report> {
    Ok(Report::File {
        path: GEMFILE.to_string(),
        contents: context.read_gemfile()?,
    })
}

pub fn bundle(context: &Context, settings: &Settings, args: &BundleArgs) -> Result<Report> {
    let command = args.command.join(" ");
    let opts = ExecOptions {
        version: args
            .bundler
            .clone()
            .or_else(|| settings.bundle.version.clone()),
        capture_err: true,
    };
    let result = context.bundle(&command, &opts)?;
    Ok(Report::Exec {
        command: bundle_command(&command, opts.version.as_deref()),
        result,
    })
}

pub fn gem_version(context: &Context, args: &GemVersionArgs) -> Result<Report> {
    Ok(Report::Value {
        name: args.gem.clone(),
        value: context.gem_version_from_gemfile_lock(&args.gem)?,
    })
}
