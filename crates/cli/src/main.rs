// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! srbkit CLI entry point.

use clap::{CommandFactory, Parser};
use termcolor::StandardStream;
use tracing_subscriber::{EnvFilter, fmt};

use srbkit::cli::{Cli, Command, OutputFormat};
use srbkit::color::resolve_color;
use srbkit::error::ExitCode;
use srbkit::output::{self, Report, text::TextFormatter};
use srbkit::{Context, settings};

mod cmd_bundle;
mod cmd_sorbet;

fn init_logging() {
    let filter = EnvFilter::try_from_env("SRBKIT_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            let err = e.downcast_ref::<srbkit::Error>();
            // Aborted checker runs still carry whatever they printed.
            if let Some(result) = err.and_then(srbkit::Error::exec_result) {
                print!("{}", result.out);
                if let Some(stderr) = &result.err {
                    eprint!("{stderr}");
                }
            }
            eprintln!("srbkit: {}", e);
            match err {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    };

    if let Command::Completions(args) = command {
        clap_complete::generate(
            args.shell,
            &mut Cli::command(),
            "srbkit",
            &mut std::io::stdout(),
        );
        return Ok(ExitCode::Success);
    }

    let root = cli.dir.canonicalize().map_err(|_| {
        srbkit::Error::Argument(format!(
            "project directory not found: {}",
            cli.dir.display()
        ))
    })?;
    let settings = settings::resolve(cli.config.as_deref(), &root)?;
    let context = Context::new(root);
    if !context.exists() {
        return Err(srbkit::Error::Argument(format!(
            "not a directory: {}",
            cli.dir.display()
        ))
        .into());
    }

    let report = match command {
        Command::Gemfile => cmd_bundle::gemfile(&context)?,
        Command::Bundle(args) => cmd_bundle::bundle(&context, &settings, args)?,
        Command::GemVersion(args) => cmd_bundle::gem_version(&context, args)?,
        Command::Tc(args) => cmd_sorbet::typecheck(&context, &settings, args)?,
        Command::Metrics(args) => cmd_sorbet::metrics(&context, &settings, args)?,
        Command::Files => cmd_sorbet::files(&context)?,
        Command::Version(args) => cmd_sorbet::version(&context, &settings, args)?,
        Command::Config => cmd_sorbet::config(&context)?,
        Command::Strictness(args) => cmd_sorbet::strictness(&context, args),
        Command::Commits => cmd_sorbet::commits(&context)?,
        Command::Completions(_) => return Ok(ExitCode::Success),
    };

    emit(&cli, &report)?;
    Ok(if report.is_success() {
        ExitCode::Success
    } else {
        ExitCode::CommandFailed
    })
}

/// Render a report in the requested format.
fn emit(cli: &Cli, report: &Report) -> anyhow::Result<()> {
    match cli.output {
        OutputFormat::Json => output::json::write_report(std::io::stdout().lock(), report)?,
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(resolve_color(cli.color, cli.no_color));
            let mut formatter = TextFormatter::new(stdout.lock());
            formatter.write_report(report)?;
            if let Report::Exec { result, .. } = report
                && let Some(stderr) = &result.err
            {
                eprint!("{stderr}");
            }
        }
    }
    Ok(())
}
