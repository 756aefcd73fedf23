//! Command implementations for relcheck.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each handler resolves the input locations, loads the
//! configuration, runs its check, and turns a non-empty violation list
//! into a `CheckFailed` error carrying the full failure message.

use crate::checks::console::ConsoleCheck;
use crate::checks::copyright::CopyrightCheck;
use crate::checks::license::LicenseCheck;
use crate::checks::project_name::ProjectNameCheck;
use crate::checks::CheckReport;
use crate::cli::{AllArgs, Command, ConsoleArgs, CopyrightArgs, LicenseArgs, LocationArgs, ProjectNameArgs};
use crate::config::CheckConfig;
use crate::context::CheckContext;
use crate::error::{RelcheckError, Result};
use std::path::PathBuf;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Copyright(args) => cmd_copyright(args),
        Command::License(args) => cmd_license(args),
        Command::ProjectName(args) => cmd_project_name(args),
        Command::Console(args) => cmd_console(args),
        Command::All(args) => cmd_all(args),
    }
}

/// Resolve the config and context for a location argument set.
fn setup(location: &LocationArgs) -> Result<(CheckConfig, CheckContext)> {
    let config = CheckConfig::load_or_default(location.config.as_deref())?;
    let ctx = CheckContext::resolve(
        location.source_dir.as_deref(),
        location.bin_dir.as_deref(),
        &config.root_marker,
    )?;
    Ok((config, ctx))
}

/// Turn a finished report into Ok/Err and print the pass confirmation.
fn finish(report: CheckReport) -> Result<()> {
    if report.passed() {
        println!("{} check passed.", report.check_name);
        Ok(())
    } else {
        Err(RelcheckError::CheckFailed(report.format_failures()))
    }
}

fn cmd_copyright(args: CopyrightArgs) -> Result<()> {
    let (config, ctx) = setup(&args.location)?;
    let report = CopyrightCheck::new(&ctx.source_root, &config)
        .with_explicit_year(args.year)
        .run()?;
    finish(report)
}

fn cmd_license(args: LicenseArgs) -> Result<()> {
    let (config, ctx) = setup(&args.location)?;
    let report = LicenseCheck::new(&ctx.source_root, &config).run()?;
    finish(report)
}

fn cmd_project_name(args: ProjectNameArgs) -> Result<()> {
    let (config, ctx) = setup(&args.location)?;
    let report = ProjectNameCheck::new(&ctx.source_root, &config).run()?;
    finish(report)
}

fn cmd_console(args: ConsoleArgs) -> Result<()> {
    let (config, ctx) = setup(&args.location)?;
    let binary = require_binary(&ctx, &args.location, &config)?;
    let report = ConsoleCheck::new(&binary, &config).run()?;
    finish(report)
}

fn cmd_all(args: AllArgs) -> Result<()> {
    let (config, ctx) = setup(&args.location)?;

    let mut reports = vec![
        CopyrightCheck::new(&ctx.source_root, &config)
            .with_explicit_year(args.year)
            .run()?,
        LicenseCheck::new(&ctx.source_root, &config).run()?,
        ProjectNameCheck::new(&ctx.source_root, &config).run()?,
    ];

    if !args.skip_console {
        let binary = require_binary(&ctx, &args.location, &config)?;
        reports.push(ConsoleCheck::new(&binary, &config).run()?);
    }

    let mut failures = String::new();
    for report in &reports {
        if report.passed() {
            println!("{} check passed.", report.check_name);
        } else {
            failures.push_str(&report.format_failures());
            failures.push('\n');
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(RelcheckError::CheckFailed(failures.trim_end().to_string()))
    }
}

/// Resolve the product binary and require that it exists.
fn require_binary(
    ctx: &CheckContext,
    location: &LocationArgs,
    config: &CheckConfig,
) -> Result<PathBuf> {
    let binary = ctx.binary_path(location.binary.as_deref(), &config.target_name);
    if !binary.is_file() {
        return Err(RelcheckError::UserError(format!(
            "binary {} not found",
            binary.display()
        )));
    }
    Ok(binary)
}
