//! `license-compat` — check the project's bundled dependencies against an
//! LGPLv3 compatibility policy.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Build the compiled-in policy and dependency set ([`policy`], [`project`]).
//! 3. Evaluate every dependency ([`policy::CompatPolicy::evaluate`]).
//! 4. Render the requested report ([`report`]).
//! 5. Exit `0` (all compatible) or `1` (at least one finding).

mod cli;
mod models;
mod policy;
mod project;
mod report;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, ReportFormat};
use policy::CompatPolicy;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let policy = CompatPolicy::default();
    let deps = project::dependencies();
    let evaluation = policy.evaluate(&deps);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.report {
        ReportFormat::Terminal => {
            writeln!(out, "Checking license compatibility with {}...", policy.target)?;
            report::terminal::render(&mut out, &evaluation, &deps, &policy.target, cli.quiet)?;
        }
        ReportFormat::Table => {
            writeln!(out, "Checking license compatibility with {}...", policy.target)?;
            report::table::render(&mut out, &evaluation, &deps, &policy.target, cli.quiet)?;
        }
        ReportFormat::Json => {
            report::json::render(&mut out, &evaluation, &deps, &policy.target)?;
        }
    }

    // Exit code is the machine-readable result in terminal mode.
    if !evaluation.all_compatible {
        std::process::exit(1);
    }

    Ok(())
}
