//! # Tarstats Report Command (`commands::report`)
//!
//! File: cli/src/commands/report.rs
//!
//! ## Overview
//!
//! The report is what the `tarstats` binary prints: one block per archive in
//! input order, then the aggregate when totals are requested.
//!
//! ## Architecture
//!
//! 1. Merge the command-line flags over the configured output defaults
//! 2. Scan every archive with [`scanner::scan_many`]
//! 3. Render every `Stats` and write the report in one go
//!
//! Scanning completes before anything is written, so a failing archive
//! leaves stdout empty.
//!
//! Two output shapes exist:
//! - **Text**: the nine-line `key: value` block followed by an empty line
//! - **JSON Lines**: one compact JSON object per line
//!
use crate::core::config::{OutputConfig, OutputFormat};
use crate::core::error::Result;
use crate::scanner;
use crate::stats::Stats;
use anyhow::Context;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Arguments for the statistics report.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Print the stats as JSON, one object per line.
    #[arg(short, long)]
    pub json: bool,

    /// Print numbers with rounded units or thousand separators.
    #[arg(short = 'H', long)]
    pub human: bool,

    /// Also print a total over all tarfiles.
    #[arg(short, long)]
    pub totals: bool,

    /// A tarfile to print stats on.
    #[arg(value_name = "TARFILE", required = true)]
    pub tarfile: Vec<PathBuf>,
}

/// Scans the archives named in `args` and writes the report to `out`.
pub fn handle_report<W: Write>(
    args: &ReportArgs,
    defaults: OutputConfig,
    out: &mut W,
) -> Result<()> {
    let output = defaults.apply_flags(args.json, args.human, args.totals);
    debug!("Effective output settings: {:?}", output);

    let (archives, total) = scanner::scan_many(&args.tarfile)?;
    let report = render_report(&archives, &total, output)?;

    out.write_all(report.as_bytes())
        .context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;
    Ok(())
}

/// Renders all archives, then the total if `output.totals` is set.
pub fn render_report(archives: &[Stats], total: &Stats, output: OutputConfig) -> Result<String> {
    let mut report = String::new();
    let totals = output.totals.then_some(total);
    for stats in archives.iter().chain(totals) {
        match output.format {
            OutputFormat::Json => {
                report.push_str(&stats.to_json()?);
                report.push('\n');
            }
            OutputFormat::Text | OutputFormat::Human => {
                report.push_str(&stats.to_text(output.format == OutputFormat::Human)?);
                report.push('\n');
            }
        }
    }
    Ok(report)
}
