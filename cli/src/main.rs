//! # Tarstats Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file is the entry point of the `tarstats` binary. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading output defaults from the configuration file
//! - Running the report and mapping failures to exit codes
//!
//! ## Examples
//!
//! ```bash
//! # Plain key/value report for one archive
//! tarstats backup.tgz
//!
//! # JSON Lines for several archives plus their total
//! tarstats --json --totals a.tar b.tar.xz
//! ```
//!
//! Exit codes: `0` on success, `1` when an archive cannot be read, `2` on
//! usage errors (including `--json` together with `--human`).
//!
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;
use tarstats::commands::report::{self, ReportArgs};
use tarstats::core::config;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "tarstats",
    about = "Print some stats about tarfiles.",
    version
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Read output defaults from this TOML file instead of the user config.
    #[arg(long, env = "TARSTATS_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if cli.report.json && cli.report.human {
        Cli::command()
            .error(
                ErrorKind::ArgumentConflict,
                "Options --json and --human are mutually exclusive.",
            )
            .exit();
    }

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let result = config::load_config(cli.config.as_deref()).and_then(|cfg| {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        report::handle_report(&cli.report, cfg.output, &mut out)
    });

    if let Err(e) = result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
