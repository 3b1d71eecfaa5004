// ABOUTME: Command-line entry point that generates the weekly fitness report
// ABOUTME: Flags override environment variables, which override built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly fitness report generator.
//!
//! Usage:
//! ```bash
//! # Seed 42, seven days ending today, charts in the current directory
//! cargo run --bin pierre-weekly-report
//!
//! # Reproducible run into a separate directory without opening a viewer
//! cargo run --bin pierre-weekly-report -- --date 2025-10-19 --output-dir out --display off
//!
//! # Summary as JSON, debug logging
//! cargo run --bin pierre-weekly-report -- --summary-format json -v
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use pierre_weekly_report::config::{DisplayMode, ReportConfig};
use pierre_weekly_report::formatters::OutputFormat;
use pierre_weekly_report::logging::LoggingConfig;
use pierre_weekly_report::pipeline::WeeklyReport;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pierre-weekly-report",
    about = "Pierre Weekly Fitness Report",
    long_about = "Generate a synthetic week of fitness metrics and save descriptive charts as 300 DPI PNG files"
)]
struct ReportArgs {
    /// Random seed for the synthetic data
    #[arg(long)]
    seed: Option<u64>,

    /// Number of days ending on the report date
    #[arg(long)]
    days: Option<u32>,

    /// Directory the charts are written to (created if missing)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Open charts in an image viewer: off, auto, or on
    #[arg(long)]
    display: Option<DisplayMode>,

    /// Last day of the report (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Summary output: text or json
    #[arg(long, default_value = "text")]
    summary_format: OutputFormat,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl ReportArgs {
    fn apply(&self, mut config: ReportConfig) -> ReportConfig {
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(days) = self.days {
            config.days = days;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        if let Some(display) = self.display {
            config.display = display;
        }
        if self.date.is_some() {
            config.report_date = self.date;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = ReportArgs::parse();

    let config = args.apply(ReportConfig::from_env().context("Invalid report environment")?);
    LoggingConfig::from_env()
        .verbose(args.verbose)
        .init(&config.summary())?;

    let report = WeeklyReport::new(config)?.with_summary_format(args.summary_format);
    let mut stdout = BufWriter::new(io::stdout().lock());
    let outcome = report.run(&mut stdout)?;

    info!(
        charts = outcome.charts.len(),
        rows = outcome.table.len(),
        "Report finished"
    );
    Ok(())
}
