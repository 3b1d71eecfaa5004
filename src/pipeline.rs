// ABOUTME: Ordered weekly report run: generate, print, derive, render, summarise
// ABOUTME: Writes the console report to any io::Write and stops at the first error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Weekly Report Pipeline
//!
//! A run is strictly sequential:
//!
//! 1. generate the synthetic week for the configured seed, day count, and date
//! 2. print the dataset and its descriptive statistics
//! 3. derive calorie balance in place
//! 4. render the eight charts in order
//! 5. print the weekly summary

use crate::config::ReportConfig;
use crate::dataset::{apply_calorie_balance, generate_week};
use crate::errors::AppResult;
use crate::formatters::{
    format_dataset, format_describe, OutputFormat, WeeklySummary, DATASET_HEADING,
    STATISTICS_HEADING,
};
use crate::intelligence::StatisticalAnalyzer;
use crate::models::FitnessTable;
use crate::reports::{RenderedChart, ReportRenderer};
use std::io::Write;
use std::time::Instant;
use tracing::info;

/// Everything a completed run produced
#[derive(Debug, Clone)]
pub struct ReportOutcome {
    /// The derived table the charts were drawn from
    pub table: FitnessTable,
    /// Saved charts, in render order
    pub charts: Vec<RenderedChart>,
    /// Averages printed at the end
    pub summary: WeeklySummary,
}

/// A configured weekly report run
#[derive(Debug, Clone)]
pub struct WeeklyReport {
    config: ReportConfig,
    renderer: ReportRenderer,
    summary_format: OutputFormat,
}

impl WeeklyReport {
    /// Run for `config`, rendering into its output directory
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    pub fn new(config: ReportConfig) -> AppResult<Self> {
        config.validate()?;
        let renderer = ReportRenderer::from_config(&config);
        Ok(Self {
            config,
            renderer,
            summary_format: OutputFormat::default(),
        })
    }

    /// Choose how the summary is printed
    #[must_use]
    pub const fn with_summary_format(mut self, format: OutputFormat) -> Self {
        self.summary_format = format;
        self
    }

    /// Execute the run, writing the console report to `out`
    ///
    /// # Errors
    ///
    /// Returns the first generation, rendering, or I/O error encountered
    pub fn run<W: Write>(&self, out: &mut W) -> AppResult<ReportOutcome> {
        let started = Instant::now();
        let today = self.config.resolve_date();
        info!(
            seed = self.config.seed,
            days = self.config.days,
            %today,
            "Generating synthetic week"
        );
        let mut table = generate_week(self.config.seed, self.config.days, today)?;

        writeln!(out, "{DATASET_HEADING}")?;
        writeln!(out, "{}", format_dataset(&table))?;
        let summaries = StatisticalAnalyzer::describe(&table);
        writeln!(out, "\n{STATISTICS_HEADING}")?;
        writeln!(out, "{}", format_describe(&summaries))?;

        apply_calorie_balance(&mut table);
        info!(rows = table.len(), "Derived calorie balance");

        let charts = self.renderer.render_all(&table)?;
        info!(
            charts = charts.len(),
            output_dir = %self.renderer.output_dir().display(),
            "Charts rendered"
        );

        let summary = WeeklySummary::from_table(&table)?;
        writeln!(out, "\n{}", summary.render(self.summary_format)?)?;
        out.flush()?;

        info!(
            elapsed_ms = started.elapsed().as_millis(),
            "Weekly report complete"
        );
        Ok(ReportOutcome {
            table,
            charts,
            summary,
        })
    }
}
