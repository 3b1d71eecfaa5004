// ABOUTME: Main library entry point for the Pierre weekly fitness report
// ABOUTME: Generates a seeded synthetic week, derives metrics, and renders descriptive charts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Pierre Weekly Report
//!
//! Produces a one-week fitness report from synthetic data: a seeded generator
//! fills a table of daily metrics, a derived calorie balance is added, and
//! eight charts are saved as 300 DPI PNG files alongside a console summary.
//!
//! ## Architecture
//!
//! - **Dataset**: seeded generation and derived columns
//! - **Intelligence**: descriptive statistics and correlation
//! - **Reports**: figures, chart painters, and the interactive viewer
//! - **Formatters**: console tables and the weekly summary
//! - **Pipeline**: the ordered run tying the stages together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_weekly_report::config::{DisplayMode, ReportConfig};
//! use pierre_weekly_report::errors::AppResult;
//! use pierre_weekly_report::pipeline::WeeklyReport;
//!
//! fn main() -> AppResult<()> {
//!     let config = ReportConfig {
//!         display: DisplayMode::Off,
//!         ..ReportConfig::from_env()?
//!     };
//!     let outcome = WeeklyReport::new(config)?.run(&mut std::io::stdout())?;
//!     println!("{} charts written", outcome.charts.len());
//!     Ok(())
//! }
//! ```

/// Report run configuration from defaults and environment
pub mod config;

/// Application constants grouped by domain
pub mod constants;

/// Synthetic week generation and derived metrics
pub mod dataset;

/// Unified error handling
pub mod errors;

/// Console tables and summary output
pub mod formatters;

/// Descriptive statistics and correlation analysis
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Daily fitness records and the weekly table
pub mod models;

/// Ordered generate → derive → render → summarise run
pub mod pipeline;

/// Chart rendering, PNG output, and display
pub mod reports;
