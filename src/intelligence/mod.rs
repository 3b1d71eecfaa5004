// ABOUTME: Intelligence module for descriptive analysis of the weekly fitness table
// ABOUTME: Re-exports the statistics engine used by console output and the heatmap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Descriptive statistics over the generated week: per-column summaries and the
//! Pearson correlation matrix drawn by the heatmap.

/// Descriptive statistics and correlation
pub mod statistical_analysis;

pub use statistical_analysis::{ColumnSummary, CorrelationMatrix, StatisticalAnalyzer};
