// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups generation bounds, chart geometry, units, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Figure sizes, font points, reference levels, and file names
pub mod charts;
/// Seed, day count, and metric bounds for the synthetic week
pub mod generation;
/// Unit conversion factors
pub mod units;

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the weekly report binary
    pub const PIERRE_WEEKLY_REPORT: &str = "pierre-weekly-report";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Random seed override
    pub const SEED: &str = "PIERRE_REPORT_SEED";
    /// Day count override
    pub const DAYS: &str = "PIERRE_REPORT_DAYS";
    /// Directory the chart images are written to
    pub const OUTPUT_DIR: &str = "PIERRE_REPORT_OUTPUT_DIR";
    /// Interactive display mode (`off`, `auto`, `on`)
    pub const DISPLAY: &str = "PIERRE_REPORT_DISPLAY";
    /// Fixed report date (`YYYY-MM-DD`) in place of today
    pub const DATE: &str = "PIERRE_REPORT_DATE";
}
