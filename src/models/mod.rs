// ABOUTME: Data models for the weekly fitness report
// ABOUTME: Re-exports the daily record, the weekly table, and numeric column identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `FitnessRecord`: one synthetic day of metrics
//! - `FitnessTable`: the ordered week, created once, derived once, then read-only
//! - `NumericColumn`: typed column identifiers used by statistics and charts

/// Daily record, weekly table, and column identifiers
pub mod fitness;

pub use fitness::{FitnessRecord, FitnessTable, NumericColumn, DATE_LABEL_FORMAT};
