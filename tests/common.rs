// ABOUTME: Shared fixtures for weekly report integration tests
// ABOUTME: Provides a fixed report date, derived tables, and quiet logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_weekly_report`

use chrono::NaiveDate;
use pierre_weekly_report::dataset::{apply_calorie_balance, generate_week};
use pierre_weekly_report::models::FitnessTable;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Seed used by the reference report
pub const SEED: u64 = 42;

/// Day count used by the reference report
pub const DAYS: u32 = 7;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed "today" so dates are reproducible
pub fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 19).unwrap()
}

/// Reference week before derivation
pub fn raw_week() -> FitnessTable {
    generate_week(SEED, DAYS, report_date()).unwrap()
}

/// Reference week with calorie balance applied
pub fn derived_week() -> FitnessTable {
    let mut table = raw_week();
    apply_calorie_balance(&mut table);
    table
}
