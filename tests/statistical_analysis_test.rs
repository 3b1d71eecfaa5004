// ABOUTME: Integration tests for descriptive statistics and the correlation matrix
// ABOUTME: Checks hand-computed summaries plus symmetry and unit diagonal on the reference week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{derived_week, raw_week};
use pierre_weekly_report::errors::ErrorCode;
use pierre_weekly_report::intelligence::StatisticalAnalyzer;
use pierre_weekly_report::models::NumericColumn;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_summary_of_small_series() {
    let summary = StatisticalAnalyzer::summarize(NumericColumn::Steps, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(summary.count, 4);
    assert!(close(summary.mean.unwrap(), 2.5));
    assert!(close(summary.std.unwrap(), (5.0_f64 / 3.0).sqrt()));
    assert!(close(summary.min.unwrap(), 1.0));
    assert!(close(summary.q25.unwrap(), 1.75));
    assert!(close(summary.median.unwrap(), 2.5));
    assert!(close(summary.q75.unwrap(), 3.25));
    assert!(close(summary.max.unwrap(), 4.0));
}

#[test]
fn test_describe_follows_table_columns() {
    let raw: Vec<_> = StatisticalAnalyzer::describe(&raw_week())
        .into_iter()
        .map(|s| s.column)
        .collect();
    assert_eq!(raw.len(), 8);
    assert!(!raw.contains(&NumericColumn::CalorieBalance));

    let derived = StatisticalAnalyzer::describe(&derived_week());
    assert_eq!(derived.len(), 9);
    assert!(derived.iter().all(|s| s.count == 7));
}

#[test]
fn test_pearson_rejects_mismatched_lengths() {
    let error = StatisticalAnalyzer::pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_pearson_perfect_and_inverse() {
    let x = [1.0, 2.0, 3.0, 4.0];
    assert!(close(StatisticalAnalyzer::pearson(&x, &[2.0, 4.0, 6.0, 8.0]).unwrap(), 1.0));
    assert!(close(StatisticalAnalyzer::pearson(&x, &[8.0, 6.0, 4.0, 2.0]).unwrap(), -1.0));
}

#[test]
fn test_correlation_matrix_shape_and_symmetry() {
    let first = StatisticalAnalyzer::correlation_matrix(&derived_week()).unwrap();
    let second = StatisticalAnalyzer::correlation_matrix(&derived_week()).unwrap();

    assert_eq!(first.size(), NumericColumn::ALL.len());
    assert_eq!(first.columns, NumericColumn::ALL.to_vec());
    assert_eq!(first.columns, second.columns);
    assert!(first.is_symmetric(1e-12));
    for i in 0..first.size() {
        assert!(close(first.get(i, i).unwrap(), 1.0));
        for j in 0..first.size() {
            let r = first.get(i, j).unwrap();
            assert!((-1.0..=1.0).contains(&r), "r[{i}][{j}] = {r}");
        }
    }
}
