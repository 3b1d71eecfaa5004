// ABOUTME: Integration tests for chart output files, pie geometry, and the weekly summary
// ABOUTME: The full render runs wherever a sans-serif system font can be loaded
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{derived_week, init_test_logging, raw_week, report_date};
use pierre_weekly_report::config::{DisplayMode, ReportConfig};
use pierre_weekly_report::errors::ErrorCode;
use pierre_weekly_report::formatters::{OutputFormat, WeeklySummary};
use pierre_weekly_report::models::NumericColumn;
use pierre_weekly_report::pipeline::WeeklyReport;
use pierre_weekly_report::reports::charts::progress::ProgressBreakdown;
use pierre_weekly_report::reports::{ChartKind, Figure, ReportRenderer};
use plotters::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tempfile::TempDir;

fn decode(path: &Path) -> (u32, u32, png::PixelDimensions) {
    let decoder = png::Decoder::new(File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    let info = reader.info();
    (info.width, info.height, info.pixel_dims.unwrap())
}

fn fonts_available() -> bool {
    let mut figure = Figure::new(64, 32, 72).unwrap();
    figure
        .draw(|area| {
            area.draw(&Text::new("8", (4, 4), ("sans-serif", 12.0)))?;
            Ok(())
        })
        .is_ok()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[test]
fn test_saved_figure_decodes_at_300_dpi() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shapes.png");

    let mut figure = Figure::from_inches((2.0, 1.0), 300).unwrap();
    figure
        .draw(|area| {
            area.draw(&Rectangle::new([(10, 10), (200, 100)], BLUE.filled()))?;
            area.draw(&Circle::new((400, 150), 50, RED.filled()))?;
            Ok(())
        })
        .unwrap();
    figure.save(&path).unwrap();

    let (width, height, dims) = decode(&path);
    assert_eq!((width, height), (600, 300));
    assert_eq!(dims.xppu, 11811);
    assert_eq!(dims.yppu, 11811);
    assert_eq!(dims.unit, png::Unit::Meter);
}

#[test]
fn test_saving_over_existing_file_replaces_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("replace.png");
    std::fs::write(&path, b"stale").unwrap();

    Figure::new(4, 4, 300).unwrap().save(&path).unwrap();
    assert_eq!(decode(&path).0, 4);
}

#[test]
fn test_saving_into_missing_directory_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("chart.png");
    let error = Figure::new(4, 4, 300).unwrap().save(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_chart_paths_are_distinct_and_in_output_dir() {
    let dir = TempDir::new().unwrap();
    let renderer = ReportRenderer::new(dir.path(), DisplayMode::Off);
    let paths: HashSet<_> = ChartKind::ALL
        .iter()
        .map(|kind| renderer.chart_path(*kind))
        .collect();
    assert_eq!(paths.len(), 8);
    assert!(paths.iter().all(|path| path.parent() == Some(dir.path())));
    assert_eq!(
        renderer.chart_path(ChartKind::Correlation).file_name().unwrap(),
        "correlation_heatmap.png"
    );
}

#[test]
fn test_rendering_requires_calorie_balance() {
    let dir = TempDir::new().unwrap();
    let renderer = ReportRenderer::new(dir.path(), DisplayMode::Off);
    let error = renderer.render_all(&raw_week()).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_progress_pie_is_complete() {
    let breakdown = ProgressBreakdown::from_table(&derived_week()).unwrap();
    assert_eq!(breakdown.achieved() + breakdown.remaining(), 100.0);

    let slices = breakdown.slices();
    let fractions: f64 = slices.iter().map(|slice| slice.fraction).sum();
    assert!((fractions - 1.0).abs() < 1e-12);
    assert!(slices[0].label.starts_with("Achieved "));
}

#[test]
fn test_summary_matches_arithmetic_means() {
    let table = derived_week();
    let summary = WeeklySummary::from_table(&table).unwrap();

    let steps = mean(&table.column(NumericColumn::Steps).unwrap());
    let sleep = mean(&table.column(NumericColumn::SleepHours).unwrap());
    let water = mean(&table.column(NumericColumn::WaterIntakeMl).unwrap());
    let balance = mean(&table.column(NumericColumn::CalorieBalance).unwrap());
    let progress = mean(&table.column(NumericColumn::ProgressPct).unwrap());

    let lines = summary.lines();
    assert_eq!(lines[0], format!("Average Steps: {steps:.0}"));
    assert_eq!(lines[1], format!("Average Sleep Hours: {sleep:.1} hrs"));
    assert_eq!(lines[2], format!("Average Water Intake: {water:.0} ml"));
    assert_eq!(lines[3], format!("Average Calorie Balance: {balance:.0} kcal"));
    assert_eq!(lines[4], format!("Average Progress: {progress:.1}%"));
}

#[test]
fn test_single_day_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("charts");
    let config = ReportConfig {
        days: 1,
        output_dir: output_dir.clone(),
        display: DisplayMode::Off,
        report_date: Some(report_date()),
        ..ReportConfig::default()
    };

    let error = WeeklyReport::new(config).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(!output_dir.exists());
}

#[test]
fn test_full_report_writes_every_chart() {
    init_test_logging();
    if !fonts_available() {
        eprintln!("no sans-serif font available, skipping full render");
        return;
    }
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("charts");
    let config = ReportConfig {
        output_dir: output_dir.clone(),
        display: DisplayMode::Off,
        report_date: Some(report_date()),
        ..ReportConfig::default()
    };

    let mut stdout = Vec::new();
    let outcome = WeeklyReport::new(config)
        .unwrap()
        .with_summary_format(OutputFormat::Text)
        .run(&mut stdout)
        .unwrap();

    assert_eq!(outcome.charts.len(), 8);
    for (chart, kind) in outcome.charts.iter().zip(ChartKind::ALL) {
        assert_eq!(chart.kind, kind);
        let (inch_w, inch_h) = kind.figure_inches();
        let (width, height, dims) = decode(&chart.path);
        assert_eq!(width as f64, inch_w * 300.0);
        assert_eq!(height as f64, inch_h * 300.0);
        assert_eq!(dims.xppu, 11811);
        assert!(chart.path.starts_with(&output_dir));
    }

    let text = String::from_utf8(stdout).unwrap();
    let dataset = text.find("=== FITNESS DATA SAMPLE ===").unwrap();
    let stats = text.find("Basic statistics:").unwrap();
    let summary = text.find("=== WEEKLY SUMMARY ===").unwrap();
    assert!(dataset < stats && stats < summary);
    assert!(text.trim_end().ends_with("All plots saved as high-resolution PNG files."));
}
