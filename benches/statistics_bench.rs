// ABOUTME: Criterion benchmarks for synthetic week generation and the statistics engine
// ABOUTME: Measures describe and correlation cost as the day span grows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the report's statistics engine.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pierre_weekly_report::dataset::{apply_calorie_balance, generate_week};
use pierre_weekly_report::intelligence::StatisticalAnalyzer;
use pierre_weekly_report::models::FitnessTable;

const DAY_SPANS: [u32; 4] = [7, 30, 90, 365];

fn derived_table(days: u32) -> FitnessTable {
    let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
    let mut table = generate_week(42, days, today).unwrap();
    apply_calorie_balance(&mut table);
    table
}

fn bench_generation(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
    let mut group = c.benchmark_group("generation");
    for days in DAY_SPANS {
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| generate_week(black_box(42), black_box(days), today).unwrap());
        });
    }
    group.finish();
}

fn bench_describe(c: &mut Criterion) {
    let mut group = c.benchmark_group("describe");
    for days in DAY_SPANS {
        let table = derived_table(days);
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::from_parameter(days), &table, |b, table| {
            b.iter(|| StatisticalAnalyzer::describe(black_box(table)));
        });
    }
    group.finish();
}

fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");
    for days in DAY_SPANS {
        let table = derived_table(days);
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::from_parameter(days), &table, |b, table| {
            b.iter(|| StatisticalAnalyzer::correlation_matrix(black_box(table)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_describe, bench_correlation);
criterion_main!(benches);
