// ABOUTME: Synthetic dataset generation constants (seed, day count, metric bounds)
// ABOUTME: Bounds are lower-inclusive; integer bounds are upper-exclusive
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Seed used when no override is configured
pub const DEFAULT_SEED: u64 = 42;

/// Number of days in the generated week
pub const DEFAULT_DAYS: u32 = 7;

/// Fewest days a report can cover; correlations need two points
pub const MIN_REPORT_DAYS: u32 = 2;

/// Daily step count `[low, high)`
pub const STEPS_RANGE: (u32, u32) = (3500, 12000);

/// Calories burned per day `[low, high)`
pub const CALORIES_BURNED_RANGE: (u32, u32) = (1800, 2800);

/// Calories consumed per day `[low, high)`
pub const CALORIES_CONSUMED_RANGE: (u32, u32) = (2000, 3200);

/// Water intake in millilitres `[low, high)`
pub const WATER_INTAKE_ML_RANGE: (u32, u32) = (1500, 3500);

/// Hours of sleep, rounded to [`SLEEP_HOURS_DECIMALS`]
pub const SLEEP_HOURS_RANGE: (f64, f64) = (5.5, 9.0);

/// Decimal places kept for sleep hours
pub const SLEEP_HOURS_DECIMALS: u32 = 1;

/// Body mass index
pub const BMI_RANGE: (f64, f64) = (20.0, 25.0);

/// Decimal places kept for BMI
pub const BMI_DECIMALS: u32 = 2;

/// Basal metabolic rate in kcal/day
pub const BMR_RANGE: (f64, f64) = (1400.0, 1800.0);

/// Decimal places kept for BMR
pub const BMR_DECIMALS: u32 = 2;

/// Goal progress percentage
pub const PROGRESS_PCT_RANGE: (f64, f64) = (60.0, 100.0);

/// Decimal places kept for progress
pub const PROGRESS_PCT_DECIMALS: u32 = 1;
