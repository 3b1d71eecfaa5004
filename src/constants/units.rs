// ABOUTME: Unit conversion constants for print resolution and typography
// ABOUTME: Provides named constants to eliminate magic numbers in figure sizing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Typographic points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Meters per inch conversion factor
pub const METERS_PER_INCH: f64 = 0.0254;

/// Percentage denominator
pub const PERCENT: f64 = 100.0;
