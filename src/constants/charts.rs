// ABOUTME: Chart geometry, typography, reference lines, and output file names
// ABOUTME: Sizes are in inches and points, converted to pixels at the output DPI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Output resolution for every saved chart
pub const DPI: u32 = 300;

/// Standard landscape figure (width, height) in inches
pub const LANDSCAPE_FIGURE_IN: (f64, f64) = (10.0, 6.0);

/// Square figure used by the progress pie
pub const SQUARE_FIGURE_IN: (f64, f64) = (6.0, 6.0);

/// Taller figure used by the correlation heatmap
pub const HEATMAP_FIGURE_IN: (f64, f64) = (10.0, 7.0);

/// Chart title size in points
pub const TITLE_PT: f64 = 18.0;

/// Axis description size in points
pub const AXIS_LABEL_PT: f64 = 12.0;

/// Tick and annotation size in points
pub const TICK_LABEL_PT: f64 = 10.0;

/// Legend entry size in points
pub const LEGEND_PT: f64 = 11.0;

/// Plotted line width in points
pub const LINE_WIDTH_PT: f64 = 2.0;

/// Marker radius in points
pub const MARKER_RADIUS_PT: f64 = 4.0;

/// Daily water intake considered the recommended minimum
pub const WATER_RECOMMENDED_MIN_ML: f64 = 2000.0;

/// Recommended nightly sleep
pub const SLEEP_RECOMMENDED_HOURS: f64 = 8.0;

/// Neutral calorie balance
pub const CALORIE_BALANCE_NEUTRAL: f64 = 0.0;

/// Gap between a steps bar and its value label, in steps
pub const STEPS_LABEL_OFFSET: f64 = 200.0;

/// Gap between a sleep bar and its value label, in hours
pub const SLEEP_LABEL_OFFSET: f64 = 0.1;

/// Fraction of the radius the achieved slice is pulled out by
pub const PIE_EXPLODE: f64 = 0.05;

/// Angle of the first slice edge, degrees counter-clockwise from 3 o'clock
pub const PIE_START_ANGLE_DEG: f64 = 90.0;

/// Saved image file names
pub mod files {
    /// Chart 1
    pub const STEPS: &str = "steps_per_day.png";
    /// Chart 2
    pub const CALORIES: &str = "calories_comparison.png";
    /// Chart 3
    pub const WATER: &str = "water_intake.png";
    /// Chart 4
    pub const SLEEP: &str = "sleep_pattern.png";
    /// Chart 5
    pub const BMI_BMR: &str = "bmi_bmr_trend.png";
    /// Chart 6
    pub const PROGRESS: &str = "overall_progress.png";
    /// Chart 7
    pub const CORRELATION: &str = "correlation_heatmap.png";
    /// Chart 8
    pub const CALORIE_BALANCE: &str = "calorie_balance.png";
}
