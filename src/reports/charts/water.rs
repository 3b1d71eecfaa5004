// ABOUTME: Chart 3, daily water intake against the recommended minimum
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    column, day_chart, draw_day_mesh, draw_legend, draw_marked_line, draw_reference_line,
    integer_ticks, padded_range, DayAxis,
};
use crate::constants::charts::WATER_RECOMMENDED_MIN_ML;
use crate::errors::AppResult;
use crate::models::{FitnessTable, NumericColumn};
use crate::reports::figure::Canvas;
use crate::reports::style::{ChartStyle, DODGER_BLUE, REFERENCE_RED};
use crate::reports::ChartKind;

/// Draw the water intake line chart
///
/// # Errors
///
/// Returns an error if the table is empty or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let days = DayAxis::new(table)?;
    let water = column(table, NumericColumn::WaterIntakeMl)?;

    let y_range = padded_range(&water, &[WATER_RECOMMENDED_MIN_ML], 0.1);
    let mut chart = day_chart(area, ChartKind::WaterIntake, &days, y_range, style)?;
    draw_day_mesh(&mut chart, &days, "Water Intake (ml)", &integer_ticks, style)?;
    draw_marked_line(&mut chart, &water, DODGER_BLUE, None, style)?;
    let label = reference_label();
    draw_reference_line(
        &mut chart,
        &days,
        WATER_RECOMMENDED_MIN_ML,
        REFERENCE_RED,
        Some(&label),
        style,
    )?;
    draw_legend(&mut chart, style)
}

/// Legend entry for the recommended minimum line
#[must_use]
pub fn reference_label() -> String {
    format!("Recommended Minimum ({WATER_RECOMMENDED_MIN_ML:.0}ml)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_label_names_the_minimum() {
        assert_eq!(reference_label(), "Recommended Minimum (2000ml)");
    }
}
