// ABOUTME: Chart 1, steps walked per day as viridis-shaded bars
// ABOUTME: Every bar carries its step count just above the top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    bars, column, day_chart, draw_day_mesh, integer_ticks, value_labels, zero_based_range,
    DayAxis,
};
use crate::constants::charts::STEPS_LABEL_OFFSET;
use crate::errors::AppResult;
use crate::models::{FitnessTable, NumericColumn};
use crate::reports::figure::Canvas;
use crate::reports::style::{ChartStyle, VIRIDIS};
use crate::reports::ChartKind;

/// Draw the steps bar chart
///
/// # Errors
///
/// Returns an error if the table is empty or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let days = DayAxis::new(table)?;
    let steps = column(table, NumericColumn::Steps)?;
    let palette = VIRIDIS.palette(days.len());

    let mut chart = day_chart(area, ChartKind::Steps, &days, zero_based_range(&steps, 0.12), style)?;
    draw_day_mesh(&mut chart, &days, "Steps", &integer_ticks, style)?;
    chart.draw_series(bars(&steps, |i| palette[i]))?;
    chart.draw_series(value_labels(
        &steps,
        STEPS_LABEL_OFFSET,
        step_label,
        style,
    ))?;
    Ok(())
}

/// Step count printed above a bar
#[must_use]
pub fn step_label(steps: f64) -> String {
    format!("{steps:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_label_is_the_literal_count() {
        assert_eq!(step_label(8432.0), "8432");
        assert_eq!(step_label(11_999.0), "11999");
    }
}
