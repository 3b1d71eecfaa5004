// ABOUTME: Chart 2, calories burned and consumed as two lines on one axis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    column, day_chart, draw_day_mesh, draw_legend, draw_marked_line, integer_ticks,
    padded_range, DayAxis,
};
use crate::errors::AppResult;
use crate::models::{FitnessTable, NumericColumn};
use crate::reports::figure::Canvas;
use crate::reports::style::{ChartStyle, SERIES_BLUE, SERIES_ORANGE};
use crate::reports::ChartKind;

/// Draw the burned-versus-consumed line chart
///
/// # Errors
///
/// Returns an error if the table is empty or the backend fails
pub fn draw(area: &Canvas<'_>, table: &FitnessTable, style: &ChartStyle) -> AppResult<()> {
    let days = DayAxis::new(table)?;
    let burned = column(table, NumericColumn::CaloriesBurned)?;
    let consumed = column(table, NumericColumn::CaloriesConsumed)?;

    let y_range = padded_range(&burned, &consumed, 0.1);
    let mut chart = day_chart(area, ChartKind::Calories, &days, y_range, style)?;
    draw_day_mesh(&mut chart, &days, "Calories (kcal)", &integer_ticks, style)?;
    draw_marked_line(&mut chart, &burned, SERIES_BLUE, Some("Calories Burned"), style)?;
    draw_marked_line(
        &mut chart,
        &consumed,
        SERIES_ORANGE,
        Some("Calories Consumed"),
        style,
    )?;
    draw_legend(&mut chart, style)
}
